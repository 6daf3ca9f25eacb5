//! Structure builders for the three render modes.
//!
//! Each builder produces the flat, display-ordered node list for one view.
//! Only permission-denied failures on directory listing are recovered
//! inline (as a marker node at the failing level); all other I/O errors
//! propagate to the caller.

use crate::error::FoldermapError;
use crate::render::{walker, RenderOptions};
use crate::types::Node;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Render only the target directory's subtree.
pub fn target_structure(path: &Path, opts: &RenderOptions) -> Result<Vec<Node>, FoldermapError> {
    let mut nodes = Vec::new();
    collect_children(path, 0, opts, &mut nodes)?;
    Ok(nodes)
}

/// Recursively append the sorted children of `path` at `depth`.
///
/// A denied listing becomes a single marker node at `depth` and traversal
/// continues with the directory's siblings.
fn collect_children(
    path: &Path,
    depth: usize,
    opts: &RenderOptions,
    nodes: &mut Vec<Node>,
) -> Result<(), FoldermapError> {
    let entries = match walker::sorted_entries(path, opts.hide_hidden) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %path.display(), "directory listing denied");
            nodes.push(Node::permission_denied(depth));
            return Ok(());
        }
        Err(e) => return Err(FoldermapError::io(path, e)),
    };
    for entry in entries {
        if entry.is_dir {
            nodes.push(Node::directory(entry.name, depth));
            collect_children(&entry.path, depth + 1, opts, nodes)?;
        } else {
            nodes.push(Node::file(entry.name, depth));
        }
    }
    Ok(())
}

/// Render the path from the filesystem root down to the target, one
/// ancestor per line, expanding the target's subtree at the deepest level.
///
/// A missing component renders as a not-found marker and stops the walk.
pub fn preceding_structure(path: &Path, opts: &RenderOptions) -> Result<Vec<Node>, FoldermapError> {
    let resolved = resolve_target(path)?;
    let mut nodes = Vec::new();

    // Root segment: empty name, formatted as a bare "/".
    nodes.push(Node::directory("", 0));

    let mut current = root_of(&resolved);
    let mut depth = 1;
    for part in resolved
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
    {
        current.push(&part);
        if current.exists() {
            nodes.push(Node::directory(part, depth));
            if current == resolved {
                collect_children(&current, depth + 1, opts, &mut nodes)?;
            }
        } else {
            nodes.push(Node::not_found(part, depth));
            break;
        }
        depth += 1;
    }
    Ok(nodes)
}

/// Render the target and every alphabetically-later sibling directory of
/// its parent, each at top level with its subtree.
pub fn succeeding_structure(path: &Path, opts: &RenderOptions) -> Result<Vec<Node>, FoldermapError> {
    let parent = path
        .parent()
        .ok_or_else(|| FoldermapError::InvalidPath(path.to_path_buf()))?;
    let target_name = path
        .file_name()
        .ok_or_else(|| FoldermapError::InvalidPath(path.to_path_buf()))?
        .to_string_lossy()
        .into_owned();

    let dirs = match walker::sorted_dir_names(parent) {
        Ok(dirs) => dirs,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Ok(vec![Node::permission_denied(0)]);
        }
        Err(e) => return Err(FoldermapError::io(parent, e)),
    };
    let idx = dirs
        .iter()
        .position(|name| *name == target_name)
        .ok_or_else(|| FoldermapError::TargetNotFound(path.to_path_buf()))?;

    let mut nodes = Vec::new();
    for name in &dirs[idx..] {
        nodes.push(Node::directory(name.clone(), 0));
        collect_children(&parent.join(name), 1, opts, &mut nodes)?;
    }
    Ok(nodes)
}

/// Resolve the target to an absolute path. Canonicalizes when possible so
/// the root-to-target walk sees real ancestors; a nonexistent target falls
/// back to a cwd-joined path so the walk can surface the missing component.
fn resolve_target(path: &Path) -> Result<PathBuf, FoldermapError> {
    match dunce::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(_) => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                let cwd = std::env::current_dir().map_err(|e| FoldermapError::io(path, e))?;
                cwd.join(path)
            };
            Ok(normalize_lexically(&absolute))
        }
    }
}

/// Resolve `.` and `..` components of an absolute path without touching the
/// filesystem. A `..` at the root is dropped.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// The root/prefix portion of an absolute path.
fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}
