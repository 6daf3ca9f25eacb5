//! Directory structure rendering.
//!
//! Walks the filesystem synchronously and produces a flat list of [`Node`]s
//! in display order; [`format`] turns that list into indented text. All
//! enumeration is sorted and case-sensitive, matching the host byte order
//! of UTF-8 names.

pub mod format;
pub mod structure;
pub mod walker;

use crate::error::FoldermapError;
use crate::types::{Node, RenderMode};
use std::path::Path;

/// Options applied to every structure builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Skip entries whose name starts with `.` inside subtree recursion.
    pub hide_hidden: bool,
}

/// Build the node list for `path` in the given mode.
pub fn render_structure(
    path: &Path,
    mode: RenderMode,
    opts: &RenderOptions,
) -> Result<Vec<Node>, FoldermapError> {
    match mode {
        RenderMode::TargetOnly => structure::target_structure(path, opts),
        RenderMode::WithPreceding => structure::preceding_structure(path, opts),
        RenderMode::WithSucceeding => structure::succeeding_structure(path, opts),
    }
}

/// Build and format the full text document (header plus body) for `path`.
pub fn render_text(
    path: &Path,
    mode: RenderMode,
    opts: &RenderOptions,
) -> Result<String, FoldermapError> {
    let nodes = render_structure(path, mode, opts)?;
    let mut out = format::render_header(mode);
    out.push_str(&format::format_structure_text(&nodes));
    Ok(out)
}
