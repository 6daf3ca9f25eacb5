//! Core types for directory structure rendering.

use crate::error::FoldermapError;
use serde::{Deserialize, Serialize};

/// Kind of a rendered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Directory,
    File,
    /// Inline marker for a directory whose listing was denied.
    PermissionDenied,
    /// Marker for a missing ancestor component in preceding mode.
    NotFound,
}

/// A single rendered filesystem entry.
///
/// Nodes are computed on demand for each render and never cached. Depth 0 is
/// the top level of the view; each level indents by one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
}

impl Node {
    pub fn directory(name: impl Into<String>, depth: usize) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::Directory,
            depth,
        }
    }

    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::File,
            depth,
        }
    }

    pub fn permission_denied(depth: usize) -> Self {
        Node {
            name: String::new(),
            kind: NodeKind::PermissionDenied,
            depth,
        }
    }

    pub fn not_found(name: impl Into<String>, depth: usize) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::NotFound,
            depth,
        }
    }
}

/// Rendering mode selecting which part of the filesystem the view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Only the selected directory's subtree.
    TargetOnly,
    /// The path from the filesystem root to the target, expanding only the
    /// target's subtree.
    WithPreceding,
    /// The target and all alphabetically-later sibling directories.
    WithSucceeding,
}

impl RenderMode {
    /// Parse a mode string as accepted on the command line.
    pub fn parse(s: &str) -> Result<Self, FoldermapError> {
        match s.to_ascii_lowercase().as_str() {
            "target" | "target-only" => Ok(RenderMode::TargetOnly),
            "preceding" | "with-preceding" => Ok(RenderMode::WithPreceding),
            "succeeding" | "with-succeeding" => Ok(RenderMode::WithSucceeding),
            _ => Err(FoldermapError::InvalidMode(s.to_string())),
        }
    }

    /// Canonical short name used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::TargetOnly => "target",
            RenderMode::WithPreceding => "preceding",
            RenderMode::WithSucceeding => "succeeding",
        }
    }

    /// Human-readable name used in the render header.
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::TargetOnly => "Target Only",
            RenderMode::WithPreceding => "With Preceding",
            RenderMode::WithSucceeding => "With Succeeding",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
