//! FolderMap: Directory Structure Rendering
//!
//! Renders a directory tree as indented UTF-8 text. Supports target-only,
//! with-preceding (root-to-target path), and with-succeeding (alphabetically
//! later sibling directories) views, plus flat text export.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod render;
pub mod tooling;
pub mod types;
