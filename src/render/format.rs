//! Format node lists as indented text.
//!
//! Line shapes follow the original FolderMap export format: emoji markers,
//! four-space indent per depth level, trailing `/` on directories.

use crate::types::{Node, NodeKind, RenderMode};
use owo_colors::OwoColorize;

/// One indent unit per depth level.
pub const INDENT: &str = "    ";

pub const DIR_MARKER: &str = "📁";
pub const FILE_MARKER: &str = "📄";
pub const DENIED_MARKER: &str = "⛔ [Permission Denied]";
pub const NOT_FOUND_MARKER: &str = "❌";

/// Format the node list as the flat indented body text.
pub fn format_structure_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        let indent = INDENT.repeat(node.depth);
        match node.kind {
            NodeKind::Directory => {
                out.push_str(&format!("{}{} {}/\n", indent, DIR_MARKER, node.name));
            }
            NodeKind::File => {
                out.push_str(&format!("{}{} {}\n", indent, FILE_MARKER, node.name));
            }
            NodeKind::PermissionDenied => {
                out.push_str(&format!("{}{}\n", indent, DENIED_MARKER));
            }
            NodeKind::NotFound => {
                out.push_str(&format!(
                    "{}{} {} (Not Found)\n",
                    indent, NOT_FOUND_MARKER, node.name
                ));
            }
        }
    }
    out
}

/// Banner placed above the body in rendered and exported text.
pub fn render_header(mode: RenderMode) -> String {
    format!("Folder Structure ({}):\n\n", mode.display_name())
}

/// Bold section heading for terminal summaries.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_directory_and_file_lines() {
        let nodes = vec![
            Node::directory("src", 0),
            Node::file("lib.rs", 1),
            Node::file("README.md", 0),
        ];
        assert_eq!(
            format_structure_text(&nodes),
            "📁 src/\n    📄 lib.rs\n📄 README.md\n"
        );
    }

    #[test]
    fn test_format_marker_lines() {
        let nodes = vec![Node::permission_denied(2), Node::not_found("ghost", 1)];
        assert_eq!(
            format_structure_text(&nodes),
            "        ⛔ [Permission Denied]\n    ❌ ghost (Not Found)\n"
        );
    }

    #[test]
    fn test_format_root_segment_renders_bare_slash() {
        let nodes = vec![Node::directory("", 0)];
        assert_eq!(format_structure_text(&nodes), "📁 /\n");
    }

    #[test]
    fn test_format_empty_body() {
        assert_eq!(format_structure_text(&[]), "");
    }

    #[test]
    fn test_render_header_uses_display_name() {
        assert_eq!(
            render_header(RenderMode::WithPreceding),
            "Folder Structure (With Preceding):\n\n"
        );
    }
}
