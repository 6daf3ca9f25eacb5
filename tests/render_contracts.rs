//! CLI-level output contracts for the three render modes and export.

use std::fs::{self, File};
use std::path::PathBuf;

use foldermap::error::FoldermapError;
use foldermap::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::new(None).unwrap()
}

fn render_command(path: PathBuf, mode: &str, hide_hidden: bool, format: &str) -> Commands {
    Commands::Render {
        path,
        mode: Some(mode.to_string()),
        hide_hidden,
        format: format.to_string(),
    }
}

#[test]
fn target_render_of_empty_directory_is_header_only() {
    let temp = TempDir::new().unwrap();
    let output = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "text"))
        .unwrap();
    assert_eq!(output, "Folder Structure (Target Only):\n\n");
}

#[test]
fn target_render_lists_entries_in_case_sensitive_order() {
    let temp = TempDir::new().unwrap();
    for name in ["b", "A", "c"] {
        File::create(temp.path().join(name)).unwrap();
    }

    let output = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "text"))
        .unwrap();
    assert_eq!(
        output,
        "Folder Structure (Target Only):\n\n📄 A\n📄 b\n📄 c\n"
    );
}

#[test]
fn target_render_indents_four_spaces_per_level() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    File::create(temp.path().join("src/lib.rs")).unwrap();

    let output = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "text"))
        .unwrap();
    assert!(output.contains("📁 src/\n    📄 lib.rs\n"));
}

#[test]
fn hidden_entries_suppressed_only_with_flag() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    File::create(temp.path().join("main.rs")).unwrap();

    let shown = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "text"))
        .unwrap();
    assert!(shown.contains("📁 .git/"));

    let hidden = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", true, "text"))
        .unwrap();
    assert!(!hidden.contains(".git"));
    assert!(hidden.contains("📄 main.rs"));
}

#[test]
fn preceding_render_starts_at_root_and_ends_with_target_contents() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("workdir");
    fs::create_dir(&target).unwrap();
    File::create(target.join("zz-last.txt")).unwrap();

    let output = context()
        .execute(&render_command(target, "preceding", false, "text"))
        .unwrap();
    let mut lines = output.lines().skip(2); // header + blank
    assert_eq!(lines.next().unwrap(), "📁 /");
    assert!(output.contains("📁 workdir/"));
    assert!(output.trim_end().ends_with("📄 zz-last.txt"));
}

#[test]
fn succeeding_render_covers_target_and_later_siblings() {
    let temp = TempDir::new().unwrap();
    for name in ["alpha", "beta", "gamma"] {
        fs::create_dir(temp.path().join(name)).unwrap();
    }

    let output = context()
        .execute(&render_command(temp.path().join("beta"), "succeeding", false, "text"))
        .unwrap();
    assert!(!output.contains("📁 alpha/"));
    assert!(output.contains("📁 beta/"));
    assert!(output.contains("📁 gamma/"));
}

#[test]
fn succeeding_render_missing_target_is_typed_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("only")).unwrap();

    let err = context()
        .execute(&render_command(temp.path().join("nope"), "succeeding", false, "text"))
        .unwrap_err();
    assert!(matches!(err, FoldermapError::TargetNotFound(_)));
    assert!(err
        .to_string()
        .contains("Target folder not found in parent directory"));
}

#[test]
fn json_render_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    File::create(temp.path().join("docs/guide.md")).unwrap();

    let output = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "json"))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("mode").and_then(|v| v.as_str()), Some("target"));
    assert!(parsed.get("path").and_then(|v| v.as_str()).is_some());
    assert_eq!(parsed.get("hide_hidden").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(2));

    let entries = parsed
        .get("entries")
        .and_then(|v| v.as_array())
        .expect("entries array should exist");
    assert_eq!(entries[0].get("name").and_then(|v| v.as_str()), Some("docs"));
    assert_eq!(
        entries[0].get("kind").and_then(|v| v.as_str()),
        Some("directory")
    );
    assert_eq!(entries[0].get("depth").and_then(|v| v.as_u64()), Some(0));
    assert_eq!(entries[1].get("kind").and_then(|v| v.as_str()), Some("file"));
    assert_eq!(entries[1].get("depth").and_then(|v| v.as_u64()), Some(1));
}

#[test]
fn render_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();
    let err = context()
        .execute(&render_command(temp.path().to_path_buf(), "target", false, "yaml"))
        .unwrap_err();
    assert!(matches!(err, FoldermapError::InvalidFormat(_)));
}

#[test]
fn render_rejects_unknown_mode() {
    let temp = TempDir::new().unwrap();
    let err = context()
        .execute(&render_command(temp.path().to_path_buf(), "inverted", false, "text"))
        .unwrap_err();
    assert!(matches!(err, FoldermapError::InvalidMode(_)));
}

#[test]
fn export_writes_rendered_text_to_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data")).unwrap();
    let out_file = temp.path().join("exports/map.txt");

    let message = context()
        .execute(&Commands::Export {
            path: temp.path().to_path_buf(),
            output: out_file.clone(),
            mode: Some("target".to_string()),
            hide_hidden: false,
        })
        .unwrap();
    assert!(message.starts_with("Exported to "));

    let written = fs::read_to_string(&out_file).unwrap();
    assert_eq!(written, "Folder Structure (Target Only):\n\n📁 data/\n");
}

#[test]
fn modes_command_lists_all_three() {
    let output = context().execute(&Commands::Modes).unwrap();
    for name in ["Target Only", "With Preceding", "With Succeeding"] {
        assert!(output.contains(name), "missing {} in {}", name, output);
    }
}
