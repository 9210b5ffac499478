//! CLI integration tests for the headless `genelab` subcommands.

use std::path::Path;
use std::process::Command;

/// Run genelab in `dir` with config discovery confined to it.
fn run_genelab(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_genelab"))
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute genelab");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn catalog_lists_builtin_traits() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_genelab(dir.path(), &["catalog"]);
    assert!(success);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(names, vec!["Wings", "Tail", "Ears"]);
}

#[test]
fn catalog_json_uses_hex_colors() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_genelab(dir.path(), &["catalog", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["name"], "Wings");
    assert_eq!(value[1]["color"], "#8b4513");
    assert_eq!(value[2]["shape"], "triangle");
}

#[test]
fn catalog_reads_discovered_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("genelab.toml"),
        r##"
[[catalog]]
name = "Horns"
shape = "triangle"
color = "ivory"
size = [10, 20]
position = [150, 110]

[[catalog]]
name = "Fin"
shape = "blob"
color = "#000"
size = [1, 1]
position = [0, 0]
"##,
    )
    .unwrap();
    let (stdout, _, success) = run_genelab(dir.path(), &["catalog", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["color"], "#fffff0");
}

#[test]
fn invalid_config_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[window]\ncanvas_size = 3\n").unwrap();
    let (_, stderr, success) =
        run_genelab(dir.path(), &["--config", config.to_str().unwrap(), "catalog"]);
    assert!(!success);
    assert!(stderr.contains("window.canvas_size"));
}

#[test]
fn preview_reports_final_traits() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_genelab(
        dir.path(),
        &[
            "preview", "--add", "Wings", "--add", "Wings", "--add", "Ears", "--recolor", "Ears=red",
            "--remove", "Body", "--step", "16",
        ],
    );
    assert!(success);
    assert!(stdout.contains("\x1b[48;2;"));
    assert_eq!(stdout.lines().last(), Some("Traits: Wings, Ears"));
    // 400px at step 16 -> 25 sampled rows -> 13 lines of cells
    assert_eq!(stdout.lines().count(), 14);
}

#[test]
fn preview_rejects_bad_recolor() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, success) = run_genelab(dir.path(), &["preview", "--recolor", "Wings"]);
    assert!(!success);
    assert!(stderr.contains("NAME=COLOR"));
}
