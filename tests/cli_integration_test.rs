//! Integration tests for the non-interactive commands

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary in `dir` with no user config in reach
fn run_finder(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fastfood-finder"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const TWO_STORES: &str = r#"
stores:
  - name: KFC
    location: 123 Food St, City
    items:
      - name: Zinger
        price: 50
        image: /images/kfc_zinger.jpg
      - name: Streetwise2
        price: 40
        image: /images/kfc_streetwise.jpg
  - name: Deli
    location: 8 Side Rd
    items:
      - name: Sandwich
        price: 60
        image: /images/deli.jpg
"#;

#[test]
fn test_pick_json_with_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    let output = run_finder(dir.path(), &["pick", "--budget", "200", "--format", "json"]);
    assert!(output.status.success(), "pick failed: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["budget"], 200);
    assert_eq!(report["total"], 200);
    assert_eq!(report["remaining"], 0);
    assert_eq!(report["selections"].as_array().unwrap().len(), 4);
    assert_eq!(report["selections"][0]["store"], "KFC");
}

#[test]
fn test_pick_rejects_low_budget() {
    let dir = TempDir::new().unwrap();
    let output = run_finder(dir.path(), &["pick", "--budget", "20"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Your budget is too low for any meal. Please increase it."));
}

#[test]
fn test_pick_with_catalog_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stores.yaml"), TWO_STORES).unwrap();

    let output = run_finder(dir.path(), &["pick", "--budget", "100", "--catalog", "stores.yaml"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Zinger"));
    assert!(!stdout.contains("Sandwich"));
    assert!(stdout.contains("Total: R50 (R50 remaining)"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stores.yaml"), TWO_STORES).unwrap();
    fs::write(
        dir.path().join("fastfood-finder.yaml"),
        "initial_budget: 110\ncurrency: \"$\"\ncatalog: stores.yaml\n",
    )
    .unwrap();

    let output = run_finder(dir.path(), &["pick"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    // 110: Zinger 50, then Sandwich 60
    assert!(stdout.contains("Sandwich"));
    assert!(stdout.contains("Total: $110"));
}

#[test]
fn test_menu_text() {
    let dir = TempDir::new().unwrap();
    let output = run_finder(dir.path(), &["menu"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("KFC (123 Food St, City)"));
    assert!(stdout.contains("Cheapest: Regular Chips at Steers for R20"));
}

#[test]
fn test_bad_catalog_reports_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.yaml"), "stores: [oops").unwrap();

    let output = run_finder(dir.path(), &["menu", "--catalog", "broken.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse catalog file"));
}
