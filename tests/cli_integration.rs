//! Integration tests for the `dk` CLI.
//!
//! Each test runs `dk` as a subprocess and verifies stdout/stderr.
//! Content is compiled in, so no project setup is needed.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `dk` binary.
fn dk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("dk");
    path
}

fn run_dk(args: &[&str]) -> std::process::Output {
    Command::new(dk_bin())
        .args(args)
        .output()
        .expect("failed to run dk")
}

#[test]
fn test_list_category_sorted_by_year() {
    let output = run_dk(&["list", "projects"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Projects"));
    let veil = stdout.find("Veil Echo").unwrap();
    let gloss = stdout.find("Gloss Lattice").unwrap();
    let night = stdout.find("Night Index").unwrap();
    // Year descending: 2024, 2023, 2022
    assert!(veil < gloss && gloss < night);
}

#[test]
fn test_list_all_categories() {
    let output = run_dk(&["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for header in ["Projects", "Research", "Blog"] {
        assert!(stdout.contains(header), "missing {}", header);
    }
    assert!(stdout.contains("Quiet Grid"));
    assert!(stdout.contains("Soft Signal"));
}

#[test]
fn test_list_category_case_insensitive() {
    let output = run_dk(&["list", "BLOG"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Midnight Annotations"));
}

#[test]
fn test_list_unknown_category_fails() {
    let output = run_dk(&["list", "poems"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown category 'poems'"));
}

#[test]
fn test_list_json_shape() {
    let output = run_dk(&["list", "research", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let listing = parsed.as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["category"], "research");
    let items = listing[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "signal-drift");
    assert_eq!(items[0]["year"], 2024);
    assert_eq!(items[2]["id"], "quiet-grid");
}

#[test]
fn test_show_item() {
    let output = run_dk(&["show", "archival-shadows"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Archival Shadows (2023)"));
    assert!(stdout.contains("category: Blog"));
    assert!(stdout.contains("collecting fragments"));
    assert!(stdout.contains("image: Archive spreads and scans."));
}

#[test]
fn test_show_json_flattens_item() {
    let output = run_dk(&["show", "veil-echo", "--json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(parsed["category"], "projects");
    assert_eq!(parsed["id"], "veil-echo");
    assert_eq!(parsed["logo_text"], "VE");
}

#[test]
fn test_show_unknown_id_fails() {
    let output = run_dk(&["show", "nope"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no item with id 'nope'"));
}

#[test]
fn test_folders_lists_stack_with_categories() {
    let output = run_dk(&["folders"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for label in ["Bio", "Projects", "Research", "Blog", "Notes"] {
        assert!(stdout.contains(label), "missing {}", label);
    }
    assert!(stdout.contains("Projects") && stdout.contains("->"));
}

#[test]
fn test_folders_json() {
    let output = run_dk(&["folders", "--json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    let folders = parsed.as_array().unwrap();
    assert_eq!(folders.len(), 5);
    assert_eq!(folders[0]["label"], "Bio");
    assert!(folders[0].get("category").is_none());
    assert_eq!(folders[1]["category"], "projects");
}
