//! Hygiene — scans the engine crate's production sources for antipatterns.
//!
//! Each pattern has a budget of zero. The budget never grows: if a new hit
//! is unavoidable, an existing one must be removed first.

use std::fs;
use std::path::Path;

/// Forbidden patterns in production code, with their budgets.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the process.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards results without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn source_tree_is_nonempty() {
    assert!(!source_files().is_empty(), "hygiene scan found no sources under src/");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();

    for &(pattern, budget) in BUDGETS {
        let mut hits = Vec::new();
        for file in &files {
            let count = file.content.lines().filter(|l| l.contains(pattern)).count();
            if count > 0 {
                hits.push(format!("  {}: {count}", file.path));
            }
        }
        let found: usize = files
            .iter()
            .map(|f| f.content.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if found > budget {
            failures.push(format!(
                "`{pattern}` budget exceeded: found {found}, max {budget}\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
