//! Hygiene: source-level budgets for patterns that crash or hide failures.
//!
//! Handlers in this crate run inside the browser's event loop, where a panic
//! takes every other behavior on the page down with it and a swallowed error
//! leaves nothing in the console. Each budget is zero; test files
//! (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Lines containing `pattern`, reported as `path:line`.
fn hits(pattern: &str) -> Vec<String> {
    source_files()
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let found = hits(pattern);
    assert!(found.is_empty(), "`{pattern}` is not allowed in src/ ({why}); found {}:\n{}", found.len(), found.join("\n"));
}

#[test]
fn sources_are_scanned() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene scan found no sources");
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "panics");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "panics");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("todo!(", "panics");
    assert_absent("unimplemented!(", "panics");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "drops errors unseen; log them with dom::report");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "drops the error value; match on it instead");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code instead");
}
