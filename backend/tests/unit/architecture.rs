//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that layer boundaries hold and
//! that no code path can introduce a shell or a `PATH` lookup.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and drop comment lines and everything from the first
/// `#[cfg(test)]` onwards, so test fixtures don't trip the checks.
fn read_production_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .take_while(|l| !l.contains("#[cfg(test)]"))
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Assert no production line in `dir` contains any of `forbidden`.
fn assert_no_occurrences(dir: &Path, forbidden: &[&str], why: &str) {
    let mut violations: Vec<String> = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = relative(&file);
        for (i, line) in read_production_lines(&file).iter().enumerate() {
            for needle in forbidden {
                if line.contains(needle) {
                    violations.push(format!("{rel}:{}: `{needle}`: {line}", i + 1));
                }
            }
        }
    }
    assert!(violations.is_empty(), "{why}:\n{}", violations.join("\n"));
}

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    assert_no_occurrences(
        &src_dir().join("domain"),
        &[
            "crate::infra",
            "crate::application",
            "crate::cli",
            "tokio",
            "std::fs",
            "std::process",
            "std::net",
        ],
        "domain/ must stay pure",
    );
}

#[test]
fn application_does_not_import_infra() {
    assert_no_occurrences(
        &src_dir().join("application"),
        &["crate::infra", "crate::cli", "crate::output", "std::process::Command"],
        "application/ must depend only on domain and ports",
    );
}

#[test]
fn process_spawning_lives_only_in_infra_command_runner() {
    let mut violations: Vec<String> = Vec::new();
    for file in collect_rs_files(&src_dir()) {
        let rel = relative(&file).replace('\\', "/");
        if rel.ends_with("infra/command_runner.rs") {
            continue;
        }
        for (i, line) in read_production_lines(&file).iter().enumerate() {
            if line.contains("Command::new") && !line.contains("CommandFactory") {
                violations.push(format!("{rel}:{}: {line}", i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "process construction outside infra/command_runner.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_shell_interpreter_anywhere() {
    assert_no_occurrences(
        &src_dir(),
        &["\"sh\"", "\"/bin/sh\"", "\"bash\"", "\"/bin/bash\"", "\"-c\""],
        "a shell layer would re-tokenize arguments",
    );
}

#[test]
fn no_path_lookup_helpers() {
    assert_no_occurrences(
        &src_dir(),
        &["which::", "execvp", "std::env::var(\"PATH\")"],
        "the package manager must be exec'd by absolute path",
    );
}
