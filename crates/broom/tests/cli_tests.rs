//! Integration tests for the broom binary surface
//!
//! Interactive flows are covered in broom-core with scripted adapters;
//! these tests exercise argument parsing and the failure exits that happen
//! before any prompt.

use std::process::Command;

#[test]
fn help_describes_the_menu_grammar() {
    let output = Command::new(env!("CARGO_BIN_EXE_broom"))
        .arg("--help")
        .output()
        .expect("run broom --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--protect"));
    assert!(stdout.contains("--quiet"));
}

#[test]
fn non_repository_path_fails_before_any_prompt() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_broom"))
        .arg(dir.path())
        .output()
        .expect("run broom");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
}

#[test]
fn missing_path_fails_the_same_way() {
    let output = Command::new(env!("CARGO_BIN_EXE_broom"))
        .arg("/definitely/not/a/repository/clone")
        .output()
        .expect("run broom");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_protect_pattern_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let Ok(init) = Command::new("git")
        .arg("-C")
        .arg(dir.path())
        .arg("init")
        .output()
    else {
        // git unavailable; nothing to assert here
        return;
    };
    if !init.status.success() {
        return;
    }

    let output = Command::new(env!("CARGO_BIN_EXE_broom"))
        .arg(dir.path())
        .args(["--protect", "["])
        .output()
        .expect("run broom");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid pattern"));
}
