//! Exit codes:
//! - 0: success
//! - 1: semantic failure (rejected status change, partial bulk update)
//! - 2: clap usage error
//! - 3: database missing with auto-init disabled
//! - 4: invalid arguments or input
//! - 5: I/O error
//! - 6: other library errors
//! - 7: configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::initialized();
    env.command().arg("list").assert().code(0);
    env.command().args(["show", "r-001"]).assert().code(0);
}

// ============================================================================
// Exit code 1
// ============================================================================

#[test]
fn test_invalid_transition() {
    let env = TestEnv::initialized();
    env.command()
        .args(["cancel", "r-004"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cancelled"));
}

#[test]
fn test_confirmed_cannot_skip_to_checked_out() {
    let env = TestEnv::initialized();
    env.command().args(["check-out", "r-001"]).assert().code(1);
    assert_eq!(env.status_of("r-001"), "confirmed");
}

#[test]
fn test_partial_bulk_update() {
    let env = TestEnv::initialized();
    // r-002 (pending) may be cancelled; r-004 already is.
    env.command()
        .args(["bulk-status", "cancelled", "--status", "pending,cancelled"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("r-002"))
        .stderr(predicate::str::contains("r-004"));
    assert_eq!(env.status_of("r-002"), "cancelled");
}

// ============================================================================
// Exit code 2
// ============================================================================

#[test]
fn test_unknown_status_value() {
    let env = TestEnv::initialized();
    env.command()
        .args(["list", "--status", "archived"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("archived"));
}

// ============================================================================
// Exit code 3
// ============================================================================

#[test]
fn test_disable_autoinit_without_database() {
    let env = TestEnv::new();
    env.command()
        .args(["--disable-autoinit", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("hoiku init"));
    assert!(!env.data_dir.join("hoiku.db").exists());
}

#[test]
fn test_disable_autoinit_from_env() {
    let env = TestEnv::new();
    env.command()
        .env("HOIKU_DISABLE_AUTOINIT", "true")
        .arg("stats")
        .assert()
        .code(3);
}

// ============================================================================
// Exit code 4
// ============================================================================

#[test]
fn test_blank_id() {
    let env = TestEnv::initialized();
    env.command().args(["show", " "]).assert().code(4);
}

#[test]
fn test_broken_payload() {
    let env = TestEnv::new();
    env.command()
        .args(["decode-form", "%7Bbroken"])
        .assert()
        .code(4);
}

#[test]
fn test_path_like_template_name() {
    let env = TestEnv::initialized();
    env.command()
        .args(["template", "--name", "../escape"])
        .assert()
        .code(4);
}

// ============================================================================
// Exit code 6
// ============================================================================

#[test]
fn test_unknown_reservation() {
    let env = TestEnv::initialized();
    env.command()
        .args(["show", "r-999"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("r-999"));
}

#[test]
fn test_missing_template_asset() {
    let env = TestEnv::initialized();
    env.command()
        .arg("template")
        .arg("--asset")
        .arg(env.path().join("absent.xlsx"))
        .assert()
        .code(6)
        .stderr(predicate::str::contains("absent.xlsx"));
}

// ============================================================================
// Exit code 7
// ============================================================================

#[test]
fn test_unknown_config_key() {
    let env = TestEnv::initialized();
    std::fs::write(env.data_dir.join("config.yaml"), "colour: blue\n").unwrap();
    env.command()
        .arg("list")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("config.yaml"));
}

#[test]
fn test_invalid_env_override() {
    let env = TestEnv::initialized();
    env.command()
        .env("HOIKU_OUTPUT_FORMAT", "xml")
        .arg("list")
        .assert()
        .code(7);
}
