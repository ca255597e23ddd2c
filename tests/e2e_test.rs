/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_REPORT: &str = "tests/fixtures/sample-report/dependents.toml";
const SAMPLE_LOCK_STATE: &str = "tests/fixtures/sample-report/versions.lock";
const STALE_LOCK_STATE: &str = "tests/fixtures/sample-report/stale.lock";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("lockstate")
            .args(["-r", SAMPLE_REPORT])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("lockstate").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("lockstate").arg("--version").assert().code(0);
    }

    /// Exit code 0: verification against a matching lock state
    #[test]
    fn test_exit_code_verify_up_to_date() {
        cargo_bin_cmd!("lockstate")
            .args(["-r", SAMPLE_REPORT, "--verify", SAMPLE_LOCK_STATE])
            .assert()
            .code(0);
    }

    /// Exit code 1: verification against a stale lock state
    #[test]
    fn test_exit_code_verify_out_of_date() {
        cargo_bin_cmd!("lockstate")
            .args(["-r", SAMPLE_REPORT, "--verify", STALE_LOCK_STATE])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("lockstate")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("lockstate")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - report does not exist
    #[test]
    fn test_exit_code_application_error_missing_report() {
        cargo_bin_cmd!("lockstate")
            .args(["-r", "/nonexistent/path/dependents.toml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Dependents report not found"));
    }

    /// Exit code 3: Application error - report is not TOML
    #[test]
    fn test_exit_code_application_error_malformed_report() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("dependents.toml");
        fs::write(&report, "this is = = not toml").unwrap();

        cargo_bin_cmd!("lockstate")
            .args(["-r", report.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse dependents report"));
    }

    /// Exit code 3: Application error - expected lock state does not exist
    #[test]
    fn test_exit_code_application_error_missing_lock_state() {
        cargo_bin_cmd!("lockstate")
            .args(["-r", SAMPLE_REPORT, "--verify", "/nonexistent/versions.lock"])
            .assert()
            .code(3);
    }
}

#[test]
fn test_e2e_text_output() {
    cargo_bin_cmd!("lockstate")
        .args(["--report", SAMPLE_REPORT])
        .assert()
        .success()
        .stdout(
            "io.grpc:grpc-api:1.27.1 -> 1.27.1\n\
             io.grpc:grpc-core:1.27.1 -> 1.27.1\n\
             io.grpc:grpc-netty:1.27.1 -> {1.27.1, 1.27.1}\n",
        )
        .stderr(predicate::str::contains("✅ Detected 3 component(s) with 4 constraint(s)"));
}

#[test]
fn test_e2e_collapse_duplicates() {
    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "--collapse-duplicates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("io.grpc:grpc-netty:1.27.1 -> 1.27.1\n"))
        .stdout(predicate::str::contains("{").not());
}

#[test]
fn test_e2e_json_output() {
    let output = cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["tool_name"], "lockstate");
    assert_eq!(json["components"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["components"][2]["line"],
        "io.grpc:grpc-netty:1.27.1 -> {1.27.1, 1.27.1}"
    );
    assert!(json.get("verification").is_none());
}

#[test]
fn test_e2e_output_file_round_trips_through_verify() {
    let dir = TempDir::new().unwrap();
    let lock_path = dir.path().join("versions.lock");

    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "-o", lock_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Output complete"));

    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "--verify", lock_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Lock state is up to date"));
}

#[test]
fn test_e2e_output_file_verifies_hash_ids_and_padded_constraints() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("dependents.toml");
    let lock_path = dir.path().join("versions.lock");
    fs::write(
        &report,
        r##"version = 1

[[component]]
id = "#vendored.jar"
constraints = ["1.0"]

[[component]]
id = "a:b:1"
constraints = ["1.0 "]
"##,
    )
    .unwrap();

    cargo_bin_cmd!("lockstate")
        .args(["-r", report.to_str().unwrap(), "-o", lock_path.to_str().unwrap()])
        .assert()
        .success();
    let written = fs::read_to_string(&lock_path).unwrap();
    assert!(written.contains("#vendored.jar -> 1.0\n"));
    assert!(written.contains("a:b:1 -> 1.0 \n"));

    cargo_bin_cmd!("lockstate")
        .args(["-r", report.to_str().unwrap(), "--verify", lock_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Lock state is up to date"));
}

#[test]
fn test_e2e_quiet_output_file_leaves_stderr_empty() {
    let dir = TempDir::new().unwrap();
    let lock_path = dir.path().join("versions.lock");

    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "-o", lock_path.to_str().unwrap(), "-q"])
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert!(fs::read_to_string(&lock_path)
        .unwrap()
        .contains("io.grpc:grpc-netty:1.27.1 -> {1.27.1, 1.27.1}"));
}

#[test]
fn test_e2e_quiet_hides_config_notice() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("dependents.toml");
    fs::copy(SAMPLE_REPORT, &report).unwrap();
    fs::write(dir.path().join("lockstate.config.yml"), "format: text\n").unwrap();

    cargo_bin_cmd!("lockstate")
        .args(["-r", report.to_str().unwrap(), "-q"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_e2e_verify_prints_diff() {
    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "--verify", STALE_LOCK_STATE])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("- io.grpc:grpc-netty:1.27.1 -> 1.27.0"))
        .stderr(predicate::str::contains(
            "+ io.grpc:grpc-netty:1.27.1 -> {1.27.1, 1.27.1}",
        ))
        .stderr(predicate::str::contains("1 missing, 2 unexpected"));
}

#[test]
fn test_e2e_verify_detects_reordering() {
    let dir = TempDir::new().unwrap();
    let lock_path = dir.path().join("versions.lock");
    fs::write(
        &lock_path,
        "io.grpc:grpc-netty:1.27.1 -> {1.27.1, 1.27.1}\n\
         io.grpc:grpc-core:1.27.1 -> 1.27.1\n\
         io.grpc:grpc-api:1.27.1 -> 1.27.1\n",
    )
    .unwrap();

    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "--verify", lock_path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of order"));
}

#[test]
fn test_e2e_quiet_suppresses_progress() {
    cargo_bin_cmd!("lockstate")
        .args(["-r", SAMPLE_REPORT, "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading dependents report").not());
}

#[test]
fn test_e2e_empty_report() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("dependents.toml");
    fs::write(&report, "version = 1\n").unwrap();

    cargo_bin_cmd!("lockstate")
        .args(["-r", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");
}
