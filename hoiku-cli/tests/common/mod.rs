//! Shared helpers for the CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated data directory plus a scratch area for output files.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the scratch area.
    pub temp_path: PathBuf,
    /// Data directory passed with `--data-dir`; created by the binary.
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("hoiku-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A new environment with the sample reservations loaded.
    pub fn initialized() -> Self {
        let env = Self::new();
        env.command().arg("init").assert().success();
        env
    }

    /// The binary with no flags, run from the scratch area.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hoiku").expect("Failed to find hoiku binary");
        cmd.current_dir(&self.temp_path);
        for var in [
            "HOIKU_DATA_DIR",
            "HOIKU_BUSY_TIMEOUT_MS",
            "HOIKU_DISABLE_AUTOINIT",
            "HOIKU_OUTPUT_FORMAT",
            "HOIKU_DEFAULT_SORT",
            "HOIKU_SORT_DIRECTION",
            "HOIKU_TEMPLATE_PATH",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The binary with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Runs a command and returns its stdout, failing the test on a
    /// non-zero exit.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run hoiku");
        assert!(
            output.status.success(),
            "hoiku {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Reservation ids printed by `list --format csv` with extra arguments.
    pub fn listed_ids(&self, extra: &[&str]) -> Vec<String> {
        let mut args = vec!["list", "--format", "csv"];
        args.extend_from_slice(extra);
        let stdout = self.stdout(&args);
        parse_csv_ids(&stdout)
    }

    /// Current status of one reservation, via `show --json`.
    pub fn status_of(&self, id: &str) -> String {
        let stdout = self.stdout(&["show", id, "--json"]);
        let json: serde_json::Value = serde_json::from_str(&stdout).expect("show --json is JSON");
        json["status"].as_str().expect("status is a string").to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// First column of every data row in CSV output.
#[allow(dead_code)]
pub fn parse_csv_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .map(str::to_string)
        .collect()
}
