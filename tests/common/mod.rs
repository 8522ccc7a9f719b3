//! Shared integration-test harness for running the `errdocs` binary inside
//! a scratch working directory.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A scratch working directory plus helpers to run `errdocs` in it.
///
/// The directory is removed on drop.
pub struct ErrdocsRun {
    dir: TempDir,
}

impl ErrdocsRun {
    /// Creates an empty working directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Returns the working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns `errors/<name>` under the working directory.
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join("errors").join(name)
    }

    /// Reads `errors/<name>` to a string.
    #[allow(clippy::missing_panics_doc)]
    pub fn read_output(&self, name: &str) -> String {
        let path = self.output(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    /// Lists file names inside `errors/`, sorted.
    pub fn output_names(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.dir.path().join("errors")) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs `errdocs` with `stdin` piped in and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, stdin: &str, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_errdocs");
        let mut child = Command::new(bin)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("ERRDOCS_INPUT")
            .env_remove("ERRDOCS_OUTPUT_DIR")
            .env_remove("ERRDOCS_LOG_LEVEL")
            .env_remove("ERRDOCS_LOG_FORMAT")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn errdocs");

        {
            let mut pipe = child.stdin.take().expect("stdin not captured");
            pipe.write_all(stdin.as_bytes())
                .expect("failed to write stdin");
        }

        child.wait_with_output().expect("failed to wait for errdocs")
    }

    /// Runs `errdocs` with a fixture file as stdin.
    pub fn run_fixture(&self, name: &str) -> Output {
        let input = std::fs::read_to_string(fixture_path(name)).expect("missing fixture");
        self.run(&input, &[])
    }
}

/// Returns the path to a JSON fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Returns stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Returns stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
