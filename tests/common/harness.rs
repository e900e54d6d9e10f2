//! Subprocess runner for the multisector test harness

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("harness exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("harness did not produce {path}")]
    NoOutput { path: PathBuf },

    #[error("{path} is not valid JSON: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("{path} is not a JSON list")]
    NotAList { path: PathBuf },

    #[error("{path} is an empty list")]
    Empty { path: PathBuf },
}

/// One invocation of `<program> <script> --repo-root .. --profiles .. --out ..`
#[derive(Debug, Clone)]
pub struct HarnessRun {
    pub program: PathBuf,
    pub script: PathBuf,
    pub repo_root: PathBuf,
    pub profiles: PathBuf,
    pub out: PathBuf,
}

impl HarnessRun {
    /// Run the harness from `repo_root`, wait for it, and return the result cases
    pub fn run(&self) -> Result<Vec<serde_json::Value>, HarnessError> {
        let output = Command::new(&self.program)
            .arg(&self.script)
            .arg("--repo-root")
            .arg(&self.repo_root)
            .arg("--profiles")
            .arg(&self.profiles)
            .arg("--out")
            .arg(&self.out)
            .current_dir(&self.repo_root)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| HarnessError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(HarnessError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        read_cases(&self.out)
    }
}

/// Check the results file: a JSON array with at least one element
pub fn read_cases(path: &Path) -> Result<Vec<serde_json::Value>, HarnessError> {
    if !path.is_file() {
        return Err(HarnessError::NoOutput {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| HarnessError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| HarnessError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let serde_json::Value::Array(cases) = value else {
        return Err(HarnessError::NotAList {
            path: path.to_path_buf(),
        });
    };
    if cases.is_empty() {
        return Err(HarnessError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(cases)
}
