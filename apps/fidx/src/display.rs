//! Output formatting for verification results

use fidx_config::VerifyConfig;
use fidx_guard::{VerificationOutcome, VerificationResult};
use serde::Serialize;
use std::io::{self, Write};

/// Renders a finished verification to stdout/stderr
pub struct OutputRenderer {
    json_output: bool,
}

/// Machine-readable form printed with `--json`
#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: VerificationOutcome,
    exit_code: i32,
    root: &'a std::path::Path,
    index: &'a std::path::Path,
    #[serde(flatten)]
    result: &'a VerificationResult,
}

impl OutputRenderer {
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render to the process streams
    pub fn render_result(
        &self,
        config: &VerifyConfig,
        result: &VerificationResult,
    ) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        self.render_to(&mut stdout, &mut stderr, config, result)?;
        // The caller exits the process right after rendering
        stdout.flush()?;
        stderr.flush()
    }

    /// Diagnostics go to `err`; only the confirmation or JSON goes to `out`
    pub fn render_to(
        &self,
        out: &mut impl Write,
        err: &mut impl Write,
        config: &VerifyConfig,
        result: &VerificationResult,
    ) -> io::Result<()> {
        if self.json_output {
            return Self::render_json(out, config, result);
        }

        if !result.missing.is_empty() {
            writeln!(err, "MISSING_FILES:")?;
            for rel in &result.missing {
                writeln!(err, "- {rel}")?;
            }
        }
        if !result.mismatched.is_empty() {
            writeln!(err, "HASH_MISMATCH:")?;
            for mismatch in &result.mismatched {
                writeln!(err, "- {}", mismatch.relative_path)?;
                writeln!(err, "  expected: {}", mismatch.expected_digest)?;
                writeln!(err, "  got:      {}", mismatch.actual_digest)?;
            }
        }

        if result.outcome() == VerificationOutcome::Ok {
            writeln!(
                out,
                "OK: {} matches listed files.",
                config.index_display_name()
            )?;
        }
        Ok(())
    }

    fn render_json(
        out: &mut impl Write,
        config: &VerifyConfig,
        result: &VerificationResult,
    ) -> io::Result<()> {
        let outcome = result.outcome();
        let report = JsonReport {
            outcome,
            exit_code: outcome.exit_code(),
            root: &config.root,
            index: &config.index_path,
            result,
        };
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidx_guard::HashMismatch;
    use fidx_hash::Hash;

    fn render(json: bool, result: &VerificationResult) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        OutputRenderer::new(json)
            .render_to(&mut out, &mut err, &VerifyConfig::default(), result)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn failing_result() -> VerificationResult {
        VerificationResult {
            missing: vec!["gone.txt".into()],
            mismatched: vec![HashMismatch {
                relative_path: "changed.txt".into(),
                expected_digest: "ABC".into(),
                actual_digest: Hash::from_data(b"changed"),
            }],
            ok_count: 0,
            checked: 2,
        }
    }

    #[test]
    fn test_ok_message_on_stdout() {
        let (out, err) = render(false, &VerificationResult::default());
        assert_eq!(out, "OK: FILE_INDEX_SHA256.txt matches listed files.\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_failures_on_stderr() {
        let (out, err) = render(false, &failing_result());
        assert!(out.is_empty());
        let expected = format!(
            "MISSING_FILES:\n- gone.txt\nHASH_MISMATCH:\n- changed.txt\n  expected: ABC\n  got:      {}\n",
            Hash::from_data(b"changed")
        );
        assert_eq!(err, expected);
    }

    #[test]
    fn test_json_report() {
        let (out, err) = render(true, &failing_result());
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["outcome"], "missing");
        assert_eq!(value["exit_code"], 2);
        assert_eq!(value["missing"][0], "gone.txt");
        assert_eq!(value["mismatched"][0]["expected_digest"], "ABC");
        assert_eq!(value["checked"], 2);
    }
}
