use std::path::Path;
use std::process::Command;

use crate::DocsyncError;
use crate::DocsyncResult;
use crate::config::DEFAULT_LINT_COMMAND;

/// The external markdown lint tool, behind a narrow interface so that link
/// validation can be exercised without a subprocess dependency.
pub trait MarkdownLinter {
	/// Lint every markdown file under `docs_root`, returning one finding per
	/// line of tool output. An empty vec means a clean run. A failure to
	/// invoke the tool at all is an error, distinct from findings.
	fn run(&self, docs_root: &Path) -> DocsyncResult<Vec<String>>;
}

/// A [`MarkdownLinter`] that spawns an external command (by default
/// `markdownlint`) with a `<root>/**/*.md` glob argument.
#[derive(Debug, Clone)]
pub struct CommandLinter {
	command: String,
}

impl CommandLinter {
	#[must_use]
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
		}
	}
}

impl Default for CommandLinter {
	fn default() -> Self {
		Self::new(DEFAULT_LINT_COMMAND)
	}
}

impl MarkdownLinter for CommandLinter {
	fn run(&self, docs_root: &Path) -> DocsyncResult<Vec<String>> {
		let pattern = format!("{}/**/*.md", docs_root.display());
		let output = Command::new(&self.command)
			.arg(&pattern)
			.output()
			.map_err(|e| DocsyncError::LintTool {
				reason: format!("failed to invoke `{}`: {e}", self.command),
			})?;

		// Findings are keyed off the exit code. Informational chatter on
		// stderr during a zero-exit run is not a finding.
		if output.status.success() {
			return Ok(Vec::new());
		}

		let stdout = String::from_utf8_lossy(&output.stdout);
		let stderr = String::from_utf8_lossy(&output.stderr);
		let text = if stdout.trim().is_empty() {
			stderr
		} else {
			stdout
		};

		let findings: Vec<String> = text
			.lines()
			.filter(|line| !line.trim().is_empty())
			.map(String::from)
			.collect();

		if findings.is_empty() {
			// Non-zero exit with no output still fails the run.
			return Ok(vec![format!(
				"`{}` exited with {}",
				self.command, output.status
			)]);
		}

		Ok(findings)
	}
}

/// A [`MarkdownLinter`] that reports nothing. Used when linting is disabled
/// and as a test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLinter;

impl MarkdownLinter for NoopLinter {
	fn run(&self, _docs_root: &Path) -> DocsyncResult<Vec<String>> {
		Ok(Vec::new())
	}
}
