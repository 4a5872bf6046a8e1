use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::DocsyncResult;
use crate::config::DocsyncConfig;
use crate::links::BrokenLink;
use crate::links::LinkReference;
use crate::links::resolve_broken_links;
use crate::links::scan_links;
use crate::lint::MarkdownLinter;
use crate::walker::WalkOptions;
use crate::walker::ensure_root;
use crate::walker::walk_tree;

/// Options controlling a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
	/// Tree-walking options shared with synchronization.
	pub walk: WalkOptions,
}

impl ValidateOptions {
	/// Construct [`ValidateOptions`] from a loaded config.
	#[must_use]
	pub fn from_config(config: &DocsyncConfig) -> Self {
		Self {
			walk: WalkOptions {
				exclude_patterns: config.exclude.patterns.clone(),
			},
		}
	}
}

/// A per-document read failure. The document's links are treated as empty
/// and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
	pub file: PathBuf,
	pub reason: String,
}

/// Result of one validation run: lint findings from the external tool plus
/// broken-link findings from the resolver. Any non-empty finding set from
/// either source marks the run failed.
#[derive(Debug, Default)]
pub struct ValidationReport {
	/// Findings reported by the external markdown lint tool.
	pub lint_findings: Vec<String>,
	/// Relative links whose resolved target is not in the corpus.
	pub broken_links: Vec<BrokenLink>,
	/// Per-document read failures, isolated from the rest of the run.
	pub read_failures: Vec<ReadFailure>,
}

impl ValidationReport {
	/// True when neither the linter nor the link resolver found anything and
	/// every document could be read.
	#[must_use]
	pub fn is_ok(&self) -> bool {
		self.lint_findings.is_empty() && self.broken_links.is_empty() && self.read_failures.is_empty()
	}
}

/// Run the validator pipeline over the document corpus at `docs_root`:
/// lint via the external collaborator, then walk the `.md` corpus, extract
/// inline links from each document, and resolve them against the corpus.
///
/// A missing docs root or an uninvokable lint tool is a structural failure
/// that aborts the run; findings never are.
pub fn validate(
	docs_root: &Path,
	linter: &dyn MarkdownLinter,
	options: &ValidateOptions,
) -> DocsyncResult<ValidationReport> {
	let docs_root = ensure_root(docs_root)?;

	let lint_findings = linter.run(&docs_root)?;

	let files = walk_tree(&docs_root, "md", &options.walk)?;
	let corpus: HashSet<PathBuf> = files.iter().cloned().collect();

	let mut references: Vec<LinkReference> = Vec::new();
	let mut read_failures: Vec<ReadFailure> = Vec::new();
	for file in &files {
		// Documents are decoded lossily so invalid UTF-8 never fails a run;
		// only genuine read errors are recorded.
		match std::fs::read(file) {
			Ok(bytes) => {
				let content = String::from_utf8_lossy(&bytes);
				references.extend(scan_links(file, &content));
			}
			Err(e) => {
				tracing::warn!(file = %file.display(), reason = %e, "skipping unreadable document");
				read_failures.push(ReadFailure {
					file: file.clone(),
					reason: e.to_string(),
				});
			}
		}
	}

	let broken_links = resolve_broken_links(&references, &corpus);

	tracing::debug!(
		documents = files.len(),
		links = references.len(),
		broken = broken_links.len(),
		lint_findings = lint_findings.len(),
		read_failures = read_failures.len(),
		"validated corpus"
	);

	Ok(ValidationReport {
		lint_findings,
		broken_links,
		read_failures,
	})
}
