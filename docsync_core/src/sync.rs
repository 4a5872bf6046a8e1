use std::path::Path;
use std::path::PathBuf;

use crate::DocsyncError;
use crate::DocsyncResult;
use crate::config::DocsyncConfig;
use crate::features;
use crate::features::FeatureMap;
use crate::scanner::AnnotatedComment;
use crate::scanner::scan_source;
use crate::walker::WalkOptions;
use crate::walker::ensure_root;
use crate::walker::walk_tree;
use crate::writer::write_document;

/// Options controlling a synchronization run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
	/// Extension of the scanned source files (without the leading dot).
	pub extension: String,
	/// Tree-walking options shared with validation.
	pub walk: WalkOptions,
}

impl Default for SyncOptions {
	fn default() -> Self {
		Self {
			extension: crate::config::DEFAULT_SOURCE_EXTENSION.to_string(),
			walk: WalkOptions::default(),
		}
	}
}

impl SyncOptions {
	/// Construct [`SyncOptions`] from a loaded config.
	#[must_use]
	pub fn from_config(config: &DocsyncConfig) -> Self {
		Self {
			extension: config.source.extension.clone(),
			walk: WalkOptions {
				exclude_patterns: config.exclude.patterns.clone(),
			},
		}
	}
}

/// A per-file scan failure. The file's contribution is treated as empty and
/// the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
	pub file: PathBuf,
	pub reason: String,
}

/// A per-feature write failure. Other features still attempt to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
	pub feature_key: String,
	pub path: PathBuf,
	pub reason: String,
}

/// Result of one synchronization run.
#[derive(Debug, Default)]
pub struct SyncReport {
	/// Feature documents written, in feature insertion order.
	pub written: Vec<(String, PathBuf)>,
	/// Per-file scan failures, isolated from the rest of the run.
	pub scan_failures: Vec<ScanFailure>,
	/// Per-feature write failures, isolated from the rest of the run.
	pub write_failures: Vec<WriteFailure>,
}

impl SyncReport {
	/// Number of feature documents written.
	#[must_use]
	pub fn features_written(&self) -> usize {
		self.written.len()
	}

	/// True when the source tree contained no tagged comments at all. This is
	/// a clean outcome, not an error.
	#[must_use]
	pub fn nothing_to_do(&self) -> bool {
		self.written.is_empty() && self.write_failures.is_empty()
	}
}

/// Run the extractor pipeline: walk the source tree, scan each file for
/// `@feature`-tagged doc comments, fold them into per-feature groups, and
/// write one markdown document per feature under `output_root`.
///
/// Per-file scan failures and per-feature write failures are collected into
/// the report rather than aborting the run. A missing source root is a
/// structural failure; so is a run in which every write fails.
pub fn synchronize(
	source_root: &Path,
	output_root: &Path,
	options: &SyncOptions,
) -> DocsyncResult<SyncReport> {
	let source_root = ensure_root(source_root)?;
	let files = walk_tree(&source_root, &options.extension, &options.walk)?;

	let mut report = SyncReport::default();
	let mut comments: Vec<AnnotatedComment> = Vec::new();

	for file in &files {
		match scan_file(file) {
			Ok(scanned) => comments.extend(scanned),
			Err(reason) => {
				tracing::warn!(file = %file.display(), %reason, "skipping unscannable file");
				report.scan_failures.push(ScanFailure {
					file: file.clone(),
					reason,
				});
			}
		}
	}

	let groups = features::aggregate(comments);
	if groups.is_empty() {
		tracing::debug!(root = %source_root.display(), "no feature tags found");
		return Ok(report);
	}

	write_groups(output_root, &groups, &mut report)?;
	Ok(report)
}

fn scan_file(file: &Path) -> Result<Vec<AnnotatedComment>, String> {
	let content = std::fs::read_to_string(file).map_err(|e| e.to_string())?;
	scan_source(&content).map_err(|e| e.to_string())
}

fn write_groups(
	output_root: &Path,
	groups: &FeatureMap,
	report: &mut SyncReport,
) -> DocsyncResult<()> {
	std::fs::create_dir_all(output_root)?;

	for (key, bodies) in groups.iter() {
		match write_document(output_root, key, bodies) {
			Ok(path) => {
				tracing::debug!(feature = key, path = %path.display(), "wrote document");
				report.written.push((key.to_string(), path));
			}
			Err(e) => {
				tracing::warn!(feature = key, reason = %e, "document write failed");
				report.write_failures.push(WriteFailure {
					feature_key: key.to_string(),
					path: output_root.join(crate::writer::document_file_name(key)),
					reason: e.to_string(),
				});
			}
		}
	}

	if report.written.is_empty() && !report.write_failures.is_empty() {
		return Err(DocsyncError::AllWritesFailed {
			count: report.write_failures.len(),
		});
	}

	Ok(())
}
