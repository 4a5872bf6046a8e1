use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::DocsyncError;
use crate::DocsyncResult;

/// Options controlling how a directory tree is walked.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
	/// Gitignore-style patterns excluded from the walk, applied on top of the
	/// built-in exclusions.
	pub exclude_patterns: Vec<String>,
}

/// Directory names never descended into. These hold dependency-manager or
/// build output and are not part of any source or document tree.
fn is_excluded_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

/// Recursively enumerate regular files with the given extension under `root`,
/// returning absolute paths.
///
/// A nonexistent root yields an empty sequence rather than an error. The
/// result is sorted so that traversal order is stable for a given filesystem
/// state; downstream aggregation relies on this as its ordering basis.
pub fn walk_tree(root: &Path, extension: &str, options: &WalkOptions) -> DocsyncResult<Vec<PathBuf>> {
	if !root.is_dir() {
		return Ok(Vec::new());
	}

	let root = normalize_path(&std::path::absolute(root)?);
	let custom_exclude = build_exclude_matcher(&root, &options.exclude_patterns)?;

	let mut files = Vec::new();
	walk_dir(&root, extension, &custom_exclude, &mut files)?;
	// Sort for deterministic ordering.
	files.sort();

	tracing::debug!(
		root = %root.display(),
		extension,
		count = files.len(),
		"walked tree"
	);

	Ok(files)
}

fn walk_dir(
	dir: &Path,
	extension: &str,
	custom_exclude: &Gitignore,
	files: &mut Vec<PathBuf>,
) -> DocsyncResult<()> {
	let entries = std::fs::read_dir(dir)?;

	for entry in entries {
		let entry = entry?;
		let path = entry.path();
		let is_dir = path.is_dir();

		if is_dir {
			if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
				if is_excluded_directory_name(name) {
					continue;
				}
			}
		}

		if custom_exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			walk_dir(&path, extension, custom_exclude, files)?;
		} else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
			files.push(path);
		}
	}

	Ok(())
}

/// Build a `Gitignore` matcher from exclude patterns specified in
/// `docsync.toml` `[exclude]`. These follow `.gitignore` syntax.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> DocsyncResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			DocsyncError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}"))
		})?;
	}
	builder
		.build()
		.map_err(|e| DocsyncError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

/// Check that `root` exists and is a readable directory, for pipelines where
/// a missing root is a structural failure rather than an empty result.
pub fn ensure_root(root: &Path) -> DocsyncResult<PathBuf> {
	if !root.is_dir() {
		return Err(DocsyncError::MissingRoot {
			path: root.display().to_string(),
		});
	}

	Ok(normalize_path(&std::path::absolute(root)?))
}

/// Lexically normalize a path by folding `.` and `..` components. No symlink
/// following and no case normalization, so path-separator and case mismatches
/// downstream are legitimate breakage, not false positives.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
	let mut normalized = PathBuf::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				if !normalized.pop() {
					normalized.push(component.as_os_str());
				}
			}
			_ => normalized.push(component.as_os_str()),
		}
	}

	normalized
}
