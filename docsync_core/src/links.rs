use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::walker::normalize_path;

/// URL schemes whose targets are never resolved against the corpus.
const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// A relative link extracted from a document, with its target resolved
/// against the containing document's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
	/// The document containing the link.
	pub source_file: PathBuf,
	/// The path portion inside the link syntax, before any `#` anchor,
	/// exactly as written.
	pub raw_target: String,
	/// Absolute path after resolving `raw_target` relative to the source
	/// file's directory, lexically normalized.
	pub resolved_path: PathBuf,
}

/// A link whose resolved target is not present in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BrokenLink {
	/// The document containing the broken link.
	pub file: PathBuf,
	/// The original target string, as written in the document.
	pub target: String,
	/// The resolved absolute path that was not found.
	pub resolved: PathBuf,
}

fn memstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

/// Extract every inline markdown link `[label](target)` from `content` whose
/// target is a resolvable path reference.
///
/// Excluded from the result: targets beginning with a recognized URL scheme,
/// and pure in-document anchors (`[x](#section)`) whose path portion is
/// empty once the anchor fragment is stripped. Reference-style links and
/// HTML anchors are not recognized.
pub fn scan_links(source_file: &Path, content: &str) -> Vec<LinkReference> {
	let bytes = content.as_bytes();
	let source_dir = source_file.parent().unwrap_or_else(|| Path::new(""));
	let mut references = Vec::new();
	let mut search_from = 0;

	while search_from < bytes.len() {
		// A label never contains `]`, so the nearest `](` after a `[` closes
		// the label and opens the target.
		let Some(open_offset) = memstr(&bytes[search_from..], b"[") else {
			break;
		};
		let abs_open = search_from + open_offset;

		let Some(close_offset) = memstr(&bytes[abs_open..], b"](") else {
			break;
		};
		let target_start = abs_open + close_offset + 2;

		let Some(paren_offset) = memstr(&bytes[target_start..], b")") else {
			break;
		};
		let target_end = target_start + paren_offset;
		search_from = target_end + 1;

		let Ok(target) = std::str::from_utf8(&bytes[target_start..target_end]) else {
			continue;
		};

		if URL_SCHEMES.iter().any(|scheme| target.starts_with(scheme)) {
			continue;
		}

		// Strip the anchor fragment before resolution.
		let path_portion = target.split('#').next().unwrap_or_default();
		if path_portion.is_empty() {
			// A pure in-document anchor cannot be broken by definition.
			continue;
		}

		references.push(LinkReference {
			source_file: source_file.to_path_buf(),
			raw_target: path_portion.to_string(),
			resolved_path: normalize_path(&source_dir.join(path_portion)),
		});
	}

	references
}

/// Membership-test every reference's resolved path against the corpus,
/// returning a finding for each miss. Each occurrence in a document is
/// reported separately.
#[must_use]
pub fn resolve_broken_links(
	references: &[LinkReference],
	corpus: &HashSet<PathBuf>,
) -> Vec<BrokenLink> {
	references
		.iter()
		.filter(|reference| !corpus.contains(&reference.resolved_path))
		.map(|reference| BrokenLink {
			file: reference.source_file.clone(),
			target: reference.raw_target.clone(),
			resolved: reference.resolved_path.clone(),
		})
		.collect()
}
