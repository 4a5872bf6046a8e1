use std::path::Path;
use std::path::PathBuf;

/// Derive a filesystem-safe slug from a feature key: camelCase word
/// boundaries become hyphens, whitespace and underscore runs collapse to a
/// single hyphen, and the result is lowercased.
///
/// Deterministic: the same key always yields the same slug, so repeated
/// runs overwrite the same file rather than duplicating it.
#[must_use]
pub fn slugify(key: &str) -> String {
	let mut slug = String::with_capacity(key.len());
	let mut prev_ascii_lower = false;
	let mut prev_hyphen = false;

	for ch in key.chars() {
		if ch.is_whitespace() || ch == '_' {
			if !prev_hyphen {
				slug.push('-');
				prev_hyphen = true;
			}
			prev_ascii_lower = false;
			continue;
		}

		if ch.is_ascii_uppercase() && prev_ascii_lower {
			slug.push('-');
		}

		for lower in ch.to_lowercase() {
			slug.push(lower);
		}

		prev_hyphen = ch == '-';
		prev_ascii_lower = ch.is_ascii_lowercase();
	}

	slug
}

/// The filename a feature key's document is written to.
#[must_use]
pub fn document_file_name(key: &str) -> String {
	format!("{}.md", slugify(key))
}

/// Render a feature document: a level-1 heading with the literal feature
/// key, then each comment body separated by a horizontal rule on its own
/// line with blank lines around it.
#[must_use]
pub fn render_document(key: &str, bodies: &[String]) -> String {
	format!("# Feature: {key}\n\n{}\n", bodies.join("\n\n---\n\n"))
}

/// Write one feature document under `output_root`, overwriting any prior
/// file at the same derived path. Returns the written path.
pub fn write_document(
	output_root: &Path,
	key: &str,
	bodies: &[String],
) -> std::io::Result<PathBuf> {
	let path = output_root.join(document_file_name(key));
	std::fs::write(&path, render_document(key, bodies))?;
	Ok(path)
}
