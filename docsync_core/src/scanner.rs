use crate::lexer::LexError;
use crate::lexer::block_comments;

/// The marker that tags a doc comment as feature documentation.
pub const FEATURE_TAG: &str = "@feature";

/// A block comment carrying an `@feature` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedComment {
	/// The text following the `@feature` tag, trimmed of surrounding
	/// whitespace. Case- and whitespace-sensitive beyond that trim.
	pub feature_key: String,
	/// The full comment verbatim, including the `/**` and `*/` delimiters.
	pub body: String,
}

/// Extract the feature key from a single comment line, if the line carries an
/// `@feature` tag followed by whitespace and a non-empty rest-of-line.
///
/// This is the narrow tag matcher applied only to already-isolated comment
/// text, never to raw source.
#[must_use]
pub fn feature_tag_key(line: &str) -> Option<&str> {
	let mut search = line;

	// The first occurrence may be part of a longer word (`@features`), so
	// keep scanning until one is followed by whitespace and a non-empty rest.
	while let Some((_, rest)) = search.split_once(FEATURE_TAG) {
		if rest.starts_with(char::is_whitespace) {
			let key = rest.trim();
			if !key.is_empty() {
				return Some(key);
			}
		}
		search = rest;
	}

	None
}

/// Scan the text of one source file for `@feature`-tagged doc comments.
///
/// Only doc-style block comments (`/**` ... `*/`, i.e. inner text starting
/// with `*`) are considered. The first tagged line wins per comment. A file
/// with no tagged comments yields an empty vec.
pub fn scan_source(content: &str) -> Result<Vec<AnnotatedComment>, LexError> {
	let comments = block_comments(content)?;
	let mut annotated = Vec::new();

	for comment in comments {
		if !comment.inner.starts_with('*') {
			continue;
		}

		let Some(key) = comment.inner.lines().find_map(feature_tag_key) else {
			continue;
		};

		annotated.push(AnnotatedComment {
			feature_key: key.to_string(),
			body: comment.to_source(),
		});
	}

	Ok(annotated)
}
