use logos::Logos;

/// Raw tokens produced by logos for flat tokenization of source text.
///
/// Only the constructs that matter for comment extraction are tokenized:
/// comments themselves, and the string/template literal forms that could
/// otherwise produce false comment matches. Everything else is skipped.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	// Closed block comment. The classic "no */ inside" regex, so the match
	// always ends at the first closing delimiter.
	#[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
	BlockComment,

	// A block comment opener that never closes. Logos prefers the longer
	// `BlockComment` match, so this only fires for unterminated comments.
	#[token("/*")]
	UnterminatedBlockComment,

	#[regex(r"//[^\n]*", allow_greedy = true)]
	LineComment,

	#[regex(r#""([^"\\\n]|\\.)*""#)]
	DoubleQuotedString,

	#[regex(r"'([^'\\\n]|\\.)*'")]
	SingleQuotedString,

	#[regex(r"`([^`\\]|\\.)*`")]
	TemplateString,
}

/// Error produced when source text cannot be tokenized. The pipeline layer
/// attaches the file path before reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
	pub reason: String,
}

impl std::fmt::Display for LexError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.reason)
	}
}

impl std::error::Error for LexError {}

/// The inner text of one block comment, between `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment<'a> {
	/// Comment text excluding the delimiters.
	pub inner: &'a str,
}

impl BlockComment<'_> {
	/// Rebuild the comment verbatim, including its delimiters.
	#[must_use]
	pub fn to_source(&self) -> String {
		format!("/*{}*/", self.inner)
	}
}

/// Extract every block comment from source text.
///
/// String and template literals are consumed as single tokens, so
/// comment-like text inside them can never produce a comment. Unrecognized
/// bytes between tokens are skipped. An unterminated block comment is an
/// error for the whole file.
pub fn block_comments(content: &str) -> Result<Vec<BlockComment<'_>>, LexError> {
	let mut comments = Vec::new();

	for (token, span) in RawToken::lexer(content).spanned() {
		match token {
			Ok(RawToken::BlockComment) => {
				let inner = &content[span.start + 2..span.end - 2];
				comments.push(BlockComment { inner });
			}
			Ok(RawToken::UnterminatedBlockComment) => {
				return Err(LexError {
					reason: format!("unterminated block comment at byte {}", span.start),
				});
			}
			// Line comments, strings, and unrecognized bytes are skipped.
			Ok(_) | Err(()) => {}
		}
	}

	Ok(comments)
}
