use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocsyncError {
	#[error(transparent)]
	#[diagnostic(code(docsync::io_error))]
	Io(#[from] std::io::Error),

	#[error("root directory is not readable: `{path}`")]
	#[diagnostic(
		code(docsync::missing_root),
		help("check that the directory exists and is accessible")
	)]
	MissingRoot { path: String },

	#[error("all {count} document write(s) failed")]
	#[diagnostic(
		code(docsync::all_writes_failed),
		help("check that the output directory is writable")
	)]
	AllWritesFailed { count: usize },

	#[error("failed to run the markdown lint tool: {reason}")]
	#[diagnostic(
		code(docsync::lint_tool),
		help("check that the lint command is installed and on your PATH, or pass --no-lint")
	)]
	LintTool { reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docsync::config_parse),
		help("check that docsync.toml is valid TOML with [source], [docs], [exclude] or [lint] sections")
	)]
	ConfigParse(String),
}

pub type DocsyncResult<T> = Result<T, DocsyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
