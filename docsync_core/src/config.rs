use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocsyncError;
use crate::DocsyncResult;

/// Default directory scanned for `@feature`-tagged source comments.
pub const DEFAULT_SOURCE_DIR: &str = "lib";

/// Default directory where feature documents are written and validated.
pub const DEFAULT_DOCS_DIR: &str = ".project/features";

/// Default source file extension scanned by the extractor.
pub const DEFAULT_SOURCE_EXTENSION: &str = "js";

/// Default markdown lint command invoked during validation.
pub const DEFAULT_LINT_COMMAND: &str = "markdownlint";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["docsync.toml", ".docsync.toml", ".config/docsync.toml"];

/// Configuration loaded from a `docsync.toml` file.
///
/// ```toml
/// [source]
/// dir = "src"
/// extension = "ts"
///
/// [docs]
/// dir = "docs/features"
///
/// [exclude]
/// patterns = ["vendor/", "generated/"]
///
/// [lint]
/// command = "markdownlint"
/// enabled = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DocsyncConfig {
	/// Where source files are scanned for feature comments.
	#[serde(default)]
	pub source: SourceConfig,
	/// Where feature documents are written and validated.
	#[serde(default)]
	pub docs: DocsConfig,
	/// Exclusion configuration using gitignore-style patterns.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// External markdown lint tool configuration.
	#[serde(default)]
	pub lint: LintConfig,
}

/// Configuration for the `[source]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
	/// Directory scanned for source files, relative to the project root.
	#[serde(default = "default_source_dir")]
	pub dir: PathBuf,
	/// Extension of the scanned source files (without the leading dot).
	#[serde(default = "default_source_extension")]
	pub extension: String,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			dir: default_source_dir(),
			extension: default_source_extension(),
		}
	}
}

/// Configuration for the `[docs]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
	/// Directory holding the generated document corpus, relative to the
	/// project root.
	#[serde(default = "default_docs_dir")]
	pub dir: PathBuf,
}

impl Default for DocsConfig {
	fn default() -> Self {
		Self {
			dir: default_docs_dir(),
		}
	}
}

/// Configuration for the `[exclude]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeConfig {
	/// Gitignore-style patterns excluded from tree walking, applied on top of
	/// the built-in exclusions (`node_modules`, `target`, hidden directories).
	#[serde(default)]
	pub patterns: Vec<String>,
}

/// Configuration for the `[lint]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
	/// Command invoked to lint the document corpus.
	#[serde(default = "default_lint_command")]
	pub command: String,
	/// Whether linting runs as part of validation.
	#[serde(default = "default_true")]
	pub enabled: bool,
}

impl Default for LintConfig {
	fn default() -> Self {
		Self {
			command: default_lint_command(),
			enabled: true,
		}
	}
}

fn default_source_dir() -> PathBuf {
	PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_source_extension() -> String {
	DEFAULT_SOURCE_EXTENSION.to_string()
}

fn default_docs_dir() -> PathBuf {
	PathBuf::from(DEFAULT_DOCS_DIR)
}

fn default_lint_command() -> String {
	DEFAULT_LINT_COMMAND.to_string()
}

fn default_true() -> bool {
	true
}

impl DocsyncConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DocsyncResult<Option<DocsyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: DocsyncConfig =
			toml::from_str(&content).map_err(|e| DocsyncError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when no config file
	/// exists.
	pub fn load_or_default(root: &Path) -> DocsyncResult<DocsyncConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
