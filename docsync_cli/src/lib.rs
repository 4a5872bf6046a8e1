use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Extract feature documentation from source comments and validate it for broken links.",
	long_about = "docsync keeps a project's living documentation in step with its source code.\n\n\
	              Doc comments tagged with `@feature` are extracted from the source tree and \
	              grouped into one markdown document per feature. The resulting corpus (or any \
	              hand-authored docs directory) can then be validated: every relative link is \
	              resolved against the corpus and an external markdown linter is consulted.\n\n\
	              Quick start:\n  docsync sync      Extract feature docs from source comments\n  \
	              docsync validate  Lint the corpus and check for broken links\n  docsync status    \
	              Show the current corpus and configuration"
)]
pub struct DocsyncCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Extract `@feature`-tagged doc comments into per-feature documents.
	///
	/// Scans every source file under the source directory for doc comments
	/// carrying an `@feature` tag, groups the comment bodies by feature key,
	/// and writes one markdown file per feature into the docs directory.
	/// Existing documents with the same derived filename are overwritten.
	///
	/// Each run recomputes the corpus from scratch; a source tree with no
	/// tags writes nothing and reports "nothing to sync".
	Sync {
		/// Source directory to scan. Defaults to `[source] dir` from
		/// docsync.toml, or `lib`.
		#[arg(long)]
		source: Option<PathBuf>,

		/// Output directory for feature documents. Defaults to `[docs] dir`
		/// from docsync.toml, or `.project/features`.
		#[arg(long)]
		output: Option<PathBuf>,
	},
	/// Validate the document corpus: markdown lint plus broken-link check.
	///
	/// Walks the docs directory, resolves every relative `[label](target)`
	/// link against the set of markdown files found there, and runs the
	/// configured markdown lint tool. Exits with a non-zero status code if
	/// the linter reports findings or any link is broken.
	Validate {
		/// Docs directory to validate. Defaults to `[docs] dir` from
		/// docsync.toml, or `.project/features`.
		#[arg(long)]
		docs: Option<PathBuf>,

		/// Skip the external markdown lint tool and only check links.
		#[arg(long, default_value_t = false)]
		no_lint: bool,

		/// Output format for validation results. Use `text` for
		/// human-readable output or `json` for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Show the resolved configuration and the current document corpus.
	///
	/// Reports which config file was discovered, the source and docs
	/// directories in effect, and the documents currently present in the
	/// corpus.
	Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Includes lint findings and
	/// broken links with file, target, and resolved path.
	Json,
}
