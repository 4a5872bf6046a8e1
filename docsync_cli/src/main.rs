use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use docsync_cli::Commands;
use docsync_cli::DocsyncCli;
use docsync_cli::OutputFormat;
use docsync_core::AnyEmptyResult;
use docsync_core::AnyResult;
use docsync_core::config::DocsyncConfig;
use docsync_core::lint::CommandLinter;
use docsync_core::lint::MarkdownLinter;
use docsync_core::lint::NoopLinter;
use docsync_core::sync::SyncOptions;
use docsync_core::sync::SyncReport;
use docsync_core::sync::synchronize;
use docsync_core::validate::ValidateOptions;
use docsync_core::validate::ValidationReport;
use docsync_core::validate::validate;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let mut args = DocsyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	// Take the subcommand out so the remaining global args can be borrowed.
	let command = args.command.take();
	let result = match command {
		Some(Commands::Sync { source, output }) => run_sync(&args, source, output),
		Some(Commands::Validate {
			docs,
			no_lint,
			format,
		}) => run_validate(&args, docs, no_lint, format),
		Some(Commands::Status) => run_status(&args),
		None => {
			eprintln!("No subcommand specified. Run `docsync --help` for usage.");
			process::exit(1);
		}
	};

	match result {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			// Try to render through miette for rich diagnostics with help
			// text and error codes.
			match e.downcast::<docsync_core::DocsyncError>() {
				Ok(err) => {
					let report: miette::Report = (*err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!("error:", red));
				}
			}
			process::exit(2);
		}
	}
}

fn resolve_root(args: &DocsyncCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Run the extractor pipeline. Returns `false` when the run should fail the
/// process (currently never; an all-writes-failed run surfaces as an error).
fn run_sync(
	args: &DocsyncCli,
	source: Option<PathBuf>,
	output: Option<PathBuf>,
) -> AnyResult<bool> {
	let root = resolve_root(args);
	let config = DocsyncConfig::load_or_default(&root)?;

	let source_root = source.unwrap_or_else(|| root.join(&config.source.dir));
	let output_root = output.unwrap_or_else(|| root.join(&config.docs.dir));
	let options = SyncOptions::from_config(&config);

	if args.verbose {
		println!(
			"Scanning `{}` for `.{}` files...",
			source_root.display(),
			options.extension
		);
	}

	let report = synchronize(&source_root, &output_root, &options)?;
	print_sync_report(&report, &root);

	Ok(true)
}

fn print_sync_report(report: &SyncReport, root: &Path) {
	for failure in &report.scan_failures {
		eprintln!(
			"{} skipped `{}`: {}",
			colored!("warning:", yellow),
			make_relative(&failure.file, root),
			failure.reason
		);
	}

	if report.nothing_to_do() {
		println!("No @feature tags found in source files. Nothing to sync.");
		return;
	}

	for (key, path) in &report.written {
		println!("  - wrote `{key}` to {}", make_relative(path, root));
	}

	for failure in &report.write_failures {
		eprintln!(
			"{} failed to write `{}` to {}: {}",
			colored!("error:", red),
			failure.feature_key,
			make_relative(&failure.path, root),
			failure.reason
		);
	}

	println!(
		"\n{}",
		colored!(
			format!("Synchronized {} feature(s).", report.features_written()),
			green
		)
	);
}

/// Run the validator pipeline. Returns `false` when findings were reported
/// and the process should exit non-zero.
fn run_validate(
	args: &DocsyncCli,
	docs: Option<PathBuf>,
	no_lint: bool,
	format: OutputFormat,
) -> AnyResult<bool> {
	let root = resolve_root(args);
	let config = DocsyncConfig::load_or_default(&root)?;

	let docs_root = docs.unwrap_or_else(|| root.join(&config.docs.dir));
	let options = ValidateOptions::from_config(&config);

	let linter: Box<dyn MarkdownLinter> = if no_lint || !config.lint.enabled {
		Box::new(NoopLinter)
	} else {
		Box::new(CommandLinter::new(config.lint.command.clone()))
	};

	let report = validate(&docs_root, linter.as_ref(), &options)?;

	match format {
		OutputFormat::Json => print_validation_json(&report, &root)?,
		OutputFormat::Text => print_validation_text(&report, &root),
	}

	Ok(report.is_ok())
}

fn print_validation_json(report: &ValidationReport, root: &Path) -> AnyEmptyResult {
	let broken: Vec<serde_json::Value> = report
		.broken_links
		.iter()
		.map(|link| {
			serde_json::json!({
				"file": make_relative(&link.file, root),
				"target": link.target,
				"resolved": link.resolved,
			})
		})
		.collect();

	let read_failures: Vec<serde_json::Value> = report
		.read_failures
		.iter()
		.map(|failure| {
			serde_json::json!({
				"file": make_relative(&failure.file, root),
				"reason": failure.reason,
			})
		})
		.collect();

	let output = serde_json::json!({
		"ok": report.is_ok(),
		"lint_findings": report.lint_findings,
		"broken_links": broken,
		"read_failures": read_failures,
	});
	println!("{output}");

	Ok(())
}

fn print_validation_text(report: &ValidationReport, root: &Path) {
	for failure in &report.read_failures {
		eprintln!(
			"{} could not read `{}`: {}",
			colored!("warning:", yellow),
			make_relative(&failure.file, root),
			failure.reason
		);
	}

	if report.lint_findings.is_empty() {
		println!("No linting issues found.");
	} else {
		eprintln!("{}", colored!("Linter findings:", bold));
		for finding in &report.lint_findings {
			eprintln!("  {finding}");
		}
	}

	if report.broken_links.is_empty() {
		println!("No broken links found.");
	} else {
		eprintln!("{}", colored!("Broken links found:", bold));
		for link in &report.broken_links {
			eprintln!(
				"  - in `{}`: link to `{}` is broken",
				make_relative(&link.file, root),
				link.target
			);
		}
	}

	println!();
	if report.is_ok() {
		println!("{}", colored!("Validation successful.", green));
	} else {
		eprintln!("{}", colored!("Validation failed.", red));
	}
}

fn print_section(title: &str) {
	println!();
	println!("{}", colored!(title, bold));
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	println!("{label:<24} {value}");
}

fn run_status(args: &DocsyncCli) -> AnyResult<bool> {
	let root = resolve_root(args);
	let config = DocsyncConfig::load_or_default(&root)?;

	let resolved_config = DocsyncConfig::resolve_path(&root)
		.map_or_else(|| "none (defaults)".to_string(), |path| path.display().to_string());

	let source_root = root.join(&config.source.dir);
	let docs_root = root.join(&config.docs.dir);

	println!("{}", colored!("docsync status", bold));

	print_section("Project");
	print_field("Project root", root.display());
	print_field("Resolved config", resolved_config);
	print_field("Source directory", source_root.display());
	print_field("Source extension", &config.source.extension);
	print_field("Docs directory", docs_root.display());
	print_field(
		"Lint command",
		if config.lint.enabled {
			config.lint.command.as_str()
		} else {
			"disabled"
		},
	);

	print_section("Corpus");
	if !docs_root.is_dir() {
		print_field("Documents", "none (docs directory missing)");
		println!("\nRun `docsync sync` to extract feature documentation.");
		return Ok(true);
	}

	let walk = docsync_core::walker::WalkOptions {
		exclude_patterns: config.exclude.patterns.clone(),
	};
	let documents = docsync_core::walker::walk_tree(&docs_root, "md", &walk)?;
	print_field("Documents", documents.len());
	for document in &documents {
		println!("{:<24} {}", "document", make_relative(document, &root));
	}

	Ok(true)
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
	path.strip_prefix(&root)
		.unwrap_or(path)
		.display()
		.to_string()
}
