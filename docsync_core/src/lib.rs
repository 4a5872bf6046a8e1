//! `docsync_core` is the core library for the docsync documentation tool. It
//! extracts `@feature`-tagged doc comments from a source tree into per-feature
//! markdown documents, and validates a document corpus for broken relative
//! links.
//!
//! ## Pipelines
//!
//! ```text
//! Extractor:  TreeWalker → lexer → scanner → FeatureMap → writer
//! Validator:  TreeWalker → link scanner → link resolver (+ lint collaborator)
//! ```
//!
//! Both pipelines share the [`walker`] and are invoked independently; no
//! state persists between runs other than the filesystem itself.
//!
//! ## Modules
//!
//! - [`walker`]: Recursive directory enumeration with extension filtering
//!   and gitignore-style exclusion rules, shared by both pipelines.
//! - [`scanner`]: Feature-tag extraction from isolated block comments, built
//!   on the [`lexer`]'s string-literal-aware tokenization.
//! - [`features`]: Pure fold of ordered comments into insertion-ordered
//!   per-feature groups.
//! - [`writer`]: Slug derivation and markdown document rendering/writing.
//! - [`links`]: Inline link extraction and corpus-membership resolution.
//! - [`lint`]: The external markdown lint tool behind a narrow interface.
//! - [`config`]: Configuration loading from `docsync.toml`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use docsync_core::lint::CommandLinter;
//! use docsync_core::sync::SyncOptions;
//! use docsync_core::sync::synchronize;
//! use docsync_core::validate::ValidateOptions;
//! use docsync_core::validate::validate;
//!
//! let report = synchronize(
//! 	Path::new("lib"),
//! 	Path::new(".project/features"),
//! 	&SyncOptions::default(),
//! )
//! .unwrap();
//! println!("{} feature document(s) written", report.features_written());
//!
//! let verdict = validate(
//! 	Path::new(".project/features"),
//! 	&CommandLinter::default(),
//! 	&ValidateOptions::default(),
//! )
//! .unwrap();
//! assert!(verdict.is_ok());
//! ```

pub use error::*;

pub mod config;
mod error;
pub mod features;
pub mod lexer;
pub mod links;
pub mod lint;
pub mod scanner;
pub mod sync;
pub mod validate;
pub mod walker;
pub mod writer;
