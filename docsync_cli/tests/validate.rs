mod common;

use docsync_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

fn write_corpus(root: &std::path::Path, files: &[(&str, &str)]) -> AnyEmptyResult {
	let docs = root.join(".project/features");
	std::fs::create_dir_all(&docs)?;
	for (name, content) in files {
		std::fs::write(docs.join(name), content)?;
	}

	Ok(())
}

#[test]
fn validate_passes_on_clean_corpus() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_corpus(
		tmp.path(),
		&[
			("a.md", "# A\n\n[next](b.md) [self](#a)\n"),
			("b.md", "# B\n\n[back](./a.md)\n"),
		],
	)?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("No broken links found.")
				.and(predicates::str::contains("Validation successful.")),
		);

	Ok(())
}

#[test]
fn validate_reports_broken_links() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_corpus(tmp.path(), &[("a.md", "# A\n\n[see](./missing.md)\n")])?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("./missing.md")
				.and(predicates::str::contains("Validation failed.")),
		);

	Ok(())
}

#[test]
fn validate_ignores_external_urls() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_corpus(
		tmp.path(),
		&[("a.md", "# A\n\n[site](https://example.com/missing.md)\n")],
	)?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.assert()
		.success();

	Ok(())
}

#[test]
fn validate_emits_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_corpus(tmp.path(), &[("a.md", "[see](./missing.md)\n")])?;

	let mut cmd = common::docsync_cmd();
	let assert = cmd
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.arg("--format")
		.arg("json")
		.assert()
		.code(1);

	let output: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(output["ok"], Value::Bool(false));
	assert_eq!(output["broken_links"][0]["target"], "./missing.md");
	assert_eq!(output["broken_links"][0]["file"], ".project/features/a.md");

	Ok(())
}

#[test]
fn validate_fails_for_missing_docs_root() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("not readable"));

	Ok(())
}

#[test]
fn synchronized_corpus_validates_cleanly() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("lib"))?;
	std::fs::write(
		tmp.path().join("lib/auth.js"),
		"/** @feature Login\n * Users can log in. */\n",
	)?;

	let mut sync = common::docsync_cmd();
	sync.arg("sync").arg("--path").arg(tmp.path()).assert().success();

	let mut validate = common::docsync_cmd();
	validate
		.arg("validate")
		.arg("--path")
		.arg(tmp.path())
		.arg("--no-lint")
		.assert()
		.success();

	Ok(())
}
