mod common;

use docsync_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn sync_writes_feature_documents() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("lib"))?;
	std::fs::write(
		tmp.path().join("lib/auth.js"),
		"/** @feature Login\n * Users can log in. */\nfunction login() {}\n",
	)?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("wrote `Login`")
				.and(predicates::str::contains("Synchronized 1 feature(s).")),
		);

	let content = std::fs::read_to_string(tmp.path().join(".project/features/login.md"))?;
	assert!(content.starts_with("# Feature: Login\n"));
	assert!(content.contains("Users can log in."));

	Ok(())
}

#[test]
fn sync_reports_nothing_to_do() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("lib"))?;
	std::fs::write(tmp.path().join("lib/plain.js"), "const x = 1;\n")?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Nothing to sync."));

	assert!(!tmp.path().join(".project/features").exists());

	Ok(())
}

#[test]
fn sync_honors_source_and_output_flags() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("code"))?;
	std::fs::write(tmp.path().join("code/a.js"), "/** @feature Search */\n")?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.arg("--source")
		.arg(tmp.path().join("code"))
		.arg("--output")
		.arg(tmp.path().join("docs"))
		.assert()
		.success();

	assert!(tmp.path().join("docs/search.md").is_file());

	Ok(())
}

#[test]
fn sync_reads_config_overrides() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("docsync.toml"),
		"[source]\ndir = \"src\"\nextension = \"ts\"\n\n[docs]\ndir = \"docs/features\"\n",
	)?;
	std::fs::create_dir_all(tmp.path().join("src"))?;
	std::fs::write(tmp.path().join("src/billing.ts"), "/** @feature Billing */\n")?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("docs/features/billing.md").is_file());

	Ok(())
}

#[test]
fn sync_fails_for_missing_source_root() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("not readable"));

	Ok(())
}

#[test]
fn sync_warns_about_unscannable_files_but_continues() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("lib"))?;
	std::fs::write(tmp.path().join("lib/bad.js"), "/* never closed\n")?;
	std::fs::write(tmp.path().join("lib/good.js"), "/** @feature Search */\n")?;

	let mut cmd = common::docsync_cmd();
	cmd.arg("sync")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("skipped"))
		.stdout(predicates::str::contains("Synchronized 1 feature(s)."));

	assert!(tmp.path().join(".project/features/search.md").is_file());

	Ok(())
}
