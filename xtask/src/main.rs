// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations used in CI.
//!
//! ### Smoke Testing
//!
//! `cargo xtask smoke` builds the `school-admin` binary, pipes a scripted
//! JSON-lines session into it, and fails unless every request is answered
//! with `"ok": true`. The session runs against a throwaway preference
//! database so a second pass can confirm the sidebar preference survived a
//! restart.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    fmt::Debug,
    io,
    path::{Path, PathBuf},
    process::Output,
    vec,
};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, Context},
    Result,
};
use duct::cmd;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Requests for the first smoke pass. Collapses the sidebar on desktop,
/// walks a holiday through the editor, and touches the read-only views.
const SMOKE_SESSION: &str = r#"{"id":1,"method":"sidebar.setCollapsed","params":{"collapsed":true}}
{"id":2,"method":"records.list","params":{"kind":"student","sort":"rollNumber"}}
{"id":3,"method":"editor.open","params":{"kind":"holiday"}}
{"id":4,"method":"editor.setFields","params":{"fields":{"name":"Smoke Day","date":"2026-02-02","type":"School","description":"xtask"}}}
{"id":5,"method":"editor.submit"}
{"id":6,"method":"dashboard.get"}
{"id":7,"method":"export.csv","params":{"kind":"holiday"}}
{"id":8,"method":"notifications.markAllRead"}
"#;

/// Requests for the second pass over the same database.
const SMOKE_RESTART: &str = r#"{"id":1,"method":"sidebar.get"}
"#;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, smoke)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Drive the CLI binary through a scripted session
    #[command(visible_alias = "s")]
    Smoke,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Machete => machete(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Smoke => smoke(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
        }
    }
}

/// Run CI checks (lint, build, test, smoke)
fn ci() -> Result<()> {
    lint()?;
    machete()?;
    build()?;
    test()?;
    smoke()?;
    Ok(())
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Generate code coverage report
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run tests for libs and docs
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Drive the CLI binary through a scripted JSON-lines session
///
/// ## What This Command Does
///
/// 1. Builds `school-admin-cli`
/// 2. Runs the first session against a fresh database file
/// 3. Runs a second session against the same file and checks the sidebar
///    came back collapsed
/// 4. Removes the database file (always, even on failure)
fn smoke() -> Result<()> {
    run_cargo(vec!["build", "--package", "school-admin-cli"])?;

    let database: PathBuf =
        std::env::temp_dir().join(format!("school_admin_smoke_{}.db", std::process::id()));
    let result: Result<()> = run_smoke(&database);

    if database.exists() {
        if let Err(e) = std::fs::remove_file(&database) {
            tracing::warn!("failed to remove {}: {e}", database.display());
        }
    }

    result
}

fn run_smoke(database: &Path) -> Result<()> {
    let first: Vec<Value> = run_session(database, SMOKE_SESSION)?;
    tracing::info!("first session answered {} requests", first.len());

    let second: Vec<Value> = run_session(database, SMOKE_RESTART)?;
    let collapsed: Option<bool> = second
        .first()
        .and_then(|response| response["result"]["collapsed"].as_bool());
    if collapsed != Some(true) {
        bail!("sidebar preference did not survive a restart: {second:?}");
    }

    tracing::info!("smoke session passed");
    Ok(())
}

/// Pipe `session` into the binary and return the parsed response lines
fn run_session(database: &Path, session: &str) -> Result<Vec<Value>> {
    let expected: usize = session.lines().filter(|l| !l.trim().is_empty()).count();

    let expression = cmd!(
        "cargo",
        "run",
        "--quiet",
        "--package",
        "school-admin-cli",
        "--",
        "--database",
        database,
        "--today",
        "2026-01-01"
    )
    .stdin_bytes(session.as_bytes().to_vec());
    tracing::info!("running command: {:?}", expression);
    let stdout: String = expression.read().wrap_err("smoke session failed")?;

    let responses: Vec<Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()
        .wrap_err("binary wrote a line that is not JSON")?;

    if responses.len() != expected {
        bail!(
            "expected {expected} responses, got {}: {stdout}",
            responses.len()
        );
    }
    if let Some(failed) = responses.iter().find(|r| r["ok"] != Value::Bool(true)) {
        bail!("request failed: {failed}");
    }

    Ok(responses)
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
