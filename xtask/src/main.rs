// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! - `cargo xtask ci` runs lints, docs and every test target
//! - `cargo xtask test --package afterclass-client` narrows tests to one crate
//! - `cargo xtask smoke --api-url <URL>` drives the `afterclass` binary
//!   against a live backend
//!
//! Client tests serve a stub backend in-process, so `cargo test` needs no
//! running backend.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing_log::AsTrace;

/// Workspace crates share this prefix; `xtask` itself does not.
const PACKAGE_PREFIX: &str = "afterclass-";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
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

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, check docs and run every test target
    CI,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy and rustfmt
    #[command(visible_alias = "l")]
    Lint {
        /// Apply fixes instead of failing
        #[arg(long)]
        fix: bool,
    },

    /// Build docs for each afterclass crate with warnings denied
    #[command(visible_alias = "d")]
    Docs,

    /// Run tests
    #[command(visible_alias = "t")]
    Test {
        /// Only test this package
        #[arg(long, short)]
        package: Option<String>,

        /// Run doc tests instead of unit and integration tests
        #[arg(long)]
        doc: bool,
    },

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run the CLI against a live backend
    Smoke {
        /// Backend base URL
        #[arg(long, env = "AFTERCLASS_API_URL")]
        api_url: String,

        /// Also list registrations with this admin token
        #[arg(long, env = "AFTERCLASS_ADMIN_TOKEN", hide_env_values = true)]
        admin_token: Option<String>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => {
                lint(false)?;
                docs()?;
                test(None, false)?;
                test(None, true)
            }
            Self::Check => cargo(&["check", "--workspace", "--all-targets"]),
            Self::Lint { fix } => lint(fix),
            Self::Docs => docs(),
            Self::Test { package, doc } => test(package.as_deref(), doc),
            Self::Coverage => cargo(&[
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Smoke {
                api_url,
                admin_token,
            } => smoke(&api_url, admin_token.as_deref()),
        }
    }
}

fn lint(fix: bool) -> Result<()> {
    if fix {
        cargo(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--allow-staged",
        ])?;
        cargo(&["fmt", "--all"])
    } else {
        cargo(&[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ])?;
        cargo(&["fmt", "--all", "--check"])
    }
}

fn docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    for package in meta
        .workspace_packages()
        .into_iter()
        .filter(|p| p.name.starts_with(PACKAGE_PREFIX))
    {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
            .env("RUSTDOCFLAGS", "-D warnings")
            .run_with_trace()
            .wrap_err_with(|| format!("docs for {} have warnings", package.name))?;
    }
    Ok(())
}

fn test(package: Option<&str>, doc: bool) -> Result<()> {
    let mut args: Vec<&str> = vec!["test"];
    match package {
        Some(package) => args.extend(["--package", package]),
        None => args.push("--workspace"),
    }
    args.push(if doc { "--doc" } else { "--all-targets" });
    cargo(&args)
}

/// `cargo run` of the CLI against `api_url`.
fn afterclass(api_url: &str, extra: &[&str]) -> duct::Expression {
    let mut args: Vec<&str> = vec![
        "run",
        "--quiet",
        "--package",
        "afterclass-cli",
        "--",
        "--api-url",
        api_url,
    ];
    args.extend_from_slice(extra);
    cmd("cargo", args)
}

/// Runs `afterclass status`, then the admin registration list when a
/// token is supplied.
fn smoke(api_url: &str, admin_token: Option<&str>) -> Result<()> {
    afterclass(api_url, &["status"])
        .run_with_trace()
        .wrap_err_with(|| format!("status against {api_url} failed"))?;

    if let Some(token) = admin_token {
        afterclass(api_url, &["admin", "registrations", "list"])
            .env("AFTERCLASS_ADMIN_TOKEN", token)
            .run_with_trace()
            .wrap_err("admin registration list failed")?;
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args.iter().copied()).run_with_trace()?;
    Ok(())
}

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
