// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod protocol;

#[cfg(test)]
mod tests;

use clap::Parser;
use school_admin::SidenavConfig;
use school_admin_api::{SchoolAdmin, open_preference_store};
use school_admin_domain::{Breakpoint, parse_iso_date};
use school_admin_persistence::SqlitePreferenceStore;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};
use tracing::info;

/// School Admin - drives the dashboard over JSON lines on stdin/stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` preference database. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Initial viewport width in pixels
    #[arg(short, long, default_value_t = 1280)]
    width: u32,

    /// Widths below this many pixels use the mobile layout
    #[arg(short, long, default_value_t = Breakpoint::DEFAULT_PX)]
    breakpoint: u32,

    /// Reference date for age rules (YYYY-MM-DD). Defaults to today in UTC.
    #[arg(short, long, value_parser = parse_date)]
    today: Option<Date>,
}

fn parse_date(value: &str) -> Result<Date, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing School Admin");

    match &args.database {
        Some(path) => info!("Using preference database at: {}", path.display()),
        None => info!("Using in-memory preference database"),
    }
    let store: SqlitePreferenceStore = open_preference_store(args.database.as_deref())?;

    let config: SidenavConfig = SidenavConfig {
        breakpoint: Breakpoint::new(args.breakpoint),
        ..SidenavConfig::default()
    };
    let today: Date = args
        .today
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let mut admin: SchoolAdmin<SqlitePreferenceStore> =
        SchoolAdmin::new(config, store, args.width, today)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled: usize = protocol::serve(&mut admin, stdin.lock(), stdout.lock())?;

    info!(requests = handled, "Input closed, shutting down");
    Ok(())
}
