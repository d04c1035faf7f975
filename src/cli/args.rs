//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation and
//! the runtime configuration derived from it.

use crate::interest::parse_swiss_number;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Offline bundle packager for the Swiss interest calculators
#[derive(Parser, Debug)]
#[command(
    name = "zinsrechner_offline",
    version,
    about = "Packages the interest calculators as offline single-file HTML bundles",
    long_about = "Packages every calculator page as one self-contained HTML file per language,
zipped for download.

Stylesheets, fonts, icons and scripts are inlined so the page works without a network connection.
Missing assets are reported as warnings; a missing template fails only its own bundle.

Usage:
  zinsrechner_offline
  zinsrechner_offline --root public --output public/downloads
  zinsrechner_offline --config offline.toml --date 2024-06-30
  zinsrechner_offline interest --principal \"10'000\" --from 2024-01-01 --to 2024-12-31

Exit code 0 = the batch ran to completion, even if individual bundles failed."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Site root all templates and assets are read from [default: .]
    #[arg(short, long, value_name = "DIR", env = "ZINSRECHNER_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory receiving the zip archives [default: offline]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// TOML bundle config overriding the built-in tools and assets
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Archiver used to compress each bundle
    #[arg(long, value_enum, default_value_t = ArchiverKind::Zip)]
    pub archiver: ArchiverKind,

    /// Date printed in the offline banner [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print asset warnings and checksums
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute default interest on an overdue amount
    Interest(InterestArgs),
}

#[derive(clap::Args, Debug)]
pub struct InterestArgs {
    /// Overdue amount, Swiss notation accepted (e.g. 10'000.50 or 1'234,56)
    #[arg(
        short,
        long,
        value_name = "AMOUNT",
        value_parser = parse_swiss_number,
        allow_negative_numbers = true
    )]
    pub principal: Decimal,

    /// Due date (first day excluded)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: NaiveDate,

    /// Payment date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: NaiveDate,

    /// Annual rate in percent [default: 5, the statutory rate]
    #[arg(
        long,
        value_name = "PCT",
        value_parser = parse_swiss_number,
        allow_negative_numbers = true
    )]
    pub rate: Option<Decimal>,

    /// Compound annually over days / 365 years instead of simple actual/360
    #[arg(long)]
    pub compound: bool,

    /// Print the calculation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiverKind {
    /// Built-in deflate
    Zip,
    /// The system `zip` command
    Command,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if output.is_file() {
                return Err(format!("Output path {} is a file", output.display()));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("Config file {} does not exist", config.display()));
            }
        }

        if let Some(Command::Interest(interest)) = &self.command {
            if interest.rate.is_some_and(|rate| rate.is_sign_negative()) {
                return Err("Rate cannot be negative".to_string());
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }
}
