// src/config.rs
// =============================================================================
// The validated run configuration.
//
// clap already checked value syntax (standard names, timeout range, ...);
// this step checks the one thing clap can't: that the URL is an absolute
// http(s) address with a host. The result is what a crawl would run with,
// and it serializes to JSON for callers that want to inspect it.
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

use crate::cli::{Cli, Reporter, Standard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub url: Url,
    pub standard: Standard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub exclude_assets: bool,
    pub reporter: Reporter,
    pub quiet: bool,
}

impl RunConfig {
    /// Builds the configuration for scanning `url` with the options in `cli`
    pub fn new(url: &str, cli: &Cli) -> Result<Self> {
        Ok(Self {
            url: parse_target(url)?,
            standard: cli.standard,
            timeout_ms: cli.timeout,
            output: cli.output.clone(),
            parallel: cli.parallel,
            exclude_assets: cli.exclude,
            reporter: cli.reporter,
            quiet: cli.quiet,
        })
    }
}

// Parses and validates the URL to scan
fn parse_target(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid URL '{}': {}", raw, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("Unsupported URL scheme '{}': {}", url.scheme(), raw));
    }

    if url.host_str().is_none() {
        return Err(anyhow!("URL has no host: {}", raw));
    }

    Ok(url)
}
