// src/usage/render.rs
// =============================================================================
// Builds the usage banner:
//
//     <two-space title line>      "  pa11y-crawl v1.0.0"
//     <two-space description>
//     <blank>
//     <usage synopsis>
//     <blank>
//     <one line per flag, signatures padded to a common column>
//     <blank>
//
// render_usage() is pure and returns the whole text; write_usage() and
// print_usage() only move that text to a writer / stdout.
// =============================================================================

use std::io::{self, Write};

use super::flags::{FlagDescriptor, FLAGS};
use crate::metadata::PackageMetadata;

/// Name shown in the synopsis line (the installed binary, not the package)
const BIN_NAME: &str = "pa11y-crawl";

const FLAG_INDENT: &str = "    ";

/// Spaces between the longest signature and its help text
const COLUMN_GAP: usize = 3;

/// Renders the full usage banner, trailing blank line included
pub fn render_usage(meta: &PackageMetadata) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {} v{}\n", meta.name, meta.version));
    out.push_str(&format!("  {}\n", meta.description));
    out.push('\n');
    out.push_str(&format!("  Usage: {} [options] <url>\n", BIN_NAME));
    out.push('\n');

    let width = signature_width(&FLAGS);
    for flag in &FLAGS {
        out.push_str(&format!(
            "{}{:<width$}{}\n",
            FLAG_INDENT,
            flag.signature(),
            flag.help,
            width = width
        ));
    }

    out.push('\n');
    out
}

/// Writes the usage banner to any writer
pub fn write_usage<W: Write>(mut writer: W, meta: &PackageMetadata) -> io::Result<()> {
    writer.write_all(render_usage(meta).as_bytes())?;
    writer.flush()
}

/// Writes the usage banner to stdout
pub fn print_usage(meta: &PackageMetadata) -> io::Result<()> {
    write_usage(io::stdout().lock(), meta)
}

// Column where help text starts, counted from the end of the indent
fn signature_width(flags: &[FlagDescriptor]) -> usize {
    flags
        .iter()
        .map(|f| f.signature().len())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP
}
