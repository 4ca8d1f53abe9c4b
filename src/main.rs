// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Answer --help / --version with the usage banner or version string
// 3. Validate the remaining options into a RunConfig and print it
// 4. Exit with proper code (0 = success, 1 = usage error, 2 = error)
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - validated run configuration
mod metadata;      // src/metadata.rs - name/version/description
mod usage;         // src/usage/ - the help banner

use clap::Parser;  // Parser trait enables the try_parse() method
use cli::Cli;
use config::RunConfig;
use metadata::PackageMetadata;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = help, version, or a valid configuration was printed
//   Ok(1) = usage error (bad flags, no URL, conflicting URLs)
//   Err   = invalid URL or I/O failure (exit code 2)
fn run() -> Result<i32> {
    // Metadata is resolved once here and passed down explicitly
    let meta = PackageMetadata::from_cargo();

    // try_parse() instead of parse(): clap would exit with its own code (2)
    // on bad input, but a usage error is exit code 1 for us
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(1);
        }
    };

    if cli.help {
        usage::print_usage(&meta)?;
        return Ok(0);
    }

    if cli.version {
        println!("{}", meta.version);
        return Ok(0);
    }

    let url = match cli.target_url() {
        Ok(Some(url)) => url,
        Ok(None) => {
            usage::print_usage(&meta)?;
            eprintln!("Error: no URL specified");
            return Ok(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let config = RunConfig::new(url, &cli)?;

    // --quiet means nothing on stdout; errors above still go to stderr
    if !config.quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(0)
}
