// src/usage/mod.rs
// =============================================================================
// This module renders the help/usage banner.
//
// Submodules:
// - flags: the fixed, ordered list of documented command-line flags
// - render: turns package metadata + the flag list into the banner text
//
// The banner text is a contract: scripts scrape it, so its spacing, wording
// and flag order must stay byte-for-byte stable.
// =============================================================================

mod flags;
mod render;

pub use render::print_usage;

// Only the parser tests need the flag table outside this module
#[cfg(test)]
pub use flags::FLAGS;
