// src/metadata.rs
// =============================================================================
// Package metadata shown in the usage banner.
//
// The values come from Cargo.toml at compile time via the CARGO_PKG_*
// environment variables, so there is nothing to load (or fail) at runtime.
// The usage reporter never reads them itself: main builds a PackageMetadata
// and passes it in, which lets tests render banners for any name/version.
// =============================================================================

/// Name, version and description of the tool, used only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    /// Semantic version string, e.g. "1.0.0"
    pub version: String,
    pub description: String,
}

impl PackageMetadata {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }

    /// Metadata of this crate, as written in Cargo.toml
    pub fn from_cargo() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        )
    }
}
