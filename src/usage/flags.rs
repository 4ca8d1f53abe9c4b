// src/usage/flags.rs
// =============================================================================
// The documented command-line flags, in the order the banner lists them.
//
// Keeping them as data (instead of one print statement per flag) lets us
// test the list for completeness and order separately from formatting.
// =============================================================================

/// Describes one command-line option for the usage banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDescriptor {
    /// Short form, e.g. "-s"
    pub short: &'static str,
    /// Long form, e.g. "--standard"
    pub long: &'static str,
    /// Argument placeholder shown after the long form, e.g. "<name>"
    pub placeholder: Option<&'static str>,
    pub help: &'static str,
}

impl FlagDescriptor {
    const fn new(
        short: &'static str,
        long: &'static str,
        placeholder: Option<&'static str>,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            placeholder,
            help,
        }
    }

    /// The left column of a flag line: "-s, --standard <name>"
    pub fn signature(&self) -> String {
        match self.placeholder {
            Some(placeholder) => format!("{}, {} {}", self.short, self.long, placeholder),
            None => format!("{}, {}", self.short, self.long),
        }
    }
}

pub const FLAGS: [FlagDescriptor; 10] = [
    FlagDescriptor::new("-h", "--help", None, "show this help message and exit"),
    FlagDescriptor::new("-v", "--version", None, "show the version and exit"),
    FlagDescriptor::new("-u", "--url", None, "the URL to scan"),
    FlagDescriptor::new(
        "-s",
        "--standard",
        Some("<name>"),
        "the accessibility standard to use: Section508, WCAG2A, WCAG2AA (default), WCAG2AAA",
    ),
    FlagDescriptor::new("-t", "--timeout", Some("<ms>"), "the timeout in milliseconds"),
    FlagDescriptor::new("-o", "--output", Some("<file>"), "the location to write a JSON report"),
    FlagDescriptor::new(
        "-p",
        "--parallel",
        None,
        "run pa11y tests in parallel (heavy usage, can cause timeouts more easily)",
    ),
    FlagDescriptor::new(
        "-x",
        "--exclude",
        None,
        "exclude likely assets in crawl (may speed crawling)",
    ),
    FlagDescriptor::new(
        "-r",
        "--reporter",
        Some("<reporter>"),
        "the reporter to use: json (default), ci",
    ),
    FlagDescriptor::new(
        "-q",
        "--quiet",
        None,
        "quiet mode: run tests with no output to stdout",
    ),
];
