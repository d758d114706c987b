//! Commit graph layout and rendering
//!
//! `bit-graph` turns an ordered list of commits into a branch-topology
//! visualization similar to `git log --graph`.
//!
//! - `areas`: commit sources and the drawing session
//! - `artifacts`: commit model, lane assignment, edge routing and renderers
//! - `commands`: CLI entry points (`log`, `render`)

/// Macro for debug logging that is enabled with the debug_graph feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Assigned lane {} to {}", lane, oid);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_graph")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Output flavour of a drawn graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphFormat {
    /// `git log --graph` style text
    #[default]
    Text,
    /// Layout rows as JSON
    Json,
    /// Standalone SVG document
    Svg,
}

/// When to emit ANSI colors in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
