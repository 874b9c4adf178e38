//! UI state types for the TUI layer.
//!
//! Pure data types with no IO and no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for borders and markers.
    pub ascii_only: bool,
    /// Use the high-contrast palette.
    pub high_contrast: bool,
}
