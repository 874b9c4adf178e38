//! Color theme and glyphs for the PIPO TUI.
//!
//! The standard palette uses soft pastels for the bit cells and a violet
//! word box; the high-contrast palette sticks to the basic 16 colors.

use ratatui::style::{Color, Modifier, Style};

use pipo_engine::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29);
    pub const BG_HEADER: Color = Color::Rgb(17, 24, 39);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252);
    pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105);
    pub const TEXT_ON_CELL: Color = Color::Rgb(17, 17, 17);

    // === Input toggles (D3..D0) ===
    pub const INPUT_D3: Color = Color::Rgb(253, 230, 138);
    pub const INPUT_D2: Color = Color::Rgb(187, 247, 208);
    pub const INPUT_D1: Color = Color::Rgb(147, 197, 253);
    pub const INPUT_D0: Color = Color::Rgb(252, 165, 165);

    // === Output boxes (Q3..Q0) ===
    pub const OUTPUT_Q3: Color = Color::Rgb(245, 208, 254);
    pub const OUTPUT_Q2: Color = Color::Rgb(217, 249, 157);
    pub const OUTPUT_Q1: Color = Color::Rgb(186, 230, 253);
    pub const OUTPUT_Q0: Color = Color::Rgb(254, 202, 202);

    // === Word box ===
    pub const WORD_FILL: Color = Color::Rgb(237, 233, 254);
    pub const WORD_BORDER: Color = Color::Rgb(124, 58, 237);
    pub const WORD_TEXT: Color = Color::Rgb(76, 29, 149);

    // === Semantic ===
    pub const ACCENT: Color = Color::Rgb(127, 180, 202);
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108);
    pub const ERROR: Color = Color::Rgb(255, 93, 98);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_header: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_cell: Color,
    /// MSB-first, one per D3..D0.
    pub inputs: [Color; 4],
    /// MSB-first, one per Q3..Q0.
    pub outputs: [Color; 4],
    pub word_fill: Color,
    pub word_border: Color,
    pub word_text: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_header: colors::BG_HEADER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_on_cell: colors::TEXT_ON_CELL,
            inputs: [
                colors::INPUT_D3,
                colors::INPUT_D2,
                colors::INPUT_D1,
                colors::INPUT_D0,
            ],
            outputs: [
                colors::OUTPUT_Q3,
                colors::OUTPUT_Q2,
                colors::OUTPUT_Q1,
                colors::OUTPUT_Q0,
            ],
            word_fill: colors::WORD_FILL,
            word_border: colors::WORD_BORDER,
            word_text: colors::WORD_TEXT,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_header: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_on_cell: Color::Black,
            inputs: [Color::Yellow, Color::Green, Color::Cyan, Color::Red],
            outputs: [Color::Magenta, Color::Green, Color::Cyan, Color::Red],
            word_fill: Color::White,
            word_border: Color::Magenta,
            word_text: Color::Black,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs used in labels.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub title_dash: &'static str,
    pub arrow: &'static str,
    pub separator: &'static str,
    pub error: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            title_dash: "-",
            arrow: ">",
            separator: "|",
            error: "!",
        }
    } else {
        Glyphs {
            title_dash: "—",
            arrow: "▸",
            separator: "│",
            error: "✗",
        }
    }
}

pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn header(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_header)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn bit_cell(palette: &Palette, fill: Color) -> Style {
        Style::default()
            .fg(palette.text_on_cell)
            .bg(fill)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}
