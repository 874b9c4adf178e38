//! TUI rendering for the PIPO simulator using ratatui.
//!
//! The screen is the terminal rendition of the register panel:
//!
//! ```text
//!  4-bit PIPO — Parallel In ▸ Parallel Out                      Loads: 0
//!
//!  Parallel Input (D3..D0):  ╭───╮ ╭───╮ ╭───╮ ╭───╮ ╭────────────╮ ╭───────╮
//!                            │ 0 │ │ 0 │ │ 0 │ │ 0 │ │Load (Latch)│ │ Reset │
//!                            ╰───╯ ╰───╯ ╰───╯ ╰───╯ ╰────────────╯ ╰───────╯
//!  ╭──────────────────────────────────────────────────────────────────────╮
//!  │ Parallel Output (Q3 .. Q0):  0000                                    │
//!  ╰──────────────────────────────────────────────────────────────────────╯
//!  ... four Q boxes with Q3..Q0 underneath, then status and key help
//! ```
//!
//! Rendering only reads [`App`]; every mutation goes through
//! [`App::dispatch`] from the input layer.

mod input;
mod theme;

pub use input::{apply_event, command_for_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use pipo_engine::{App, BitPosition, COMMAND_SPECS, Command, StatusKind};

/// Rows used by the panel; the inline viewport is exactly this tall.
pub const INLINE_VIEWPORT_HEIGHT: u16 = 16;

const INPUT_LABEL: &str = "Parallel Input (D3..D0):";
const WORD_LABEL: &str = "Parallel Output (Q3 .. Q0):";
const LATCH_LABEL: &str = "Load (Latch)";
const RESET_LABEL: &str = "Reset";

/// Screen geometry shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input_label: Rect,
    /// MSB-first, one per D3..D0.
    pub input_cells: [Rect; 4],
    pub latch_button: Rect,
    pub reset_button: Rect,
    pub word: Rect,
    /// MSB-first, one per Q3..Q0.
    pub output_cells: [Rect; 4],
    pub output_labels: [Rect; 4],
    pub status: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    /// Command triggered by a click at (`column`, `row`), if any.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Command> {
        let point = Position::new(column, row);
        if let Some(index) = self
            .input_cells
            .iter()
            .position(|cell| cell.contains(point))
        {
            return BitPosition::from_index(index).map(Command::Toggle);
        }
        if self.latch_button.contains(point) {
            return Some(Command::Latch);
        }
        if self.reset_button.contains(point) {
            return Some(Command::Reset);
        }
        None
    }
}

/// Compute the panel layout for `area`.
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [
        header,
        _gap,
        inputs_row,
        word,
        outputs_row,
        labels_row,
        _filler,
        status,
        help,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [
        input_label,
        d3,
        d2,
        d1,
        d0,
        latch_button,
        reset_button,
        _rest,
    ] = Layout::horizontal([
        Constraint::Length(INPUT_LABEL.len() as u16 + 2),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(LATCH_LABEL.len() as u16 + 2),
        Constraint::Length(RESET_LABEL.len() as u16 + 4),
        Constraint::Min(0),
    ])
    .spacing(1)
    .areas(inputs_row);

    let output_columns = Layout::horizontal([
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .spacing(2);
    let [q3, q2, q1, q0, _] = output_columns.areas(outputs_row);
    let [l3, l2, l1, l0, _] = output_columns.areas(labels_row);

    ScreenLayout {
        header,
        input_label,
        input_cells: [d3, d2, d1, d0],
        latch_button,
        reset_button,
        word,
        output_cells: [q3, q2, q1, q0],
        output_labels: [l3, l2, l1, l0],
        status,
        help,
    }
}

/// Main draw function.
///
/// Returns the geometry it drew with. In inline mode the frame starts at the
/// cursor row, so mouse hit-testing must use this layout rather than one
/// computed from the terminal size.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let layout = screen_layout(frame.area());

    draw_header(frame, app, layout.header, &palette, &glyphs);
    draw_inputs(frame, app, &layout, &palette);
    draw_word(frame, app, layout.word, &palette);
    draw_outputs(frame, app, &layout, &palette);
    draw_status(frame, app, layout.status, &palette, &glyphs);
    draw_help(frame, layout.help, &palette, &glyphs);
    layout
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let style = styles::header(palette);
    let title = format!(
        " 4-bit PIPO {} Parallel In {} Parallel Out",
        glyphs.title_dash, glyphs.arrow
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, style))).style(style),
        area,
    );

    let loads = format!("Loads: {} ", app.register().load_count());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            loads,
            Style::default()
                .fg(palette.text_secondary)
                .bg(palette.bg_header),
        )))
        .alignment(Alignment::Right),
        area,
    );
}

fn draw_inputs(frame: &mut Frame, app: &App, layout: &ScreenLayout, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {INPUT_LABEL}"),
            styles::label(palette),
        ))),
        middle_row(layout.input_label),
    );

    for position in BitPosition::ALL {
        let index = position.index();
        let fill = palette.inputs[index];
        let bit = app.inputs().get(position);
        let cell = Paragraph::new(bit.to_string())
            .alignment(Alignment::Center)
            .style(styles::bit_cell(palette, fill))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(fill).bg(palette.bg_dark)),
            );
        frame.render_widget(cell, layout.input_cells[index]);
    }

    draw_button(frame, LATCH_LABEL, layout.latch_button, palette.accent, palette);
    draw_button(frame, RESET_LABEL, layout.reset_button, palette.text_muted, palette);
}

fn draw_button(
    frame: &mut Frame,
    label: &str,
    area: Rect,
    color: Color,
    palette: &Palette,
) {
    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(button, area);
}

fn draw_word(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let text_style = Style::default()
        .fg(palette.word_text)
        .bg(palette.word_fill)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(format!(" {WORD_LABEL}  "), text_style),
        Span::styled(app.register().rendered_word(), text_style),
    ]);
    let word = Paragraph::new(line).style(text_style).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.word_border).bg(palette.bg_dark)),
    );
    frame.render_widget(word, area);
}

fn draw_outputs(frame: &mut Frame, app: &App, layout: &ScreenLayout, palette: &Palette) {
    let word = app.register().word();
    for position in BitPosition::ALL {
        let index = position.index();
        let fill = palette.outputs[index];

        // Digit sits on the middle row of the 5-row box.
        let digit = Paragraph::new(vec![Line::from(""), Line::from(word.bit(position).to_string())])
            .alignment(Alignment::Center)
            .style(styles::bit_cell(palette, fill))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.text_on_cell).bg(fill)),
            );
        frame.render_widget(digit, layout.output_cells[index]);

        let label = Paragraph::new(position.output_label())
            .alignment(Alignment::Center)
            .style(styles::label(palette));
        frame.render_widget(label, layout.output_labels[index]);
    }
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = match app.status() {
        Some(status) => match status.kind {
            StatusKind::Info => Line::from(Span::styled(
                format!(" {}", status.message),
                Style::default().fg(palette.success),
            )),
            StatusKind::Error => Line::from(Span::styled(
                format!(" {} {}", glyphs.error, status.message),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )),
        },
        None => Line::from(Span::styled(
            " Ready",
            Style::default().fg(palette.text_muted),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::raw(" ")];
    for (i, spec) in COMMAND_SPECS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                Style::default().fg(palette.text_muted),
            ));
        }
        spans.push(Span::styled(spec.keys, styles::key_hint(palette)));
        spans.push(Span::styled(
            format!(" {}", spec.description),
            Style::default().fg(palette.text_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn middle_row(area: Rect) -> Rect {
    if area.height < 3 {
        return area;
    }
    Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn layout_keeps_inputs_in_msb_first_order() {
        let layout = screen_layout(full_screen());
        for pair in layout.input_cells.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for pair in layout.output_cells.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        assert!(layout.input_cells[3].x < layout.latch_button.x);
        assert!(layout.latch_button.x < layout.reset_button.x);
    }

    #[test]
    fn layout_fits_inline_viewport() {
        let layout = screen_layout(Rect::new(0, 0, 80, INLINE_VIEWPORT_HEIGHT));
        assert_eq!(layout.help.y, INLINE_VIEWPORT_HEIGHT - 1);
        assert_eq!(layout.status.y, INLINE_VIEWPORT_HEIGHT - 2);
        assert!(layout.output_labels[0].y < layout.status.y);
    }

    #[test]
    fn status_and_help_stick_to_bottom_in_full_screen() {
        let layout = screen_layout(full_screen());
        assert_eq!(layout.help.y, 23);
        assert_eq!(layout.status.y, 22);
    }

    #[test]
    fn hit_maps_cells_and_buttons() {
        let layout = screen_layout(full_screen());
        for (index, cell) in layout.input_cells.iter().enumerate() {
            assert_eq!(
                layout.hit(cell.x + 1, cell.y + 1),
                BitPosition::from_index(index).map(Command::Toggle)
            );
        }
        let latch = layout.latch_button;
        assert_eq!(layout.hit(latch.x, latch.y), Some(Command::Latch));
        let reset = layout.reset_button;
        assert_eq!(
            layout.hit(reset.x + reset.width - 1, reset.y + reset.height - 1),
            Some(Command::Reset)
        );
    }

    #[test]
    fn hit_ignores_output_area() {
        let layout = screen_layout(full_screen());
        let q3 = layout.output_cells[0];
        assert_eq!(layout.hit(q3.x + 1, q3.y + 1), None);
        assert_eq!(layout.hit(layout.word.x + 2, layout.word.y + 1), None);
    }

    #[test]
    fn middle_row_centers_single_line() {
        let row = middle_row(Rect::new(2, 4, 10, 3));
        assert_eq!(row, Rect::new(2, 5, 10, 1));
        let tiny = Rect::new(0, 0, 10, 1);
        assert_eq!(middle_row(tiny), tiny);
    }
}
