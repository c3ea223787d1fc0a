//! Immutable colour/style palette.
//!
//! Built once at startup and passed by reference into the renderer. Nothing
//! in the render path writes to it.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub legend: Style,
    pub footer: Style,
    pub border: Style,
    pub technologies_label: Style,
    pub accent: Style,
    pub cursor_row: Style,
    pub placeholder: Style,
    pub input_text: Style,
    pub input_cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Rgb(0x7D, 0x56, 0xF4))
                .add_modifier(Modifier::BOLD),
            legend: Style::default()
                .fg(Color::Rgb(0xFF, 0xA5, 0x00))
                .add_modifier(Modifier::BOLD),
            footer: Style::default()
                .fg(Color::Indexed(241))
                .add_modifier(Modifier::ITALIC),
            border: Style::default().fg(Color::Indexed(62)),
            technologies_label: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
            accent: Style::default()
                .fg(Color::Rgb(0x78, 0xE5, 0xA9))
                .add_modifier(Modifier::BOLD),
            cursor_row: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            input_text: Style::default(),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}
