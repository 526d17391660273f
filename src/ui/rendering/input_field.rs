//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    types::{GameMode, InputStatus},
};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = self.input_status();

        let (border_color, subtitle) = match status {
            InputStatus::Incomplete => (Color::Gray, String::new()),
            InputStatus::Valid => (Color::Green, String::new()),
            InputStatus::Invalid(e) => (Color::Red, e.to_string()),
        };

        let text = format!("{}▌", self.input);

        let help_text = match self.mode {
            GameMode::Setup => "Enter = choose length | Esc = menu | Ctrl+Q = quit",
            _ if !self.round_in_progress() => {
                "Enter = play again | Esc = menu | Ctrl+R = history | Ctrl+Q = quit"
            }
            _ => "Enter = guess | Esc = give up | Ctrl+R = history | Ctrl+Q = quit",
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
