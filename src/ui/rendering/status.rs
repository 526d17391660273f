use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    history::Notification,
    ui::{app::App, types::GameMode},
};

impl App {
    pub(in crate::ui) fn draw_game_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status_text = match (self.mode, &self.round) {
            (GameMode::Setup, _) | (_, None) => {
                "How long do you want the code to be?".to_string()
            }
            (_, Some(round)) if round.is_solved() => format!(
                "🎉 You cracked the code {} in {} guesses!",
                round.code(),
                round.attempts()
            ),
            (_, Some(round)) => format!(
                "Code length: {} | Guesses so far: {}",
                round.code_length(),
                round.attempts()
            ),
        };

        let color = match self.last_result.as_ref().map(|r| r.notification) {
            Some(Notification::NewBest) => Color::Magenta,
            Some(_) => Color::Green,
            None => Color::White,
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Game Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_messages(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = self
            .messages
            .iter()
            .map(|m| Line::from(Span::raw(m.clone())))
            .collect();

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Record")),
            area,
        );
    }
}
