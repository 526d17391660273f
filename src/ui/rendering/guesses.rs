//! Guess list rendering with star feedback.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_guesses(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let lines: Vec<Line> = match self.round {
            Some(ref round) => {
                let code_length = round.code_length();
                // Keep the newest guesses in view
                let visible = area.height.saturating_sub(2) as usize;
                let start = round.guesses().len().saturating_sub(visible);

                round.guesses()[start..]
                    .iter()
                    .enumerate()
                    .map(|(i, g)| {
                        let r = g.result;
                        Line::from(vec![
                            Span::styled(
                                format!("{:>3}. ", start + i + 1),
                                Style::default().fg(Color::DarkGray),
                            ),
                            Span::raw(format!("{}  ", g.digits)),
                            Span::styled("★".repeat(r.exact), Style::default().fg(Color::Green)),
                            Span::styled(
                                "☆".repeat(r.misplaced),
                                Style::default().fg(Color::Yellow),
                            ),
                            Span::styled(
                                "-".repeat(r.misses(code_length)),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ])
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Guesses")),
            area,
        );
    }
}
