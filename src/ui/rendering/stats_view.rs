//! Per code length statistics table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let title = "Game History | Esc/Ctrl+R: Back | Ctrl+Q: Quit";

        if self.history.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No game history available",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Play some games first!"),
            ];

            f.render_widget(
                Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title)),
                area,
            );
            return;
        }

        let just_played = self.last_result.as_ref().map(|r| r.code_length);

        let rows: Vec<Row> = self
            .history
            .iter()
            .map(|(code_length, record)| {
                let style = if Some(*code_length) == just_played {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    code_length.to_string(),
                    record.games_played.to_string(),
                    record.best.to_string(),
                    format!("{:.2}", record.average),
                ])
                .style(style)
            })
            .collect();

        let header = Row::new(vec!["Length", "Games", "Best", "Average"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);
    }
}
