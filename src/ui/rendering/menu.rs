//! Main menu and instructions screens.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{round::INSTRUCTIONS, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_menu(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  CODE⚡BREAKER",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  What do you want to do?"),
            Line::from(""),
            Line::from(vec![Span::styled("  (i) ", key), Span::raw("Show instructions")]),
            Line::from(vec![Span::styled("  (p) ", key), Span::raw("Play a game")]),
            Line::from(vec![Span::styled("  (h) ", key), Span::raw("Show history")]),
            Line::from(vec![Span::styled("  (q) ", key), Span::raw("Quit")]),
        ];

        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Menu")),
            area,
        );
    }

    pub(in crate::ui) fn draw_instructions(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(INSTRUCTIONS),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to return to the menu",
                Style::default().fg(Color::Gray),
            )),
        ];

        f.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Instructions")),
            area,
        );
    }
}
