mod guesses;
mod input_field;
mod logs;
mod menu;
mod stats_view;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::GameMode};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        match self.mode {
            GameMode::Menu | GameMode::Instructions | GameMode::History => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(10),   // Screen content
                        Constraint::Length(6), // Small log panel
                    ])
                    .split(f.area());

                match self.mode {
                    GameMode::Menu => self.draw_menu(f, layout[0]),
                    GameMode::Instructions => self.draw_instructions(f, layout[0]),
                    _ => self.draw_stats_view(f, layout[0]),
                }
                self.draw_logs(f, layout[1]);
            }

            GameMode::Setup | GameMode::Game => {
                let main_layout = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(f.area());

                let left_layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(5),
                        Constraint::Length(3),
                    ])
                    .split(main_layout[0]);

                let right_layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(10),
                        Constraint::Min(6), // logs panel
                    ])
                    .split(main_layout[1]);

                self.draw_game_status(f, left_layout[0]);
                self.draw_guesses(f, left_layout[1]);
                self.draw_input(f, left_layout[2]);
                self.draw_messages(f, right_layout[0]);
                self.draw_logs(f, right_layout[1]);
            }
        }
    }
}
