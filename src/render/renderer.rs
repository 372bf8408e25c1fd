use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};

/// Terminal cells per board cell, horizontally
const CELL_WIDTH: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        highscore: u32,
        tick_interval: Duration,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, highscore, tick_interval);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(
            chunks[1],
            state.grid_size as u16 * CELL_WIDTH + 2,
            state.grid_size as u16 + 2,
        );
        frame.render_widget(self.render_grid(state), board_area);

        // Overlay sits on top of the frozen board
        if state.game_over {
            let overlay_area = centered(board_area, board_area.width.min(34), 9);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_game_over(state, highscore), overlay_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let body_style = Style::default().fg(snake_color(state.score));
        let mut lines = Vec::with_capacity(state.grid_size);

        for y in 0..state.grid_size {
            let spans: Vec<Span> = (0..state.grid_size)
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);
                    if pos == state.snake.head() {
                        Span::styled("■ ", body_style.add_modifier(Modifier::BOLD))
                    } else if state.snake.occupies(pos) {
                        Span::styled("■ ", body_style)
                    } else if pos == state.food {
                        Span::styled(
                            "● ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled("· ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray))
                .title(" Snake "),
        )
    }

    fn render_stats(
        &self,
        state: &GameState,
        highscore: u32,
        tick_interval: Duration,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value),
            Span::raw("    "),
            Span::styled("High score: ", label),
            Span::styled(highscore.to_string(), Style::default().fg(Color::LightGreen)),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(
                format!("{}ms", tick_interval.as_millis()),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, highscore: u32) -> Paragraph<'_> {
        let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled("GAME OVER", bold(Color::Red))),
            Line::from(""),
            Line::from(vec![
                Span::raw("Final Score: "),
                Span::styled(state.score.to_string(), bold(Color::White)),
            ]),
            Line::from(Span::styled(
                format!("High score: {}", highscore),
                Style::default().fg(Color::LightGreen),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("R", bold(Color::Green)),
                Span::styled(" restart  ", Style::default().fg(Color::Gray)),
                Span::styled("Q", bold(Color::Red)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Snake green that brightens with score, saturating at 25 points
pub fn snake_color(score: u32) -> Color {
    let intensity = 0.5 + (score as f32 * 0.02).min(0.5);
    Color::Rgb(
        (34.0 * intensity) as u8,
        (197.0 * intensity) as u8,
        (94.0 * intensity) as u8,
    )
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
