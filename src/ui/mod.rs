pub mod game_over;
pub mod playfield;

use crate::app::Phase;
use crate::constants::WINDOW_TITLE;
use crate::game::World;
use game_over::render_game_over;
use playfield::{fit_world, Playfield};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one full frame: bordered window, scaled playfield, control hints, and
/// the game-over notification when the run has ended.
pub fn draw(frame: &mut Frame, world: &World, phase: Phase) {
    let size = frame.size();

    let block = Block::default()
        .title(WINDOW_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let field = fit_world(chunks[0]);
    frame.render_widget(Playfield::new(world), field);

    let controls = Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::White)),
        Span::styled(" Jump  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[1],
    );

    if let Phase::GameOver(reason) = phase {
        render_game_over(frame, field, reason);
    }
}
