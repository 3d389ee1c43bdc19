//! The "Game Over!" notification.

use crate::constants::GAME_OVER_MESSAGE;
use crate::game::EndReason;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MODAL_WIDTH: u16 = 32;
const MODAL_HEIGHT: u16 = 7;

fn reason_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::Collision => "You hit an obstacle.",
        EndReason::OutOfBounds => "You left the sky.",
    }
}

/// Centered modal drawn over the frozen last frame.
pub fn render_game_over(frame: &mut Frame, area: Rect, reason: EndReason) {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            GAME_OVER_MESSAGE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            reason_text(reason),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press Enter]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
