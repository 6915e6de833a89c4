//! Invoice creation call-to-action panel

use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the create/upload call-to-action
pub fn draw_creation_panel(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled(
                " ⊕ ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Create New Invoice",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  -  start by creating and sending a new invoice",
                Style::default().fg(theme::DIM),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "   n ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("create  "),
            Span::styled(
                " u ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("upload an existing invoice and set a payment reminder"),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );

    frame.render_widget(paragraph, area);
}
