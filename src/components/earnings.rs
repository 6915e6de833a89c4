//! Time-range selector and earnings summary panel

use crate::model::{EarningsSummary, RangeKey};
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the range tabs and the earnings figures
pub fn draw_earnings_panel(
    frame: &mut Frame,
    area: Rect,
    selected_range: RangeKey,
    earnings: &EarningsSummary,
) {
    let mut tab_spans = vec![Span::styled("Time Period  ", Style::default().fg(theme::DIM))];
    for range in RangeKey::all() {
        let style = if range == selected_range {
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::ACCENT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::DIM)
        };
        tab_spans.push(Span::styled(format!(" {} ", range.label()), style));
        tab_spans.push(Span::raw(" "));
    }

    let content = vec![
        Line::from(tab_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Earnings ", Style::default().fg(theme::DIM)),
            Span::styled(
                earnings.total.clone(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Payment Awaited ", Style::default().fg(theme::DIM)),
            Span::styled(earnings.awaited.clone(), Style::default().fg(theme::ACCENT)),
            Span::raw("   "),
            Span::styled("Payment Overdue ", Style::default().fg(theme::DIM)),
            Span::styled(earnings.overdue.clone(), Style::default().fg(theme::ACCENT)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );

    frame.render_widget(paragraph, area);
}
