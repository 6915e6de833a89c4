//! Banner strip above the panels

use crate::model::Banner;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw one line per active banner
pub fn draw_banners(frame: &mut Frame, area: Rect, banners: &[Banner]) {
    let lines: Vec<Line> = banners
        .iter()
        .map(|banner| {
            let marker_style = match banner {
                Banner::SelectedInvoice(_) => Style::default().fg(theme::ACCENT),
                Banner::UploadMode => Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
                Banner::CustomRange => Style::default().fg(theme::DIM),
            };
            Line::from(vec![
                Span::styled("▌ ", marker_style),
                Span::raw(banner.message()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
