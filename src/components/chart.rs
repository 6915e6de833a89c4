//! Income chart panel
//!
//! Draws the combined bar (income) and line (growth) chart on a ratatui
//! canvas whose bounds are the same 800x320 logical space the SVG export
//! uses. Coordinates come from `chart::geometry`; the canvas Y axis grows
//! upward, so SVG-space Y values are flipped against the canvas height.

use crate::chart::ChartLayout;
use crate::model::{RangeDataset, RangeKey};
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

/// Draw the income chart for the active range
pub fn draw_chart_panel(
    frame: &mut Frame,
    area: Rect,
    selected_range: RangeKey,
    dataset: &RangeDataset,
) {
    let layout = ChartLayout::default();
    let n = dataset.points.len();
    let max_income = dataset.max_income;
    let flip = |y: f64| layout.height - y;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title(format!(" Income Trend - {} ", selected_range.label()))
                .title_style(
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .x_bounds([0.0, layout.width])
        .y_bounds([0.0, layout.height])
        .paint(|ctx| {
            // Income grid lines with left-axis labels
            for tick in layout.income_ticks(max_income) {
                let y = flip(layout.y_income(tick, max_income));
                ctx.draw(&CanvasLine {
                    x1: layout.margin_left,
                    y1: y,
                    x2: layout.width - layout.margin_right,
                    y2: y,
                    color: theme::BORDER,
                });
                ctx.print(
                    0.0,
                    y,
                    Line::styled(
                        format!("{:>5}", format_axis_amount(tick)),
                        Style::default().fg(theme::DIM),
                    ),
                );
            }

            // Right-axis growth labels
            for tick in layout.growth_ticks() {
                let y = flip(layout.y_growth(tick));
                ctx.print(
                    layout.width - layout.margin_right + 8.0,
                    y,
                    Line::styled(format!("{:.0}%", tick), Style::default().fg(theme::DIM)),
                );
            }

            // Income bars
            let bar_width = layout.bar_width(n);
            for (i, point) in dataset.points.iter().enumerate() {
                let top = flip(layout.y_income(point.income, max_income));
                let bottom = flip(layout.baseline_y());
                ctx.draw(&Rectangle {
                    x: layout.x_for_index(i, n) - bar_width / 2.0,
                    y: bottom,
                    width: bar_width,
                    height: top - bottom,
                    color: theme::BAR,
                });
            }

            // Growth line between consecutive points
            for pair in dataset.points.windows(2).enumerate() {
                let (i, window) = pair;
                ctx.draw(&CanvasLine {
                    x1: layout.x_for_index(i, n),
                    y1: flip(layout.y_growth(window[0].growth)),
                    x2: layout.x_for_index(i + 1, n),
                    y2: flip(layout.y_growth(window[1].growth)),
                    color: theme::GROWTH,
                });
            }

            // Month labels under the baseline
            for (i, point) in dataset.points.iter().enumerate() {
                ctx.print(
                    layout.x_for_index(i, n) - 8.0,
                    flip(layout.height - layout.margin_bottom + 20.0),
                    Line::styled(point.month, Style::default().fg(theme::DIM)),
                );
            }

            // Legend in the bottom margin
            ctx.print(
                layout.margin_left,
                2.0,
                Line::from(vec![
                    ratatui::text::Span::styled("█ Income   ", Style::default().fg(theme::BAR)),
                    ratatui::text::Span::styled("─ MoM Growth", Style::default().fg(theme::GROWTH)),
                ]),
            );
        });

    frame.render_widget(canvas, area);
}

/// Axis amount label, e.g. "$2k"
fn format_axis_amount(value: f64) -> String {
    if value >= 1000.0 {
        format!("${:.0}k", value / 1000.0)
    } else {
        format!("${:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_amount_formatting() {
        assert_eq!(format_axis_amount(0.0), "$0");
        assert_eq!(format_axis_amount(4000.0), "$4k");
        assert_eq!(format_axis_amount(750.0), "$750");
    }
}
