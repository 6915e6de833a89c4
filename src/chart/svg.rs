//! SVG rendering for the income chart
//!
//! Produces a standalone scalable drawing with the fixed 800x320 logical
//! canvas: income grid, dual axis labels, month labels, rounded bars, the
//! growth polyline with point markers, a baseline, and a legend.

use super::geometry::ChartLayout;
use crate::model::RangeDataset;
use std::fmt::Write;

const BAR_FILL: &str = "#7c5cff";
const LINE_START: &str = "#FF6A3D";
const LINE_END: &str = "#FF2D55";
const GRID_STROKE: &str = "#3a3f4b";
const TEXT_FILL: &str = "#9aa0ae";
const BACKGROUND: &str = "#14161c";

/// Render the dataset as an SVG document
pub fn render_svg(layout: &ChartLayout, dataset: &RangeDataset, title: &str) -> String {
    let n = dataset.points.len();
    let max_income = dataset.max_income;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {:.0} {:.0}' role='img'>",
        layout.width, layout.height
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape_text(title));
    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(
        svg,
        "    <linearGradient id='growthLine' x1='0' y1='0' x2='0' y2='1'>"
    );
    let _ = writeln!(svg, "      <stop offset='0%' stop-color='{}'/>", LINE_START);
    let _ = writeln!(svg, "      <stop offset='100%' stop-color='{}'/>", LINE_END);
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(svg, "  </defs>");
    let _ = writeln!(
        svg,
        "  <rect width='{:.0}' height='{:.0}' fill='{}'/>",
        layout.width, layout.height, BACKGROUND
    );

    // Income grid lines with labels on the left axis
    for tick in layout.income_ticks(max_income) {
        let y = layout.y_income(tick, max_income);
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' x2='{:.1}' y1='{y:.1}' y2='{y:.1}' stroke='{}' stroke-opacity='0.6'/>",
            layout.margin_left,
            layout.width - layout.margin_right,
            GRID_STROKE
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{y:.1}' dy='0.35em' text-anchor='end' fill='{}' font-size='10'>{}</text>",
            layout.margin_left - 8.0,
            TEXT_FILL,
            format_income_tick(tick)
        );
    }

    // Growth labels on the right axis
    for tick in layout.growth_ticks() {
        let y = layout.y_growth(tick);
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{y:.1}' dy='0.35em' text-anchor='start' fill='{}' font-size='10'>{:.0}%</text>",
            layout.width - layout.margin_right + 8.0,
            TEXT_FILL,
            tick
        );
    }

    // Month labels along the X axis
    for (i, point) in dataset.points.iter().enumerate() {
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' text-anchor='middle' fill='{}' font-size='10'>{}</text>",
            layout.x_for_index(i, n),
            layout.height - layout.margin_bottom + 20.0,
            TEXT_FILL,
            escape_text(point.month)
        );
    }

    // Income bars
    let bar_width = layout.bar_width(n);
    for (i, point) in dataset.points.iter().enumerate() {
        let x = layout.x_for_index(i, n) - bar_width / 2.0;
        let y = layout.y_income(point.income, max_income);
        let h = layout.baseline_y() - y;
        let _ = writeln!(
            svg,
            "  <rect x='{x:.1}' y='{y:.1}' width='{bar_width:.1}' height='{h:.1}' rx='6' fill='{}'/>",
            BAR_FILL
        );
    }

    // Growth line
    let line_points: Vec<String> = dataset
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{:.1},{:.1}",
                layout.x_for_index(i, n),
                layout.y_growth(p.growth)
            )
        })
        .collect();
    let _ = writeln!(
        svg,
        "  <polyline points='{}' fill='none' stroke='url(#growthLine)' stroke-width='3' stroke-linejoin='round' stroke-linecap='round'/>",
        line_points.join(" ")
    );

    // Growth point markers
    for (i, point) in dataset.points.iter().enumerate() {
        let _ = writeln!(
            svg,
            "  <circle cx='{:.1}' cy='{:.1}' r='4' fill='url(#growthLine)' stroke='{}' stroke-width='1.75'/>",
            layout.x_for_index(i, n),
            layout.y_growth(point.growth),
            BACKGROUND
        );
    }

    // Baseline
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' x2='{:.1}' y1='{:.1}' y2='{:.1}' stroke='{}' stroke-opacity='0.9'/>",
        layout.margin_left,
        layout.width - layout.margin_right,
        layout.baseline_y(),
        layout.baseline_y(),
        GRID_STROKE
    );

    // Legend
    let legend_y = layout.height - 8.0;
    let _ = writeln!(
        svg,
        "  <rect x='{:.1}' y='{:.1}' width='10' height='10' rx='2' fill='{}'/>",
        layout.margin_left,
        legend_y - 9.0,
        BAR_FILL
    );
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{legend_y:.1}' fill='{}' font-size='11'>Income</text>",
        layout.margin_left + 16.0,
        TEXT_FILL
    );
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' x2='{:.1}' y1='{:.1}' y2='{:.1}' stroke='{}' stroke-width='3' stroke-linecap='round'/>",
        layout.margin_left + 80.0,
        layout.margin_left + 92.0,
        legend_y - 4.0,
        legend_y - 4.0,
        LINE_START
    );
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{legend_y:.1}' fill='{}' font-size='11'>MoM Growth</text>",
        layout.margin_left + 98.0,
        TEXT_FILL
    );

    let _ = writeln!(svg, "</svg>");
    svg
}

/// Income tick label, e.g. "$2k" for 2000 or "$750" below a thousand
fn format_income_tick(value: f64) -> String {
    if value >= 1000.0 {
        let k = (value / 1000.0 * 10.0).round() / 10.0;
        if k.fract() == 0.0 {
            format!("${:.0}k", k)
        } else {
            format!("${:.1}k", k)
        }
    } else {
        format!("${:.0}", value)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{dataset_for, RangeKey};

    #[test]
    fn test_svg_has_fixed_viewbox() {
        let svg = render_svg(
            &ChartLayout::default(),
            &dataset_for(RangeKey::ThreeMonths),
            "Income Trend",
        );
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox='0 0 800 320'"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_renders_one_bar_and_marker_per_point() {
        let dataset = dataset_for(RangeKey::OneYear);
        let svg = render_svg(&ChartLayout::default(), &dataset, "Income Trend");
        let bars = svg.matches("rx='6'").count();
        let markers = svg.matches("<circle").count();
        assert_eq!(bars, dataset.points.len());
        assert_eq!(markers, dataset.points.len());
    }

    #[test]
    fn test_svg_labels_every_month() {
        let dataset = dataset_for(RangeKey::Custom);
        let svg = render_svg(&ChartLayout::default(), &dataset, "Income Trend");
        for point in &dataset.points {
            assert!(svg.contains(&format!(">{}</text>", point.month)));
        }
    }

    #[test]
    fn test_svg_escapes_title() {
        let svg = render_svg(
            &ChartLayout::default(),
            &dataset_for(RangeKey::Custom),
            "Kite & Co. <chart>",
        );
        assert!(svg.contains("Kite &amp; Co. &lt;chart&gt;"));
    }

    #[test]
    fn test_income_tick_formatting() {
        assert_eq!(format_income_tick(0.0), "$0");
        assert_eq!(format_income_tick(2000.0), "$2k");
        assert_eq!(format_income_tick(9000.0), "$9k");
        assert_eq!(format_income_tick(2250.0), "$2.3k");
        assert_eq!(format_income_tick(750.0), "$750");
    }
}
