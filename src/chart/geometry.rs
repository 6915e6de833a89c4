//! Chart coordinate mapping
//!
//! Pure geometry over a fixed logical canvas: data-point indices and values
//! map to drawing coordinates in SVG space (y grows downward). Both the
//! terminal canvas and the SVG exporter render from these coordinates, so the
//! two surfaces cannot disagree about layout.

/// Logical canvas size and margins for the income chart
///
/// All coordinates produced by the mapping functions fall inside the
/// `width x height` rectangle for in-range inputs; out-of-range values are
/// clamped, never extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 320.0,
            margin_top: 20.0,
            margin_right: 48.0,
            margin_bottom: 44.0,
            margin_left: 48.0,
        }
    }
}

/// Widest a bar may ever get, in canvas units
const MAX_BAR_WIDTH: f64 = 36.0;

/// Share of a point's slot a bar may occupy
const BAR_SLOT_SHARE: f64 = 0.56;

impl ChartLayout {
    /// Width of the plotting rectangle
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height of the plotting rectangle
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Y of the plot baseline (the zero line)
    pub fn baseline_y(&self) -> f64 {
        self.margin_top + self.inner_height()
    }

    /// Width of one point's slot when `n` points share the inner width
    pub fn slot_width(&self, n: usize) -> f64 {
        self.inner_width() / n.max(1) as f64
    }

    /// X coordinate for point `i` of `n`: centered in its slot
    pub fn x_for_index(&self, i: usize, n: usize) -> f64 {
        let step = self.slot_width(n);
        self.margin_left + step * i as f64 + step / 2.0
    }

    /// Y coordinate for an income value on the left axis
    ///
    /// Linear from `[0, max_income]` to `[baseline, top]`; values above
    /// `max_income` clamp so no bar escapes the plot area.
    pub fn y_income(&self, value: f64, max_income: f64) -> f64 {
        let clamped = value.min(max_income).max(0.0);
        self.margin_top + self.inner_height() - (clamped / max_income) * self.inner_height()
    }

    /// Y coordinate for a growth percentage on the right axis
    ///
    /// Linear from `[0, 100]` to `[baseline, top]`, input clamped to [0, 100].
    pub fn y_growth(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, 100.0);
        self.margin_top + self.inner_height() - (clamped / 100.0) * self.inner_height()
    }

    /// Bar width for `n` points: capped so bars never touch as `n` shrinks
    pub fn bar_width(&self, n: usize) -> f64 {
        MAX_BAR_WIDTH.min(self.slot_width(n) * BAR_SLOT_SHARE)
    }

    /// Five income grid ticks, evenly spaced from 0 to `max_income`
    pub fn income_ticks(&self, max_income: f64) -> Vec<f64> {
        (0..=4).map(|i| max_income * i as f64 / 4.0).collect()
    }

    /// Growth grid ticks: 0, 25, 50, 75, 100
    pub fn growth_ticks(&self) -> Vec<f64> {
        vec![0.0, 25.0, 50.0, 75.0, 100.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_canvas_dimensions() {
        let layout = ChartLayout::default();
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 320.0);
        assert_eq!(layout.inner_width(), 704.0);
        assert_eq!(layout.inner_height(), 256.0);
    }

    #[test]
    fn test_x_centers_points_in_slots() {
        let layout = ChartLayout::default();
        let n = 4;
        let step = layout.inner_width() / 4.0;
        for i in 0..n {
            let expected = layout.margin_left + step * i as f64 + step / 2.0;
            assert!((layout.x_for_index(i, n) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_x_handles_empty_dataset() {
        // n = 0 must not divide by zero
        let layout = ChartLayout::default();
        let x = layout.x_for_index(0, 0);
        assert!(x.is_finite());
    }

    #[test]
    fn test_y_income_stays_inside_plot_area() {
        let layout = ChartLayout::default();
        let max_income = 8000.0;
        for value in [0.0, 1.0, 4000.0, 7999.0, 8000.0] {
            let y = layout.y_income(value, max_income);
            assert!(y >= layout.margin_top - EPS);
            assert!(y <= layout.baseline_y() + EPS);
        }
    }

    #[test]
    fn test_y_income_clamps_above_max() {
        let layout = ChartLayout::default();
        let top = layout.y_income(8000.0, 8000.0);
        assert!((layout.y_income(20_000.0, 8000.0) - top).abs() < EPS);
        assert!((top - layout.margin_top).abs() < EPS);
    }

    #[test]
    fn test_y_income_zero_sits_on_baseline() {
        let layout = ChartLayout::default();
        assert!((layout.y_income(0.0, 8000.0) - layout.baseline_y()).abs() < EPS);
    }

    #[test]
    fn test_y_growth_clamps_out_of_range_inputs() {
        let layout = ChartLayout::default();
        let bottom = layout.y_growth(0.0);
        let top = layout.y_growth(100.0);
        assert!((layout.y_growth(-25.0) - bottom).abs() < EPS);
        assert!((layout.y_growth(350.0) - top).abs() < EPS);
        assert!((bottom - layout.baseline_y()).abs() < EPS);
        assert!((top - layout.margin_top).abs() < EPS);
    }

    #[test]
    fn test_bar_width_capped_at_maximum() {
        let layout = ChartLayout::default();
        // Two points leave huge slots; the cap must hold
        assert_eq!(layout.bar_width(2), 36.0);
    }

    #[test]
    fn test_bar_width_shrinks_with_point_count() {
        let layout = ChartLayout::default();
        let w12 = layout.bar_width(12);
        assert!(w12 < 36.0);
        assert!((w12 - layout.slot_width(12) * 0.56).abs() < EPS);
        // Bars never overlap: width stays below the slot width
        assert!(w12 < layout.slot_width(12));
    }

    #[test]
    fn test_income_ticks_span_axis() {
        let layout = ChartLayout::default();
        let ticks = layout.income_ticks(9000.0);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[4], 9000.0);
    }
}
