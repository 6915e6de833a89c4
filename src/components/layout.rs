//! Layout calculations for the dashboard

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard screen layout areas, top to bottom
pub struct DashboardLayout {
    /// Banner strip, present only when at least one banner is active
    pub banners: Option<Rect>,
    pub creation: Rect,
    pub earnings: Rect,
    pub chart: Rect,
    pub invoices: Rect,
    /// Status line, present only when there is a message to show
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard layout
///
/// The chart takes whatever is left after the fixed-height panels. The
/// invoice list grows with its row count when open and collapses to its
/// header row otherwise.
pub fn calculate_dashboard_layout(
    area: Rect,
    banner_count: usize,
    has_status: bool,
    list_open: bool,
    invoice_count: usize,
) -> DashboardLayout {
    let invoices_height = if list_open {
        // Rows plus the surrounding border, capped so the chart keeps room
        (invoice_count as u16 + 2).min(12)
    } else {
        3
    };

    let mut constraints = Vec::new();
    if banner_count > 0 {
        constraints.push(Constraint::Length(banner_count as u16));
    }
    constraints.push(Constraint::Length(4));
    constraints.push(Constraint::Length(6));
    constraints.push(Constraint::Min(10));
    constraints.push(Constraint::Length(invoices_height));
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    let banners = if banner_count > 0 {
        idx += 1;
        Some(chunks[0])
    } else {
        None
    };
    let creation = chunks[idx];
    let earnings = chunks[idx + 1];
    let chart = chunks[idx + 2];
    let invoices = chunks[idx + 3];
    let status = if has_status {
        Some(chunks[idx + 4])
    } else {
        None
    };
    let help = chunks[chunks.len() - 1];

    DashboardLayout {
        banners,
        creation,
        earnings,
        chart,
        invoices,
        status,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_layout_without_banners_or_status() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_dashboard_layout(area, 0, false, true, 8);
        assert!(layout.banners.is_none());
        assert!(layout.status.is_none());
        assert_eq!(layout.invoices.height, 10);
        assert_eq!(layout.help.height, 3);
    }

    #[test]
    fn test_layout_reserves_banner_rows() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_dashboard_layout(area, 3, true, false, 8);
        assert_eq!(layout.banners.map(|r| r.height), Some(3));
        assert_eq!(layout.status.map(|r| r.height), Some(1));
        // Collapsed list keeps only its header
        assert_eq!(layout.invoices.height, 3);
    }
}
