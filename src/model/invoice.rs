//! Invoice items and status badge styling

use ratatui::style::Color;

/// Invoice lifecycle status
///
/// Closed set of eight labels. Parsing an unknown label falls back to
/// `Unpaid`, matching the default badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    UpdateStatus,
    #[default]
    Unpaid,
    Disputed,
    Paid,
    PartiallyPaid,
    Overdue,
    Awaited,
    Draft,
}

/// Badge display style for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub bg: Color,
    pub fg: Color,
    /// Rendered with a border instead of a filled pill
    pub outlined: bool,
}

impl InvoiceStatus {
    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::UpdateStatus,
            InvoiceStatus::Unpaid,
            InvoiceStatus::Disputed,
            InvoiceStatus::Paid,
            InvoiceStatus::PartiallyPaid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Awaited,
            InvoiceStatus::Draft,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::UpdateStatus => "Update Status",
            InvoiceStatus::Unpaid => "Unpaid",
            InvoiceStatus::Disputed => "Disputed",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::PartiallyPaid => "Partially Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Awaited => "Awaited",
            InvoiceStatus::Draft => "Draft",
        }
    }

    /// Parse a status label; unknown labels map to `Unpaid`
    pub fn parse(label: &str) -> InvoiceStatus {
        match label {
            "Update Status" => InvoiceStatus::UpdateStatus,
            "Unpaid" => InvoiceStatus::Unpaid,
            "Disputed" => InvoiceStatus::Disputed,
            "Paid" => InvoiceStatus::Paid,
            "Partially Paid" => InvoiceStatus::PartiallyPaid,
            "Overdue" => InvoiceStatus::Overdue,
            "Awaited" => InvoiceStatus::Awaited,
            "Draft" => InvoiceStatus::Draft,
            _ => InvoiceStatus::Unpaid,
        }
    }

    /// Badge style for this status
    ///
    /// Total over the enum. Only `UpdateStatus` is outlined.
    pub fn style(&self) -> StatusStyle {
        match self {
            InvoiceStatus::UpdateStatus => StatusStyle {
                bg: Color::Indexed(54),
                fg: Color::Indexed(183),
                outlined: true,
            },
            InvoiceStatus::Paid => StatusStyle {
                bg: Color::Indexed(22),
                fg: Color::Indexed(120),
                outlined: false,
            },
            InvoiceStatus::Overdue => StatusStyle {
                bg: Color::Indexed(52),
                fg: Color::Indexed(210),
                outlined: false,
            },
            InvoiceStatus::Disputed => StatusStyle {
                bg: Color::Indexed(94),
                fg: Color::Indexed(222),
                outlined: false,
            },
            InvoiceStatus::PartiallyPaid => StatusStyle {
                bg: Color::Indexed(23),
                fg: Color::Indexed(116),
                outlined: false,
            },
            InvoiceStatus::Awaited => StatusStyle {
                bg: Color::Indexed(17),
                fg: Color::Indexed(111),
                outlined: false,
            },
            InvoiceStatus::Draft => StatusStyle {
                bg: Color::Indexed(236),
                fg: Color::Indexed(250),
                outlined: false,
            },
            InvoiceStatus::Unpaid => StatusStyle {
                bg: Color::Indexed(58),
                fg: Color::Indexed(228),
                outlined: false,
            },
        }
    }
}

/// A single invoice row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceItem {
    /// Unique identifier, e.g. "INV-1042"
    pub id: String,
    pub client: String,
    /// Pre-formatted currency string
    pub amount: String,
    /// Display string for the due/paid state
    pub due_date: String,
    pub status: InvoiceStatus,
    /// Whether the row carries a new-activity dot
    pub notify: bool,
}

impl InvoiceItem {
    fn new(id: &str, client: &str, amount: &str, due_date: &str, status: InvoiceStatus) -> Self {
        Self {
            id: id.to_string(),
            client: client.to_string(),
            amount: amount.to_string(),
            due_date: due_date.to_string(),
            status,
            notify: false,
        }
    }

    fn with_notify(mut self) -> Self {
        self.notify = true;
        self
    }
}

/// The canned invoice list shown on the dashboard
pub fn sample_invoices() -> Vec<InvoiceItem> {
    vec![
        InvoiceItem::new(
            "INV-1042",
            "Aether Labs LLC",
            "$2,340.00",
            "Due Sep 22, 2025",
            InvoiceStatus::UpdateStatus,
        )
        .with_notify(),
        InvoiceItem::new(
            "INV-1041",
            "Nimbus Studio",
            "$1,120.00",
            "Due Sep 18, 2025",
            InvoiceStatus::Unpaid,
        )
        .with_notify(),
        InvoiceItem::new(
            "INV-1040",
            "Aurora Ventures",
            "$5,400.00",
            "Paid Sep 10, 2025",
            InvoiceStatus::Paid,
        ),
        InvoiceItem::new(
            "INV-1039",
            "Helix Dynamics",
            "$3,780.00",
            "Due Aug 30, 2025",
            InvoiceStatus::Overdue,
        )
        .with_notify(),
        InvoiceItem::new(
            "INV-1038",
            "Mono Limited",
            "$980.00",
            "Pending review",
            InvoiceStatus::Disputed,
        )
        .with_notify(),
        InvoiceItem::new(
            "INV-1037",
            "Kite & Co.",
            "$2,050.00",
            "Awaiting payment",
            InvoiceStatus::Awaited,
        ),
        InvoiceItem::new(
            "INV-1036",
            "PixelStack",
            "$1,400.00",
            "Partial received",
            InvoiceStatus::PartiallyPaid,
        ),
        InvoiceItem::new(
            "INV-1035",
            "Nova Supply",
            "$620.00",
            "Unsent draft",
            InvoiceStatus::Draft,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_is_total_over_statuses() {
        for status in InvoiceStatus::all() {
            // Must not panic, and colors must differ per role
            let style = status.style();
            assert_ne!(style.bg, style.fg, "status {:?} has bg == fg", status);
        }
    }

    #[test]
    fn test_only_update_status_is_outlined() {
        for status in InvoiceStatus::all() {
            let expected = status == InvoiceStatus::UpdateStatus;
            assert_eq!(status.style().outlined, expected);
        }
    }

    #[test]
    fn test_parse_round_trips_labels() {
        for status in InvoiceStatus::all() {
            assert_eq!(InvoiceStatus::parse(status.label()), status);
        }
    }

    #[test]
    fn test_parse_unknown_label_defaults_to_unpaid() {
        assert_eq!(InvoiceStatus::parse("Refunded"), InvoiceStatus::Unpaid);
        assert_eq!(InvoiceStatus::parse(""), InvoiceStatus::Unpaid);
    }

    #[test]
    fn test_sample_invoices_have_unique_ids() {
        let invoices = sample_invoices();
        assert_eq!(invoices.len(), 8);
        let mut ids: Vec<&str> = invoices.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), invoices.len());
    }

    #[test]
    fn test_sample_invoices_cover_every_status() {
        let invoices = sample_invoices();
        for status in InvoiceStatus::all() {
            assert!(
                invoices.iter().any(|i| i.status == status),
                "no sample invoice with status {:?}",
                status
            );
        }
    }
}
