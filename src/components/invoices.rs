//! Collapsible invoice list panel

use crate::model::InvoiceItem;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const CLIENT_COL_WIDTH: usize = 18;
const AMOUNT_COL_WIDTH: usize = 10;

/// Draw the invoice list, or just its header when collapsed
pub fn draw_invoice_panel(
    frame: &mut Frame,
    area: Rect,
    list_state: &mut ListState,
    open: bool,
    invoices: &[InvoiceItem],
) {
    let title = format!(" Your Invoices ({} total) ", invoices.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(title)
        .title_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        );

    if !open {
        let hint = Paragraph::new(Line::from(Span::styled(
            "collapsed - press Space to expand",
            Style::default().fg(theme::DIM),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    if invoices.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No invoices yet.",
            Style::default().fg(theme::DIM),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = invoices.iter().map(invoice_row).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme::ROW_HIGHLIGHT))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render one invoice row with padded columns and a status badge
fn invoice_row(invoice: &InvoiceItem) -> ListItem<'static> {
    let notify = if invoice.notify { "●" } else { " " };
    let style = invoice.status.style();

    let badge_style = if style.outlined {
        Style::default().fg(style.fg)
    } else {
        Style::default().bg(style.bg).fg(style.fg)
    };
    let badge = if style.outlined {
        format!("[{}]", invoice.status.label())
    } else {
        format!(" {} ", invoice.status.label())
    };

    let spans = vec![
        Span::styled(format!("{} ", notify), Style::default().fg(theme::ACCENT)),
        Span::styled(
            pad_to_width(&invoice.client, CLIENT_COL_WIDTH),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", invoice.id), Style::default().fg(theme::DIM)),
        Span::styled(
            pad_to_width(&invoice.due_date, CLIENT_COL_WIDTH),
            Style::default().fg(theme::DIM),
        ),
        Span::raw(format!(
            "{:>width$}  ",
            invoice.amount,
            width = AMOUNT_COL_WIDTH
        )),
        Span::styled(badge, badge_style),
    ];

    ListItem::new(Line::from(spans))
}

/// Pad or truncate to a fixed display width, unicode-aware
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width > width {
        let mut truncated = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let ch_width = ch.to_string().width();
            if used + ch_width > width.saturating_sub(1) {
                break;
            }
            truncated.push(ch);
            used += ch_width;
        }
        format!("{}… ", truncated)
    } else {
        format!("{}{} ", text, " ".repeat(width - text_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_short_text() {
        let padded = pad_to_width("Nimbus", 10);
        assert_eq!(padded, "Nimbus     ");
        assert_eq!(padded.width(), 11);
    }

    #[test]
    fn test_truncate_long_text() {
        let padded = pad_to_width("A Very Long Client Name Indeed", 10);
        assert!(padded.width() <= 11);
        assert!(padded.contains('…'));
    }
}
