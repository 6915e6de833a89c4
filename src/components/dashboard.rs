//! Dashboard component - the main screen
//!
//! Owns the presentation state that belongs to the panels themselves (list
//! cursor, collapse flag) and converts main-screen key events into Actions.
//! All cross-panel state stays in `DashboardState`, passed in read-only at
//! draw time.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_dashboard_layout, draw_banners, draw_chart_panel, draw_creation_panel,
    draw_earnings_panel, draw_invoice_panel,
};
use crate::model::{Banner, DashboardState, InvoiceItem, RangeKey};
use crate::theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

/// Read-only state handed to the dashboard at draw time
pub struct DashboardRenderContext<'a> {
    pub state: &'a DashboardState,
    pub banners: &'a [Banner],
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Main dashboard screen component
pub struct DashboardComponent {
    /// Invoice list cursor
    pub list_state: ListState,

    /// Whether the invoice list is expanded
    pub list_open: bool,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            list_open: true,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Invoice list navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, invoice_count: usize) {
        if invoice_count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < invoice_count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, invoice_count: usize) {
        if invoice_count == 0 {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, invoice_count: usize) {
        if invoice_count > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, invoice_count: usize) {
        if invoice_count > 0 {
            self.list_state.select(Some(invoice_count - 1));
        }
    }

    pub fn toggle_open(&mut self) {
        self.list_open = !self.list_open;
    }

    /// Id of the invoice under the cursor
    pub fn highlighted_invoice_id(&self, invoices: &[InvoiceItem]) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|i| invoices.get(i))
            .map(|invoice| invoice.id.clone())
    }
}

impl Component for DashboardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }

            // Range selection
            KeyCode::Char('1') => Some(Action::SelectRange(RangeKey::OneMonth)),
            KeyCode::Char('3') => Some(Action::SelectRange(RangeKey::ThreeMonths)),
            KeyCode::Char('y') => Some(Action::SelectRange(RangeKey::OneYear)),
            KeyCode::Char('c') => Some(Action::SelectRange(RangeKey::Custom)),

            // Invoice list
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextInvoice),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevInvoice),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstInvoice),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastInvoice),
            KeyCode::Enter => Some(Action::ActivateInvoice),
            KeyCode::Char(' ') => Some(Action::ToggleInvoiceList),

            // Flows
            KeyCode::Char('n') => Some(Action::CreateInvoice),
            KeyCode::Char('u') => Some(Action::UploadInvoice),
            KeyCode::Char('x') => Some(Action::ExportChart),

            // Overlays
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs dashboard state; use draw_dashboard instead.
        Ok(())
    }
}

/// Draw the full dashboard screen
pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut DashboardComponent,
    ctx: &DashboardRenderContext,
) -> Result<()> {
    let has_status = ctx.status_message.is_some() || ctx.error.is_some();
    let layout = calculate_dashboard_layout(
        area,
        ctx.banners.len(),
        has_status,
        dashboard.list_open,
        ctx.state.invoices.len(),
    );

    if let Some(banner_area) = layout.banners {
        draw_banners(frame, banner_area, ctx.banners);
    }

    draw_creation_panel(frame, layout.creation);
    draw_earnings_panel(
        frame,
        layout.earnings,
        ctx.state.selected_range,
        &ctx.state.earnings,
    );
    draw_chart_panel(
        frame,
        layout.chart,
        ctx.state.selected_range,
        &ctx.state.dataset,
    );
    draw_invoice_panel(
        frame,
        layout.invoices,
        &mut dashboard.list_state,
        dashboard.list_open,
        &ctx.state.invoices,
    );

    if let Some(status_area) = layout.status {
        let line = if let Some(error) = ctx.error {
            Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                format!(" {}", ctx.status_message.unwrap_or_default()),
                Style::default().fg(theme::DIM),
            ))
        };
        frame.render_widget(Paragraph::new(line), status_area);
    }

    draw_help_bar(frame, layout.help);
    Ok(())
}

fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };

    let help = Paragraph::new(Line::from(vec![
        key(" 1/3/y/c "),
        Span::raw("range  "),
        key(" j/k "),
        Span::raw("move  "),
        key(" Enter "),
        Span::raw("open invoice  "),
        key(" Space "),
        Span::raw("collapse  "),
        key(" n "),
        Span::raw("new  "),
        key(" u "),
        Span::raw("upload  "),
        key(" x "),
        Span::raw("export  "),
        key(" ? "),
        Span::raw("help  "),
        key(" q "),
        Span::raw("quit"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER)),
    );

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_invoices;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut dashboard = DashboardComponent::new();
        let count = 3;

        dashboard.previous(count);
        assert_eq!(dashboard.list_state.selected(), Some(0));

        dashboard.select_last(count);
        dashboard.next(count);
        assert_eq!(dashboard.list_state.selected(), Some(2));
    }

    #[test]
    fn test_navigation_ignores_empty_list() {
        let mut dashboard = DashboardComponent::new();
        dashboard.next(0);
        dashboard.previous(0);
        assert_eq!(dashboard.list_state.selected(), Some(0));
    }

    #[test]
    fn test_highlighted_invoice_id_follows_cursor() {
        let mut dashboard = DashboardComponent::new();
        let invoices = sample_invoices();

        assert_eq!(
            dashboard.highlighted_invoice_id(&invoices).as_deref(),
            Some("INV-1042")
        );

        dashboard.next(invoices.len());
        assert_eq!(
            dashboard.highlighted_invoice_id(&invoices).as_deref(),
            Some("INV-1041")
        );
    }

    #[test]
    fn test_range_keys_map_to_select_actions() {
        let mut dashboard = DashboardComponent::new();
        assert_eq!(
            dashboard.handle_key_event(key(KeyCode::Char('y'))).unwrap(),
            Some(Action::SelectRange(RangeKey::OneYear))
        );
        assert_eq!(
            dashboard.handle_key_event(key(KeyCode::Char('c'))).unwrap(),
            Some(Action::SelectRange(RangeKey::Custom))
        );
    }

    #[test]
    fn test_enter_activates_invoice() {
        let mut dashboard = DashboardComponent::new();
        assert_eq!(
            dashboard.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ActivateInvoice)
        );
    }

    #[test]
    fn test_toggle_open() {
        let mut dashboard = DashboardComponent::new();
        assert!(dashboard.list_open);
        dashboard.toggle_open();
        assert!(!dashboard.list_open);
    }
}
