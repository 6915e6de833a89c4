//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that owns all cross-panel state and delegates event handling
//! and rendering to child components. Panels never mutate App state
//! directly; they emit Actions that are processed here.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_dashboard, DashboardComponent, DashboardRenderContext, HelpDialog, QuitDialog,
};
use crate::config::Config;
use crate::hooks::Hooks;
use crate::model::{active_banners, DashboardState, Modal, ModalStack, RangeKey};
use crate::services;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;

/// Main application state - coordinates between components
pub struct App {
    /// All cross-panel dashboard state
    pub state: DashboardState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Host integration hooks
    pub hooks: Hooks,

    /// User configuration
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub dashboard: DashboardComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App, applying the saved config if one exists
    pub fn new() -> App {
        Self::with_config(Config::load().unwrap_or_default())
    }

    pub fn with_config(config: Config) -> App {
        let mut state = DashboardState::new();
        let default_range = RangeKey::parse(&config.default_range);
        if default_range != state.selected_range {
            state.select_range(default_range);
        }

        let mut dashboard = DashboardComponent::new();
        dashboard.list_open = !config.list_collapsed;

        App {
            state,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            hooks: Hooks::new(),
            config,
            dashboard,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Persist UI preferences for the next session
    pub fn save_config(&mut self) -> Result<()> {
        self.config.default_range = self.state.selected_range.key().to_string();
        self.config.list_collapsed = !self.dashboard.list_open;
        self.config.save()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            }
        } else {
            self.dashboard.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Analytics Range
            // ─────────────────────────────────────────────────────────────────
            Action::SelectRange(range) => {
                self.state.select_range(range);
            }

            // ─────────────────────────────────────────────────────────────────
            // Invoice List (delegate navigation to DashboardComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextInvoice => self.dashboard.next(self.state.invoices.len()),
            Action::PrevInvoice => self.dashboard.previous(self.state.invoices.len()),
            Action::FirstInvoice => self.dashboard.select_first(self.state.invoices.len()),
            Action::LastInvoice => self.dashboard.select_last(self.state.invoices.len()),
            Action::ToggleInvoiceList => self.dashboard.toggle_open(),
            Action::ActivateInvoice => {
                // Collapsed rows are not visible, so they cannot be activated
                if self.dashboard.list_open {
                    if let Some(id) = self.dashboard.highlighted_invoice_id(&self.state.invoices) {
                        self.state.activate_invoice(&id);
                        if let Some(invoice) = self.state.invoice_by_id(&id) {
                            self.status_message =
                                Some(format!("Opening {} - {}", id, invoice.client));
                        }
                        self.hooks.fire_activate(&id);
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Invoice Flows (stubbed; real work belongs to the host hooks)
            // ─────────────────────────────────────────────────────────────────
            Action::CreateInvoice => {
                self.state.create_invoice();
                self.hooks.fire_create();
                self.status_message = Some("Ready to create a new invoice".to_string());
            }
            Action::UploadInvoice => {
                self.state.upload_invoice();
                self.hooks.fire_upload();
            }

            // ─────────────────────────────────────────────────────────────────
            // Export
            // ─────────────────────────────────────────────────────────────────
            Action::ExportChart => {
                match services::export_chart_svg(
                    Path::new(&self.config.export_dir),
                    self.state.selected_range,
                    &self.state.dataset,
                ) {
                    Ok(path) => {
                        self.error = None;
                        self.status_message = Some(format!("Chart exported to {}", path.display()));
                    }
                    Err(e) => {
                        self.error = Some(format!("Export failed: {:#}", e));
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                if matches!(self.modals.top(), Some(Modal::Help { .. })) {
                    self.help_dialog.update(action)?;
                    if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                        *scroll_offset = self.help_dialog.scroll_offset;
                    }
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let banners = active_banners(&self.state);
        let ctx = DashboardRenderContext {
            state: &self.state,
            banners: &banners,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };

        draw_dashboard(frame, area, &mut self.dashboard, &ctx)?;

        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app() -> App {
        App::with_config(Config::default())
    }

    #[test]
    fn test_select_range_action_updates_chart() {
        let mut app = app();
        app.update(Action::SelectRange(RangeKey::OneYear)).unwrap();
        assert_eq!(app.state.selected_range, RangeKey::OneYear);
        assert_eq!(app.state.dataset.points.len(), 12);
    }

    #[test]
    fn test_custom_range_raises_banner() {
        let mut app = app();
        app.update(Action::SelectRange(RangeKey::Custom)).unwrap();
        let banners = active_banners(&app.state);
        assert_eq!(banners.len(), 1);
    }

    #[test]
    fn test_activating_invoice_resets_range_to_three_months() {
        let mut app = app();
        app.update(Action::SelectRange(RangeKey::OneYear)).unwrap();
        app.update(Action::ActivateInvoice).unwrap();

        assert_eq!(
            app.state.selected_invoice_id.as_deref(),
            Some("INV-1042")
        );
        assert_eq!(app.state.selected_range, RangeKey::ThreeMonths);
        assert_eq!(app.state.dataset.points.len(), 3);
    }

    #[test]
    fn test_activation_is_ignored_while_collapsed() {
        let mut app = app();
        app.update(Action::ToggleInvoiceList).unwrap();
        app.update(Action::ActivateInvoice).unwrap();
        assert!(app.state.selected_invoice_id.is_none());
    }

    #[test]
    fn test_create_clears_selection_and_upload_mode() {
        let mut app = app();
        app.update(Action::UploadInvoice).unwrap();
        app.update(Action::ActivateInvoice).unwrap();

        app.update(Action::CreateInvoice).unwrap();
        assert!(app.state.selected_invoice_id.is_none());
        assert!(!app.state.upload_mode);
    }

    #[test]
    fn test_hooks_fire_on_flows() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut app = app();
        let sink = Rc::clone(&log);
        app.hooks.on_create = Some(Box::new(move || sink.borrow_mut().push("create".into())));
        let sink = Rc::clone(&log);
        app.hooks.on_upload = Some(Box::new(move || sink.borrow_mut().push("upload".into())));
        let sink = Rc::clone(&log);
        app.hooks.on_activate = Some(Box::new(move |id: &str| {
            sink.borrow_mut().push(format!("activate:{}", id))
        }));

        app.update(Action::UploadInvoice).unwrap();
        app.update(Action::ActivateInvoice).unwrap();
        app.update(Action::CreateInvoice).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "upload".to_string(),
                "activate:INV-1042".to_string(),
                "create".to_string()
            ]
        );
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        app.update(Action::OpenQuitDialog).unwrap();
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_config_default_range_applies_on_startup() {
        let config = Config {
            default_range: "1y".to_string(),
            ..Config::default()
        };
        let app = App::with_config(config);
        assert_eq!(app.state.selected_range, RangeKey::OneYear);
        assert_eq!(app.state.dataset.points.len(), 12);
    }

    #[test]
    fn test_config_collapsed_list_applies_on_startup() {
        let config = Config {
            list_collapsed: true,
            ..Config::default()
        };
        let app = App::with_config(config);
        assert!(!app.dashboard.list_open);
    }
}
