//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod banners;
pub mod chart;
pub mod creation;
pub mod dashboard;
pub mod earnings;
pub mod help_dialog;
pub mod invoices;
pub mod layout;
pub mod quit_dialog;

pub use banners::draw_banners;
pub use chart::draw_chart_panel;
pub use creation::draw_creation_panel;
pub use dashboard::{draw_dashboard, DashboardComponent, DashboardRenderContext};
pub use earnings::draw_earnings_panel;
pub use help_dialog::HelpDialog;
pub use invoices::draw_invoice_panel;
pub use layout::{calculate_dashboard_layout, centered_popup};
pub use quit_dialog::QuitDialog;
