//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DashboardState` - the single owner of cross-panel state
//! - `RangeKey` / `RangeDataset` - analytics ranges and their canned data
//! - `InvoiceItem` / `InvoiceStatus` - the invoice list and badge styling
//! - `Banner` - status banners derived from state
//! - `ModalStack` - modal overlay management

pub mod banner;
pub mod earnings;
pub mod invoice;
pub mod modal;
pub mod range;
pub mod state;

// Re-export commonly used types
pub use banner::{active_banners, Banner};
pub use earnings::EarningsSummary;
pub use invoice::{sample_invoices, InvoiceItem, InvoiceStatus, StatusStyle};
pub use modal::{Modal, ModalStack};
pub use range::{dataset_for, DataPoint, RangeDataset, RangeKey};
pub use state::DashboardState;
