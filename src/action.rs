//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::RangeKey;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Analytics Range
    // ─────────────────────────────────────────────────────────────────────────
    /// Select an analytics time range
    SelectRange(RangeKey),

    // ─────────────────────────────────────────────────────────────────────────
    // Invoice List
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next invoice row
    NextInvoice,
    /// Move to the previous invoice row
    PrevInvoice,
    /// Jump to the first invoice row
    FirstInvoice,
    /// Jump to the last invoice row
    LastInvoice,
    /// Activate the highlighted invoice row
    ActivateInvoice,
    /// Collapse or expand the invoice list
    ToggleInvoiceList,

    // ─────────────────────────────────────────────────────────────────────────
    // Invoice Flows
    // ─────────────────────────────────────────────────────────────────────────
    /// Start the create-invoice flow
    CreateInvoice,
    /// Start the upload-invoice flow
    UploadInvoice,

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Write the current chart to an SVG file
    ExportChart,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Scroll the current modal up one line
    ModalUp,
    /// Scroll the current modal down one line
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SelectRange(range) => write!(f, "SelectRange({})", range.key()),
            Action::NextInvoice => write!(f, "NextInvoice"),
            Action::PrevInvoice => write!(f, "PrevInvoice"),
            Action::FirstInvoice => write!(f, "FirstInvoice"),
            Action::LastInvoice => write!(f, "LastInvoice"),
            Action::ActivateInvoice => write!(f, "ActivateInvoice"),
            Action::ToggleInvoiceList => write!(f, "ToggleInvoiceList"),
            Action::CreateInvoice => write!(f, "CreateInvoice"),
            Action::UploadInvoice => write!(f, "UploadInvoice"),
            Action::ExportChart => write!(f, "ExportChart"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
