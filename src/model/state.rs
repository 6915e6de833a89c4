//! Dashboard state - the single owner of all cross-panel state
//!
//! Panels render read-only views of this struct and emit actions upward;
//! every transition happens here, synchronously, inside the input handler.

use super::earnings::EarningsSummary;
use super::invoice::{sample_invoices, InvoiceItem};
use super::range::{dataset_for, RangeDataset, RangeKey};

/// All cross-panel dashboard state
pub struct DashboardState {
    /// Currently selected analytics range
    pub selected_range: RangeKey,

    /// Chart dataset for the selected range
    pub dataset: RangeDataset,

    /// Id of the activated invoice, if any
    pub selected_invoice_id: Option<String>,

    /// Whether upload mode is active
    pub upload_mode: bool,

    /// Whether the custom-range banner is showing
    pub custom_range_banner: bool,

    /// The invoice list
    pub invoices: Vec<InvoiceItem>,

    /// Earnings summary figures
    pub earnings: EarningsSummary,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Create the initial state: 3-month range, nothing selected
    pub fn new() -> Self {
        let selected_range = RangeKey::ThreeMonths;
        Self {
            selected_range,
            dataset: dataset_for(selected_range),
            selected_invoice_id: None,
            upload_mode: false,
            custom_range_banner: false,
            invoices: sample_invoices(),
            earnings: EarningsSummary::default(),
        }
    }

    /// Select an analytics range and recompute the chart dataset
    pub fn select_range(&mut self, range: RangeKey) {
        self.selected_range = range;
        self.dataset = dataset_for(range);
        self.custom_range_banner = range == RangeKey::Custom;
    }

    /// Start the create-invoice flow: clears selection and upload mode
    pub fn create_invoice(&mut self) {
        self.selected_invoice_id = None;
        self.upload_mode = false;
    }

    /// Start the upload flow
    pub fn upload_invoice(&mut self) {
        self.upload_mode = true;
    }

    /// Activate an invoice row
    ///
    /// Also snaps the analytics range back to 3 months whenever another range
    /// is active. The coupling is inherited behavior, kept deliberately; see
    /// DESIGN.md before relying on it as a product rule.
    pub fn activate_invoice(&mut self, id: &str) {
        self.selected_invoice_id = Some(id.to_string());
        if self.selected_range != RangeKey::ThreeMonths {
            self.select_range(RangeKey::ThreeMonths);
        }
    }

    /// Look up an invoice by id
    pub fn invoice_by_id(&self, id: &str) -> Option<&InvoiceItem> {
        self.invoices.iter().find(|i| i.id == id)
    }
}
