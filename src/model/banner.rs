//! Status banners derived from dashboard state
//!
//! Banners are not stored anywhere; they are recomputed from state on every
//! draw, so they can never drift out of sync with the flags that produce them.

use super::state::DashboardState;

/// A banner variant active for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// An invoice is selected; carries its id
    SelectedInvoice(String),
    /// Upload mode is active, waiting on a file
    UploadMode,
    /// A custom analytics range is applied
    CustomRange,
}

impl Banner {
    pub fn message(&self) -> String {
        match self {
            Banner::SelectedInvoice(id) => format!("Selected invoice: {}", id),
            Banner::UploadMode => {
                "Upload mode active - choose a file to import an existing invoice".to_string()
            }
            Banner::CustomRange => {
                "Custom range applied to analytics. Adjust as needed.".to_string()
            }
        }
    }
}

/// Derive the ordered list of active banners from state
pub fn active_banners(state: &DashboardState) -> Vec<Banner> {
    let mut banners = Vec::new();
    if let Some(id) = &state.selected_invoice_id {
        banners.push(Banner::SelectedInvoice(id.clone()));
    }
    if state.upload_mode {
        banners.push(Banner::UploadMode);
    }
    if state.custom_range_banner {
        banners.push(Banner::CustomRange);
    }
    banners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::range::RangeKey;

    #[test]
    fn test_no_banners_in_initial_state() {
        let state = DashboardState::new();
        assert!(active_banners(&state).is_empty());
    }

    #[test]
    fn test_banner_order_is_selection_upload_custom() {
        let mut state = DashboardState::new();
        state.select_range(RangeKey::Custom);
        state.upload_invoice();
        state.activate_invoice("INV-1040");

        // Activating an invoice resets the range to 3 months, so re-apply
        // the custom range to get all three banners at once.
        state.select_range(RangeKey::Custom);

        let banners = active_banners(&state);
        assert_eq!(
            banners,
            vec![
                Banner::SelectedInvoice("INV-1040".to_string()),
                Banner::UploadMode,
                Banner::CustomRange,
            ]
        );
    }

    #[test]
    fn test_banner_messages_name_the_invoice() {
        let banner = Banner::SelectedInvoice("INV-1035".to_string());
        assert!(banner.message().contains("INV-1035"));
    }
}
