//! Earnings summary figures shown in the time/earnings panel

/// Pre-formatted earnings totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsSummary {
    pub total: String,
    pub awaited: String,
    pub overdue: String,
}

impl Default for EarningsSummary {
    fn default() -> Self {
        Self {
            total: "$1,25,000".to_string(),
            awaited: "$18,400".to_string(),
            overdue: "$6,250".to_string(),
        }
    }
}
