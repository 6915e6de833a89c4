//! Analytics time ranges and their canned datasets
//!
//! Each range maps to a fixed, chronologically ordered series of data points
//! plus an upper bound for the income axis. Selection is a total function:
//! unrecognized range keys fall back to the weekly dataset.

/// User-selectable analytics time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeKey {
    OneMonth,
    #[default]
    ThreeMonths,
    OneYear,
    Custom,
}

impl RangeKey {
    pub fn all() -> Vec<RangeKey> {
        vec![
            RangeKey::OneMonth,
            RangeKey::ThreeMonths,
            RangeKey::OneYear,
            RangeKey::Custom,
        ]
    }

    /// Short key used in config files and status messages
    pub fn key(&self) -> &'static str {
        match self {
            RangeKey::OneMonth => "1m",
            RangeKey::ThreeMonths => "3m",
            RangeKey::OneYear => "1y",
            RangeKey::Custom => "custom",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            RangeKey::OneMonth => "1 Month",
            RangeKey::ThreeMonths => "3 Months",
            RangeKey::OneYear => "1 Year",
            RangeKey::Custom => "Custom",
        }
    }

    /// Parse a range key string; anything unrecognized maps to `Custom`
    pub fn parse(key: &str) -> RangeKey {
        match key {
            "1m" => RangeKey::OneMonth,
            "3m" => RangeKey::ThreeMonths,
            "1y" => RangeKey::OneYear,
            _ => RangeKey::Custom,
        }
    }
}

/// One point on the income chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Period label shown on the X axis
    pub month: &'static str,
    /// Income in dollars, non-negative
    pub income: f64,
    /// Month-over-month growth percentage, 0-100
    pub growth: f64,
}

impl DataPoint {
    const fn new(month: &'static str, income: f64, growth: f64) -> Self {
        Self {
            month,
            income,
            growth,
        }
    }
}

/// A dataset for one range plus the income axis upper bound
///
/// Invariant: `max_income` is always >= the largest `income` in `points`.
/// Nothing enforces this at runtime; replacement datasets must preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDataset {
    pub points: Vec<DataPoint>,
    pub max_income: f64,
}

/// Return the dataset for a range
///
/// Deterministic and side-effect free: the same key always yields the same
/// points. `Custom` shares the weekly fallback dataset.
pub fn dataset_for(range: RangeKey) -> RangeDataset {
    match range {
        RangeKey::OneMonth => RangeDataset {
            points: vec![
                DataPoint::new("This", 6200.0, 64.0),
                DataPoint::new("Prev", 5400.0, 0.0),
            ],
            max_income: 8000.0,
        },
        RangeKey::ThreeMonths => RangeDataset {
            points: vec![
                DataPoint::new("Jul", 5200.0, 22.0),
                DataPoint::new("Aug", 6100.0, 38.0),
                DataPoint::new("Sep", 7600.0, 85.0),
            ],
            max_income: 8000.0,
        },
        RangeKey::OneYear => RangeDataset {
            points: vec![
                DataPoint::new("Jan", 3000.0, 20.0),
                DataPoint::new("Feb", 4200.0, 35.0),
                DataPoint::new("Mar", 3800.0, 28.0),
                DataPoint::new("Apr", 5200.0, 48.0),
                DataPoint::new("May", 6100.0, 62.0),
                DataPoint::new("Jun", 7600.0, 85.0),
                DataPoint::new("Jul", 6900.0, 72.0),
                DataPoint::new("Aug", 7200.0, 81.0),
                DataPoint::new("Sep", 7800.0, 90.0),
                DataPoint::new("Oct", 7400.0, 78.0),
                DataPoint::new("Nov", 7050.0, 70.0),
                DataPoint::new("Dec", 7950.0, 92.0),
            ],
            max_income: 9000.0,
        },
        RangeKey::Custom => RangeDataset {
            points: vec![
                DataPoint::new("W1", 1800.0, 15.0),
                DataPoint::new("W2", 2300.0, 28.0),
                DataPoint::new("W3", 2100.0, 22.0),
                DataPoint::new("W4", 2600.0, 36.0),
            ],
            max_income: 3000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_range_has_nonempty_dataset() {
        for range in RangeKey::all() {
            let dataset = dataset_for(range);
            assert!(
                !dataset.points.is_empty(),
                "range {:?} yielded no points",
                range
            );
        }
    }

    #[test]
    fn test_max_income_bounds_dataset() {
        for range in RangeKey::all() {
            let dataset = dataset_for(range);
            let highest = dataset
                .points
                .iter()
                .map(|p| p.income)
                .fold(f64::MIN, f64::max);
            assert!(
                dataset.max_income >= highest,
                "range {:?}: max_income {} < highest income {}",
                range,
                dataset.max_income,
                highest
            );
        }
    }

    #[test]
    fn test_one_year_dataset() {
        let dataset = dataset_for(RangeKey::OneYear);
        assert_eq!(dataset.points.len(), 12);
        assert_eq!(dataset.max_income, 9000.0);
        assert_eq!(dataset.points.first().unwrap().month, "Jan");
        assert_eq!(dataset.points.last().unwrap().month, "Dec");
    }

    #[test]
    fn test_custom_dataset_is_weekly() {
        let dataset = dataset_for(RangeKey::Custom);
        assert_eq!(dataset.points.len(), 4);
        assert_eq!(dataset.max_income, 3000.0);
        let labels: Vec<&str> = dataset.points.iter().map(|p| p.month).collect();
        assert_eq!(labels, vec!["W1", "W2", "W3", "W4"]);
    }

    #[test]
    fn test_selection_is_deterministic() {
        assert_eq!(
            dataset_for(RangeKey::ThreeMonths),
            dataset_for(RangeKey::ThreeMonths)
        );
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(RangeKey::parse("1m"), RangeKey::OneMonth);
        assert_eq!(RangeKey::parse("3m"), RangeKey::ThreeMonths);
        assert_eq!(RangeKey::parse("1y"), RangeKey::OneYear);
        assert_eq!(RangeKey::parse("custom"), RangeKey::Custom);
    }

    #[test]
    fn test_parse_unknown_key_falls_back_to_custom() {
        assert_eq!(RangeKey::parse("6m"), RangeKey::Custom);
        assert_eq!(RangeKey::parse(""), RangeKey::Custom);
    }
}
