//! Surge values and the percentage-change rule.

use chrono::{DateTime, Utc};

use super::id::Symbol;

/// A closed interval whose price rose at least the configured threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Surge {
    pub symbol: Symbol,
    pub open: f64,
    pub close: f64,
    /// `(close - open) / open * 100`.
    pub change_percent: f64,
    /// Event time of the closing kline, epoch milliseconds.
    pub event_time: i64,
}

/// Last surge stored for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SurgeRecord {
    pub open: f64,
    pub close: f64,
    pub change_percent: f64,
    pub detected_at: DateTime<Utc>,
}

impl From<&Surge> for SurgeRecord {
    fn from(surge: &Surge) -> Self {
        Self {
            open: surge.open,
            close: surge.close,
            change_percent: surge.change_percent,
            detected_at: Utc::now(),
        }
    }
}

/// Percentage change from `open` to `close`.
///
/// Returns `None` when the change is undefined: a zero, negative or
/// non-finite open price, or a non-finite close.
#[must_use]
pub fn percent_change(open: f64, close: f64) -> Option<f64> {
    if !open.is_finite() || !close.is_finite() || open <= 0.0 {
        return None;
    }
    Some((close - open) / open * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_basic() {
        let pct = percent_change(100.0, 112.0).unwrap();
        assert!((pct - 12.0).abs() < 1e-9);

        let pct = percent_change(200.0, 150.0).unwrap();
        assert!((pct + 25.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_undefined_for_zero_open() {
        assert_eq!(percent_change(0.0, 5.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
    }

    #[test]
    fn percent_change_undefined_for_bad_inputs() {
        assert_eq!(percent_change(-1.0, 5.0), None);
        assert_eq!(percent_change(f64::NAN, 5.0), None);
        assert_eq!(percent_change(1.0, f64::INFINITY), None);
    }
}
