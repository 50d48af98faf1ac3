//! Activity chart models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-calendar-day totals of sent and received value
///
/// Derived on demand from the transaction history, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// Local-time calendar day the bucket covers
    pub date_key: NaiveDate,
    pub total_sent: f64,
    pub total_received: f64,
}

impl DailyBucket {
    /// An empty bucket for the given day (used for chart placeholders)
    pub fn empty(date_key: NaiveDate) -> Self {
        DailyBucket {
            date_key,
            total_sent: 0.0,
            total_received: 0.0,
        }
    }
}
