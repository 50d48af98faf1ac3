//! Daily activity aggregation
//!
//! Turns the transaction history into the per-day sent/received series
//! the activity chart draws. Pure data shaping: no side effects, and the
//! same records produce the same buckets in any input order.

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::warn;

use crate::models::{DailyBucket, Direction, TransactionRecord};

/// Local-time calendar day a timestamp falls on
fn local_day(created_at: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(created_at)
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Group records into per-day sent/received totals, ascending by day
///
/// Records are sorted by `created_at` ascending first, so bucket emission
/// order is deterministic regardless of how the input was ordered. Empty
/// input yields an empty series; placeholder buckets for display are the
/// caller's concern.
pub fn aggregate(records: &[TransactionRecord]) -> Vec<DailyBucket> {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.created_at);

    let mut buckets: Vec<DailyBucket> = Vec::new();
    for record in sorted {
        let day = match local_day(record.created_at) {
            Some(day) => day,
            None => {
                warn!(id = %record.id, created_at = record.created_at,
                    "timestamp out of range, skipping record");
                continue;
            }
        };

        // Timestamps ascend, so days ascend too: the record either lands
        // in the last bucket or opens a new one.
        match buckets.last_mut() {
            Some(bucket) if bucket.date_key == day => match record.direction {
                Direction::Sent => bucket.total_sent += record.amount,
                Direction::Received => bucket.total_received += record.amount,
            },
            _ => {
                let mut bucket = DailyBucket::empty(day);
                match record.direction {
                    Direction::Sent => bucket.total_sent += record.amount,
                    Direction::Received => bucket.total_received += record.amount,
                }
                buckets.push(bucket);
            }
        }
    }
    buckets
}
