use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::models::{Direction, TransactionRecord, TxStatus};

/// Misuse of the store is a programmer error: correct integration never
/// appends a duplicate id or transitions a record twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(String),
    #[error("Transaction not found: {0}")]
    NotFound(String),
    #[error("Invalid status transition for {id}: already {current}")]
    InvalidTransition { id: String, current: TxStatus },
}

/// Append-only collection of transaction records, in insertion order
#[derive(Debug, Default)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
}

impl TransactionStore {
    pub fn new() -> Self {
        TransactionStore {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a new record
    pub fn append(&mut self, record: TransactionRecord) -> Result<(), StoreError> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        debug!(id = %record.id, amount = record.amount, "appending transaction record");
        self.records.push(record);
        Ok(())
    }

    /// Apply the single allowed status transition on a pending record
    ///
    /// Status is monotone: pending -> confirmed or failed, then frozen.
    pub fn update_status(&mut self, id: &str, new_status: TxStatus) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if record.status != TxStatus::Pending {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                current: record.status,
            });
        }

        debug!(id = %id, status = %new_status, "transaction status updated");
        record.status = new_status;
        Ok(())
    }

    /// History view: newest first, ties broken most-recently-appended first
    pub fn list_descending(&self) -> Vec<TransactionRecord> {
        let mut out = self.records.clone();
        // Stable ascending sort then reverse keeps equal timestamps in
        // most-recently-appended-first order.
        out.sort_by_key(|r| r.created_at);
        out.reverse();
        out
    }

    /// Aggregation feed: oldest first, ties in insertion order
    pub fn list_ascending(&self) -> Vec<TransactionRecord> {
        let mut out = self.records.clone();
        out.sort_by_key(|r| r.created_at);
        out
    }

    /// Seed the demo history the wallet starts with: one receive two days
    /// ago, one send one day ago, both confirmed.
    pub fn seed_demo(&mut self) -> Result<(), StoreError> {
        const DAY_MS: i64 = 86_400_000;
        let now = Utc::now().timestamp_millis();

        self.append(TransactionRecord::new(
            Direction::Received,
            0.5,
            "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
            now - 2 * DAY_MS,
            TxStatus::Confirmed,
        ))?;
        self.append(TransactionRecord::new(
            Direction::Sent,
            0.125,
            "0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            now - DAY_MS,
            TxStatus::Confirmed,
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: f64, created_at: i64) -> TransactionRecord {
        TransactionRecord::new(
            Direction::Sent,
            amount,
            "0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            created_at,
            TxStatus::Pending,
        )
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut store = TransactionStore::new();
        let rec = record(1.0, 1000);
        let dup = rec.clone();

        store.append(rec).expect("first append failed");
        assert_eq!(
            store.append(dup.clone()),
            Err(StoreError::DuplicateId(dup.id))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_status_not_found() {
        let mut store = TransactionStore::new();
        assert_eq!(
            store.update_status("missing", TxStatus::Confirmed),
            Err(StoreError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_update_status_is_monotone() {
        let mut store = TransactionStore::new();
        let rec = record(1.0, 1000);
        let id = rec.id.clone();
        store.append(rec).unwrap();

        store.update_status(&id, TxStatus::Confirmed).unwrap();

        // Second transition must fail, whatever the target status
        assert_eq!(
            store.update_status(&id, TxStatus::Failed),
            Err(StoreError::InvalidTransition {
                id: id.clone(),
                current: TxStatus::Confirmed,
            })
        );
        assert_eq!(store.list_descending()[0].status, TxStatus::Confirmed);
    }

    #[test]
    fn test_list_descending_orders_by_time() {
        let mut store = TransactionStore::new();
        store.append(record(1.0, 100)).unwrap();
        store.append(record(2.0, 300)).unwrap();
        store.append(record(3.0, 200)).unwrap();

        let times: Vec<i64> = store.list_descending().iter().map(|r| r.created_at).collect();
        assert_eq!(times, vec![300, 200, 100]);
    }

    #[test]
    fn test_list_descending_ties_newest_append_first() {
        let mut store = TransactionStore::new();
        let first = record(1.0, 100);
        let second = record(2.0, 100);
        let second_id = second.id.clone();
        store.append(first).unwrap();
        store.append(second).unwrap();

        assert_eq!(store.list_descending()[0].id, second_id);
    }

    #[test]
    fn test_list_ascending_ties_keep_insertion_order() {
        let mut store = TransactionStore::new();
        let first = record(1.0, 100);
        let first_id = first.id.clone();
        store.append(first).unwrap();
        store.append(record(2.0, 100)).unwrap();
        store.append(record(3.0, 50)).unwrap();

        let listed = store.list_ascending();
        assert_eq!(listed[0].created_at, 50);
        assert_eq!(listed[1].id, first_id);
    }

    #[test]
    fn test_seed_demo() {
        let mut store = TransactionStore::new();
        store.seed_demo().unwrap();

        let listed = store.list_descending();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].direction, Direction::Sent);
        assert_eq!(listed[0].amount, 0.125);
        assert_eq!(listed[1].direction, Direction::Received);
        assert_eq!(listed[1].amount, 0.5);
    }
}
