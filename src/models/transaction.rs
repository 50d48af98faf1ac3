//! Transaction history models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether value moved out of or into the connected account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

/// Lifecycle status of a transaction record
///
/// Locally submitted sends start at `Pending` and move exactly once to
/// `Confirmed` or `Failed` when the network resolves the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed,
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStatus::Pending => write!(f, "Pending"),
            TxStatus::Confirmed => write!(f, "Confirmed"),
            TxStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// A single entry in the session-local transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub direction: Direction,
    /// Amount in the active asset's base unit (e.g. ETH), always >= 0
    pub amount: f64,
    /// Destination (for sends) or origin (for receives) address
    pub counterparty: String,
    /// Milliseconds since epoch, assigned at creation
    pub created_at: i64,
    pub status: TxStatus,
}

impl TransactionRecord {
    /// Create a new record with a fresh UUID
    pub fn new(
        direction: Direction,
        amount: f64,
        counterparty: impl Into<String>,
        created_at: i64,
        status: TxStatus,
    ) -> Self {
        TransactionRecord {
            id: Uuid::new_v4().to_string(),
            direction,
            amount,
            counterparty: counterparty.into(),
            created_at,
            status,
        }
    }

    /// Create a pending outgoing record stamped with the current time
    pub fn pending_send(amount: f64, counterparty: impl Into<String>) -> Self {
        Self::new(
            Direction::Sent,
            amount,
            counterparty,
            chrono::Utc::now().timestamp_millis(),
            TxStatus::Pending,
        )
    }
}
