//! Data models shared across commands and services

pub mod chart;
pub mod network;
pub mod session;
pub mod transaction;

// Re-export commonly used types for convenience
pub use chart::DailyBucket;
pub use network::{Network, NetworkKind};
pub use session::SessionState;
pub use transaction::{Direction, TransactionRecord, TxStatus};
