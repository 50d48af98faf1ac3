//! In-memory transaction history
//!
//! There is no persistence in this wallet: history lives for the lifetime
//! of the process and resets on restart.

pub mod transactions;

pub use transactions::{StoreError, TransactionStore};
