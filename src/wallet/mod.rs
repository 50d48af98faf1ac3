//! Wallet session boundary
//!
//! Everything that actually talks to a chain lives behind the
//! [`WalletSession`] trait: account approval, chain id, balance lookup,
//! and transfer submission. The rest of the crate only consumes the
//! trait, so the implementation is swappable at startup.

pub mod models;
pub mod session;
pub mod simulated;

pub use models::{ChainSubscription, TransferHandle, TransferOutcome, WalletError};
pub use session::{is_valid_address, WalletSession};
pub use simulated::SimulatedSession;
