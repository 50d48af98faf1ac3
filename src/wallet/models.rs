use thiserror::Error;
use tokio::sync::{broadcast, oneshot};
use tracing::debug;

/// Errors surfaced by wallet session operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// No wallet provider is available; the user must install one
    #[error("No wallet provider detected. Please install a compatible wallet")]
    ProviderUnavailable,
    /// The user declined the approval prompt; nothing changed
    #[error("Request was rejected by the user")]
    UserRejected,
    /// Destination failed the 0x + 40 hex character shape check
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Amount is not a positive finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
    /// Network or RPC failure; reported to the user, never retried
    #[error("Wallet call failed: {0}")]
    CallFailed(String),
}

/// Final resolution of a broadcast transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    Confirmed,
    Failed,
}

/// Handle for a transfer that has been broadcast but not yet resolved
///
/// There is no cancellation: once broadcast, the transfer either confirms
/// or fails on its own.
#[derive(Debug)]
pub struct TransferHandle {
    pub tx_hash: String,
    outcome: oneshot::Receiver<TransferOutcome>,
}

impl TransferHandle {
    pub fn new(tx_hash: String, outcome: oneshot::Receiver<TransferOutcome>) -> Self {
        TransferHandle { tx_hash, outcome }
    }

    /// Wait for the confirmation event. A dropped resolver counts as a
    /// failed transfer.
    pub async fn wait(self) -> TransferOutcome {
        match self.outcome.await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(tx_hash = %self.tx_hash, "transfer resolver dropped, treating as failed");
                TransferOutcome::Failed
            }
        }
    }
}

/// Subscription to chain-changed notifications
///
/// Dropping the handle unsubscribes, so reconnecting cannot leak
/// listeners: the previous subscription is simply replaced.
pub struct ChainSubscription {
    rx: broadcast::Receiver<String>,
}

impl ChainSubscription {
    pub fn new(rx: broadcast::Receiver<String>) -> Self {
        ChainSubscription { rx }
    }

    /// Next chain id, or None once the session is gone
    pub async fn next_change(&mut self) -> Option<String> {
        loop {
            match self.rx.recv().await {
                Ok(chain_id) => return Some(chain_id),
                Err(broadcast::error::RecvError::Closed) => return None,
                // Skipped notifications only matter as "latest chain wins"
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dropped_resolver_counts_as_failed() {
        let (resolve_tx, resolve_rx) = oneshot::channel();
        let handle = TransferHandle::new("0xdeadbeef".to_string(), resolve_rx);

        drop(resolve_tx);
        assert_eq!(handle.wait().await, TransferOutcome::Failed);
    }

    #[tokio::test]
    async fn test_closed_subscription_yields_none() {
        let (chain_tx, rx) = broadcast::channel::<String>(4);
        let mut sub = ChainSubscription::new(rx);

        drop(chain_tx);
        assert_eq!(sub.next_change().await, None);
    }
}
