//! Transfer submission flow
//!
//! Submits a transfer through the wallet session, records it as pending,
//! and spawns the single waiter that applies the confirmation result.
//! A record only exists once the session has acknowledged the submit, so
//! a failed submission leaves the history untouched.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::models::{TransactionRecord, TxStatus};
use crate::store::TransactionStore;
use crate::wallet::{TransferOutcome, WalletError, WalletSession};

/// What the caller gets back for a broadcast transfer
#[derive(Debug)]
pub struct TransferTicket {
    pub record_id: String,
    pub tx_hash: String,
    /// Resolves once the confirmation event has been applied to the store.
    /// Dropping it detaches the waiter; awaiting it is only needed by
    /// callers that want to observe the final status.
    pub waiter: JoinHandle<()>,
}

pub async fn execute_transfer(
    session: &dyn WalletSession,
    store: &Arc<Mutex<TransactionStore>>,
    to: &str,
    amount: f64,
    currency: String,
) -> Result<TransferTicket, WalletError> {
    let handle = session.submit_transfer(to, amount).await?;
    let tx_hash = handle.tx_hash.clone();

    let record = TransactionRecord::pending_send(amount, to);
    let record_id = record.id.clone();
    {
        let mut store = store.lock().await;
        if let Err(e) = store.append(record) {
            // Ids are fresh UUIDs, so this indicates a bug
            error!(error = %e, "failed to record submitted transfer");
            return Err(WalletError::CallFailed(e.to_string()));
        }
    }
    info!(id = %record_id, tx_hash = %tx_hash, amount, "transfer recorded as pending");

    let store = Arc::clone(store);
    let id = record_id.clone();
    let waiter = tokio::spawn(async move {
        let status = match handle.wait().await {
            TransferOutcome::Confirmed => TxStatus::Confirmed,
            TransferOutcome::Failed => TxStatus::Failed,
        };

        let mut store = store.lock().await;
        match store.update_status(&id, status) {
            Ok(()) => match status {
                TxStatus::Confirmed => {
                    println!("✅ Transaction confirmed: {} {}", amount, currency)
                }
                _ => println!("❌ Transaction failed: {} {}", amount, currency),
            },
            // The transition happens exactly once per record, so a miss
            // here indicates a bug rather than a user error
            Err(e) => warn!(id = %id, error = %e, "confirmation could not be applied"),
        }
    });

    Ok(TransferTicket {
        record_id,
        tx_hash,
        waiter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::wallet::SimulatedSession;
    use std::time::Duration;

    const ACCOUNT: &str = "0x293E7f49057A8F3962d005dC697ce1b6788dE543";
    const DEST: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

    fn session() -> SimulatedSession {
        SimulatedSession::new(ACCOUNT, 10.0, "0x1")
            .with_confirm_delay(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_submitted_transfer_confirms_end_to_end() {
        let session = session();
        let store = Arc::new(Mutex::new(TransactionStore::new()));

        let ticket = execute_transfer(&session, &store, DEST, 0.5, "ETH".to_string())
            .await
            .unwrap();

        // Pending immediately after submit
        {
            let store = store.lock().await;
            let listed = store.list_descending();
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].id, ticket.record_id);
            assert_eq!(listed[0].status, TxStatus::Pending);
            assert_eq!(listed[0].direction, Direction::Sent);
            assert_eq!(listed[0].amount, 0.5);
            assert_eq!(listed[0].counterparty, DEST);
        }

        ticket.waiter.await.unwrap();

        let store = store.lock().await;
        let listed = store.list_descending();
        assert_eq!(listed[0].id, ticket.record_id);
        assert_eq!(listed[0].status, TxStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_rejected_submit_leaves_history_untouched() {
        let session = session();
        let store = Arc::new(Mutex::new(TransactionStore::new()));

        let err = execute_transfer(&session, &store, "0xbad", 0.5, "ETH".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, WalletError::InvalidAddress("0xbad".to_string()));
        assert!(store.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_transfer_ends_failed() {
        let session = session().failing_transfers();
        let store = Arc::new(Mutex::new(TransactionStore::new()));

        let ticket = execute_transfer(&session, &store, DEST, 0.25, "ETH".to_string())
            .await
            .unwrap();
        ticket.waiter.await.unwrap();

        let store = store.lock().await;
        assert_eq!(store.list_descending()[0].status, TxStatus::Failed);
    }
}
