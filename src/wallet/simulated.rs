//! In-process wallet session
//!
//! Stands in for a browser-injected provider: it owns a demo account and
//! balance, fabricates transaction hashes, and resolves transfers after a
//! short delay. It is also the test double for every error path the real
//! boundary can produce.

use std::time::Duration;

use async_trait::async_trait;
use rand::RngCore;
use tokio::sync::{broadcast, oneshot, Mutex};
use tracing::{debug, info};

use super::models::{ChainSubscription, TransferHandle, TransferOutcome, WalletError};
use super::session::{is_valid_address, WalletSession};

pub struct SimulatedSession {
    account: String,
    chain_id: Mutex<String>,
    balance: Mutex<f64>,
    confirm_delay: Duration,
    available: bool,
    reject_connect: bool,
    fail_transfers: bool,
    chain_tx: broadcast::Sender<String>,
}

impl SimulatedSession {
    pub fn new(
        account: impl Into<String>,
        balance: f64,
        chain_id: impl Into<String>,
    ) -> Self {
        let (chain_tx, _) = broadcast::channel(16);
        SimulatedSession {
            account: account.into(),
            chain_id: Mutex::new(chain_id.into()),
            balance: Mutex::new(balance),
            confirm_delay: Duration::from_secs(2),
            available: true,
            reject_connect: false,
            fail_transfers: false,
            chain_tx,
        }
    }

    /// How long a submitted transfer stays pending before resolving
    pub fn with_confirm_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    /// Behave as if no wallet extension is installed
    pub fn without_provider(mut self) -> Self {
        self.available = false;
        self
    }

    /// Decline every connect prompt (test double for user rejection)
    pub fn rejecting_connect(mut self) -> Self {
        self.reject_connect = true;
        self
    }

    /// Resolve every transfer as failed (test double for network rejection)
    pub fn failing_transfers(mut self) -> Self {
        self.fail_transfers = true;
        self
    }

    /// Simulate the wallet extension switching chains; notifies all
    /// chain-changed subscribers.
    pub async fn switch_chain(&self, chain_id: impl Into<String>) {
        let chain_id = chain_id.into();
        *self.chain_id.lock().await = chain_id.clone();
        // No subscribers is fine
        let _ = self.chain_tx.send(chain_id);
    }

    fn random_tx_hash() -> String {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        format!("0x{}", hex::encode(bytes))
    }
}

#[async_trait]
impl WalletSession for SimulatedSession {
    async fn connect(&self) -> Result<String, WalletError> {
        if !self.available {
            return Err(WalletError::ProviderUnavailable);
        }
        if self.reject_connect {
            debug!("connect request declined");
            return Err(WalletError::UserRejected);
        }
        info!(account = %self.account, "wallet connected");
        Ok(self.account.clone())
    }

    async fn current_chain(&self) -> Result<String, WalletError> {
        Ok(self.chain_id.lock().await.clone())
    }

    async fn get_balance(&self, account: &str) -> Result<f64, WalletError> {
        if !self.available {
            return Err(WalletError::ProviderUnavailable);
        }
        if account != self.account {
            return Err(WalletError::CallFailed(format!(
                "unknown account {}",
                account
            )));
        }
        Ok(*self.balance.lock().await)
    }

    async fn submit_transfer(
        &self,
        to: &str,
        amount: f64,
    ) -> Result<TransferHandle, WalletError> {
        if !self.available {
            return Err(WalletError::ProviderUnavailable);
        }
        if !is_valid_address(to) {
            return Err(WalletError::InvalidAddress(to.to_string()));
        }
        if !(amount.is_finite() && amount > 0.0) {
            return Err(WalletError::InvalidAmount(amount));
        }

        {
            let mut balance = self.balance.lock().await;
            if *balance < amount {
                return Err(WalletError::CallFailed(format!(
                    "insufficient funds: have {:.4}, need {:.4}",
                    *balance, amount
                )));
            }
            *balance -= amount;
        }

        let tx_hash = Self::random_tx_hash();
        info!(tx_hash = %tx_hash, to = %to, amount, "transfer broadcast");

        let (resolve_tx, resolve_rx) = oneshot::channel();
        let delay = self.confirm_delay;
        let outcome = if self.fail_transfers {
            TransferOutcome::Failed
        } else {
            TransferOutcome::Confirmed
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may have been dropped; nothing to do then
            let _ = resolve_tx.send(outcome);
        });

        Ok(TransferHandle::new(tx_hash, resolve_rx))
    }

    fn subscribe_chain_changed(&self) -> ChainSubscription {
        ChainSubscription::new(self.chain_tx.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x293E7f49057A8F3962d005dC697ce1b6788dE543";
    const DEST: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

    fn session() -> SimulatedSession {
        SimulatedSession::new(ACCOUNT, 1.2345, "0x1")
            .with_confirm_delay(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_connect_returns_account() {
        let session = session();
        assert_eq!(session.connect().await.unwrap(), ACCOUNT);
    }

    #[tokio::test]
    async fn test_missing_provider() {
        let session = session().without_provider();
        assert_eq!(
            session.connect().await,
            Err(WalletError::ProviderUnavailable)
        );
        assert_eq!(
            session.get_balance(ACCOUNT).await,
            Err(WalletError::ProviderUnavailable)
        );
        assert_eq!(
            session.submit_transfer(DEST, 0.1).await.unwrap_err(),
            WalletError::ProviderUnavailable
        );
    }

    #[tokio::test]
    async fn test_connect_can_be_rejected() {
        let session = session().rejecting_connect();
        assert_eq!(session.connect().await, Err(WalletError::UserRejected));
    }

    #[tokio::test]
    async fn test_get_balance_of_unknown_account() {
        let session = session();
        assert!(matches!(
            session.get_balance(DEST).await,
            Err(WalletError::CallFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_rejects_bad_address() {
        let session = session();
        assert_eq!(
            session.submit_transfer("0xnope", 0.1).await.unwrap_err(),
            WalletError::InvalidAddress("0xnope".to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_rejects_non_positive_amount() {
        let session = session();
        assert_eq!(
            session.submit_transfer(DEST, 0.0).await.unwrap_err(),
            WalletError::InvalidAmount(0.0)
        );
        assert_eq!(
            session.submit_transfer(DEST, -0.5).await.unwrap_err(),
            WalletError::InvalidAmount(-0.5)
        );
        assert!(matches!(
            session.submit_transfer(DEST, f64::NAN).await.unwrap_err(),
            WalletError::InvalidAmount(_)
        ));
    }

    #[tokio::test]
    async fn test_submit_rejects_insufficient_funds() {
        let session = session();
        assert!(matches!(
            session.submit_transfer(DEST, 100.0).await.unwrap_err(),
            WalletError::CallFailed(_)
        ));
        // Balance untouched by the failed submit
        assert_eq!(session.get_balance(ACCOUNT).await.unwrap(), 1.2345);
    }

    #[tokio::test]
    async fn test_transfer_confirms_and_deducts_balance() {
        let session = session();
        let handle = session.submit_transfer(DEST, 0.5).await.unwrap();
        assert!(handle.tx_hash.starts_with("0x"));

        assert_eq!(handle.wait().await, TransferOutcome::Confirmed);
        let balance = session.get_balance(ACCOUNT).await.unwrap();
        assert!((balance - 0.7345).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failing_session_resolves_failed() {
        let session = session().failing_transfers();
        let handle = session.submit_transfer(DEST, 0.1).await.unwrap();
        assert_eq!(handle.wait().await, TransferOutcome::Failed);
    }

    #[tokio::test]
    async fn test_chain_subscription_sees_switch() {
        let session = session();
        let mut sub = session.subscribe_chain_changed();
        session.switch_chain("0x89").await;

        assert_eq!(sub.next_change().await.as_deref(), Some("0x89"));
        assert_eq!(session.current_chain().await.unwrap(), "0x89");
    }
}
