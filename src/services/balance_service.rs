use tracing::info;

use crate::wallet::{WalletError, WalletSession};

/// Fetch the on-chain balance of the connected account
pub async fn fetch_balance(
    session: &dyn WalletSession,
    account: &str,
) -> Result<f64, WalletError> {
    let balance = session.get_balance(account).await?;
    info!(account = %account, balance, "balance fetched");
    Ok(balance)
}

/// Balance with its currency label, as the header displays it
pub fn format_balance(balance: f64, currency: &str) -> String {
    format!("{:.4} {}", balance, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::SimulatedSession;

    const ACCOUNT: &str = "0x293E7f49057A8F3962d005dC697ce1b6788dE543";

    #[tokio::test]
    async fn test_fetch_balance() {
        let session = SimulatedSession::new(ACCOUNT, 1.2345, "0x1");
        let balance = fetch_balance(&session, ACCOUNT).await.unwrap();
        assert_eq!(balance, 1.2345);
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(1.2345, "ETH"), "1.2345 ETH");
        assert_eq!(format_balance(0.5, "MATIC"), "0.5000 MATIC");
    }
}
