use async_trait::async_trait;

use super::models::{ChainSubscription, TransferHandle, WalletError};

/// Shape check for addresses of the supported chain family:
/// `0x` followed by exactly 40 hexadecimal characters.
pub fn is_valid_address(addr: &str) -> bool {
    match addr.strip_prefix("0x") {
        Some(body) => body.len() == 40 && hex::decode(body).is_ok(),
        None => false,
    }
}

/// The injected wallet provider contract
///
/// One implementation is selected at startup; the core never touches a
/// provider object directly. All operations may suspend (user approval
/// prompts, network round-trips) without blocking other interaction.
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// Request account access, suspending until the user approves
    async fn connect(&self) -> Result<String, WalletError>;

    /// Chain id currently reported by the provider
    async fn current_chain(&self) -> Result<String, WalletError>;

    /// On-chain balance of the given account, in the asset base unit
    async fn get_balance(&self, account: &str) -> Result<f64, WalletError>;

    /// Sign and broadcast a native-asset transfer
    ///
    /// Validates the destination shape and the amount before any
    /// provider work happens; the returned handle resolves once the
    /// network confirms or rejects the transfer.
    async fn submit_transfer(&self, to: &str, amount: f64)
        -> Result<TransferHandle, WalletError>;

    /// Subscribe to chain-changed notifications
    fn subscribe_chain_changed(&self) -> ChainSubscription;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_shape() {
        assert!(is_valid_address(
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF01"
        ));
        assert!(is_valid_address(
            "0xd8da6bf26964af9d7eed9e03e53415d37aa96045"
        ));
    }

    #[test]
    fn test_invalid_address_shapes() {
        // missing prefix
        assert!(!is_valid_address("ABCDEF0123456789ABCDEF0123456789ABCDEF01"));
        // too short
        assert!(!is_valid_address("0xABCDEF"));
        // too long
        assert!(!is_valid_address(
            "0xABCDEF0123456789ABCDEF0123456789ABCDEF0123"
        ));
        // non-hex characters
        assert!(!is_valid_address(
            "0xZZCDEF0123456789ABCDEF0123456789ABCDEF01"
        ));
        assert!(!is_valid_address(""));
    }
}
