//! Session display state
//!
//! One authoritative owner of what the wallet front-end currently shows:
//! connected account, chain, last fetched balance, and the cosmetic
//! network/mode selections. Commands read and update this through the
//! shared `App` state instead of holding their own copies.

use crate::models::network::{self, NetworkKind};

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Connected account address, None until `connect` succeeds
    pub account: Option<String>,
    /// Chain id as reported by the wallet session
    pub chain_id: Option<String>,
    /// Last fetched balance, None until `balance` is run
    pub balance: Option<f64>,
    pub selected_network: String,
    pub network_kind: NetworkKind,
    pub currency: String,
    /// Cosmetic "efficient contract mode" flag, no functional effect
    pub efficient_mode: bool,
    /// Guard against re-entrant connect attempts
    pub connecting: bool,
}

impl SessionState {
    pub fn new() -> Self {
        // Default selection is the first mainnet entry
        let default = network::first_of(NetworkKind::Mainnet)
            .map(|n| (n.name.to_string(), n.currency.to_string()))
            .unwrap_or_else(|| ("Ethereum".to_string(), "ETH".to_string()));

        SessionState {
            account: None,
            chain_id: None,
            balance: None,
            selected_network: default.0,
            network_kind: NetworkKind::Mainnet,
            currency: default.1,
            efficient_mode: false,
            connecting: false,
        }
    }

    /// Switch the cosmetic network selection
    pub fn select_network(&mut self, net: &network::Network) {
        self.selected_network = net.name.to_string();
        self.network_kind = net.kind;
        self.currency = net.currency.to_string();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
