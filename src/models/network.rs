//! The fixed list of selectable networks
//!
//! The selector is cosmetic: switching networks changes the displayed
//! currency label, nothing else. The authoritative chain id still comes
//! from the wallet session.

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Mainnet,
    Testnet,
}

impl NetworkKind {
    /// Parse a user-entered network type, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" => Some(NetworkKind::Mainnet),
            "testnet" => Some(NetworkKind::Testnet),
            _ => None,
        }
    }
}

impl std::fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkKind::Mainnet => write!(f, "Mainnet"),
            NetworkKind::Testnet => write!(f, "Testnet"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Network {
    pub name: &'static str,
    pub kind: NetworkKind,
    pub currency: &'static str,
}

lazy_static! {
    static ref NETWORKS: Vec<Network> = vec![
        Network { name: "Ethereum", kind: NetworkKind::Mainnet, currency: "ETH" },
        Network { name: "Bitcoin", kind: NetworkKind::Mainnet, currency: "BTC" },
        Network { name: "Polygon", kind: NetworkKind::Mainnet, currency: "MATIC" },
        Network { name: "Solana", kind: NetworkKind::Mainnet, currency: "SOL" },
        Network { name: "Polygon Amoy", kind: NetworkKind::Testnet, currency: "MATIC" },
        Network { name: "Holesky", kind: NetworkKind::Testnet, currency: "ETH" },
        Network { name: "Ethereum Sepolia", kind: NetworkKind::Testnet, currency: "ETH" },
    ];
}

/// All selectable networks
pub fn supported() -> &'static [Network] {
    &NETWORKS
}

/// Look up a network by name, case-insensitive
pub fn find(name: &str) -> Option<&'static Network> {
    NETWORKS
        .iter()
        .find(|n| n.name.eq_ignore_ascii_case(name))
}

/// First network of the given kind (the default after a type switch)
pub fn first_of(kind: NetworkKind) -> Option<&'static Network> {
    NETWORKS.iter().find(|n| n.kind == kind)
}
