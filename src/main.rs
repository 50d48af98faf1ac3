use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncBufReadExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod services;
mod store;
mod utils;
mod wallet;

use models::SessionState;
use store::TransactionStore;
use wallet::{SimulatedSession, WalletSession};

const DEMO_ACCOUNT: &str = "0x293E7f49057A8F3962d005dC697ce1b6788dE543";
const DEMO_BALANCE: f64 = 1.2345;

/// Shared application state: the injected wallet session, the in-memory
/// history, and the display session state.
pub struct App {
    pub wallet: Arc<dyn WalletSession>,
    pub store: Arc<Mutex<TransactionStore>>,
    pub state: Arc<Mutex<SessionState>>,
    chain_watch: Mutex<Option<JoinHandle<()>>>,
}

impl App {
    pub fn new(wallet: Arc<dyn WalletSession>) -> Self {
        App {
            wallet,
            store: Arc::new(Mutex::new(TransactionStore::new())),
            state: Arc::new(Mutex::new(SessionState::new())),
            chain_watch: Mutex::new(None),
        }
    }

    /// (Re-)subscribe to chain-changed notifications and reflect them in
    /// the session state. The previous watcher is aborted, which drops
    /// its subscription, so reconnecting never leaks listeners.
    pub async fn watch_chain_changes(&self) {
        let mut subscription = self.wallet.subscribe_chain_changed();
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            while let Some(chain_id) = subscription.next_change().await {
                info!(chain_id = %chain_id, "chain changed");
                state.lock().await.chain_id = Some(chain_id.clone());
                println!("🔄 Network changed to chain {}", chain_id);
            }
        });

        let mut guard = self.chain_watch.lock().await;
        if let Some(old) = guard.take() {
            old.abort();
        }
        *guard = Some(task);
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, "ignoring unparsable environment value");
                default
            }
        },
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("netmain_wallet=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("🪙 Starting NetMain Wallet...");

    let account =
        std::env::var("WALLET_ACCOUNT").unwrap_or_else(|_| DEMO_ACCOUNT.to_string());
    let balance = env_or("WALLET_BALANCE", DEMO_BALANCE);
    let chain_id = std::env::var("WALLET_CHAIN_ID").unwrap_or_else(|_| "0x1".to_string());
    let confirm_ms: u64 = env_or("CONFIRM_DELAY_MS", 2000);

    // The wallet session is injected here; the rest of the app only sees
    // the trait.
    let session = SimulatedSession::new(account, balance, chain_id)
        .with_confirm_delay(Duration::from_millis(confirm_ms));
    let app = App::new(Arc::new(session));

    {
        let mut store = app.store.lock().await;
        if let Err(e) = store.seed_demo() {
            warn!(error = %e, "failed to seed demo history");
        }
    }

    println!("NetMain Wallet — type `help` for commands, `quit` to exit.");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }
                commands::handle_line(&app, line).await;
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("NetMain Wallet shutting down");
}
