use crate::wallet::WalletSession;
use crate::App;

/// Connect the wallet and start watching for chain changes
pub async fn execute(app: &App) -> Result<(), String> {
    // Ignore duplicate requests while one is already in flight
    {
        let mut state = app.state.lock().await;
        if state.connecting {
            println!("⏳ A connect request is already in progress");
            return Ok(());
        }
        state.connecting = true;
    }

    let result = connect_inner(app).await;
    app.state.lock().await.connecting = false;
    result
}

async fn connect_inner(app: &App) -> Result<(), String> {
    let account = app.wallet.connect().await.map_err(|e| e.to_string())?;
    let chain_id = app
        .wallet
        .current_chain()
        .await
        .map_err(|e| e.to_string())?;

    {
        let mut state = app.state.lock().await;
        state.account = Some(account.clone());
        state.chain_id = Some(chain_id.clone());
    }

    // Replace any previous watcher so reconnects do not leak listeners
    app.watch_chain_changes().await;

    println!("🔗 Wallet connected: {}", account);
    println!("   Chain id: {}", chain_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::SimulatedSession;
    use std::sync::Arc;

    const ACCOUNT: &str = "0x293E7f49057A8F3962d005dC697ce1b6788dE543";

    #[tokio::test]
    async fn test_in_flight_connect_short_circuits() {
        // The session would reject, but the guard must return before the
        // provider is ever asked
        let session = SimulatedSession::new(ACCOUNT, 1.0, "0x1").rejecting_connect();
        let app = App::new(Arc::new(session));
        app.state.lock().await.connecting = true;

        assert_eq!(execute(&app).await, Ok(()));
        let state = app.state.lock().await;
        assert!(state.connecting);
        assert_eq!(state.account, None);
    }

    #[tokio::test]
    async fn test_rejected_connect_surfaces_and_clears_guard() {
        let session = SimulatedSession::new(ACCOUNT, 1.0, "0x1").rejecting_connect();
        let app = App::new(Arc::new(session));

        assert!(execute(&app).await.is_err());
        let state = app.state.lock().await;
        assert!(!state.connecting);
        assert_eq!(state.account, None);
    }
}
