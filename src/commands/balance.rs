use crate::services::balance_service;
use crate::App;

/// Fetch and display the connected account's balance
pub async fn execute(app: &App) -> Result<(), String> {
    let (account, currency) = {
        let state = app.state.lock().await;
        match &state.account {
            Some(account) => (account.clone(), state.currency.clone()),
            None => return Err("Please connect your wallet first".to_string()),
        }
    };

    let balance = balance_service::fetch_balance(app.wallet.as_ref(), &account)
        .await
        .map_err(|e| e.to_string())?;

    app.state.lock().await.balance = Some(balance);
    println!(
        "💰 Balance: {}",
        balance_service::format_balance(balance, &currency)
    );
    Ok(())
}
