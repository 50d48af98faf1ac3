use crate::services::{gas_service, transfer_service};
use crate::utils::shorten_address;
use crate::App;

/// Submit a native-asset transfer: `send <address> <amount>`
pub async fn execute(app: &App, args: &[&str]) -> Result<(), String> {
    if args.len() < 2 {
        println!("💸 Send");
        println!("Usage: send <address> <amount>");
        println!("Example: send 0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045 0.5");
        return Ok(());
    }

    let to = args[0];
    let amount: f64 = args[1]
        .parse()
        .map_err(|_| format!("Invalid amount: {}", args[1]))?;

    let currency = {
        let state = app.state.lock().await;
        if state.account.is_none() {
            return Err("Please connect your wallet first".to_string());
        }
        state.currency.clone()
    };

    // Advisory figure only, never part of the transfer parameters
    if let Ok(fee) = gas_service::estimate(amount) {
        println!("⛽ Estimated gas fee: {:.6} {}", fee, currency);
    }

    let ticket =
        transfer_service::execute_transfer(app.wallet.as_ref(), &app.store, to, amount, currency)
            .await
            .map_err(|e| e.to_string())?;

    let hash_display = shorten_address(&ticket.tx_hash).unwrap_or(ticket.tx_hash);
    println!("💸 Transfer submitted ({}) — pending confirmation", hash_display);
    Ok(())
}
