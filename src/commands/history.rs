use crate::models::Direction;
use crate::utils::{format_timestamp, shorten_address};
use crate::App;

/// Print the transaction history, most recent first
pub async fn execute(app: &App) -> Result<(), String> {
    let records = app.store.lock().await.list_descending();

    if records.is_empty() {
        println!("📋 No transactions yet");
        return Ok(());
    }

    let currency = app.state.lock().await.currency.clone();

    println!("📋 Transaction History (Most Recent)");
    for (idx, tx) in records.iter().enumerate() {
        let (label, sign) = match tx.direction {
            Direction::Sent => ("Sent", '-'),
            Direction::Received => ("Received", '+'),
        };
        let counterparty =
            shorten_address(&tx.counterparty).unwrap_or_else(|_| tx.counterparty.clone());

        println!(
            "{:>3}. {:<8} {}{} {} | {} • {} [{}]",
            idx + 1,
            label,
            sign,
            tx.amount,
            currency,
            counterparty,
            format_timestamp(tx.created_at),
            tx.status
        );
    }
    Ok(())
}
