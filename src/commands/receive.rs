use crate::App;

/// Show the full wallet address for sharing with a sender
pub async fn execute(app: &App) -> Result<(), String> {
    let state = app.state.lock().await;
    let account = state
        .account
        .as_ref()
        .ok_or("Please connect your wallet first".to_string())?;

    println!("📥 Your wallet address:");
    println!("   {}", account);
    println!("   Copy it to share with the sender");
    Ok(())
}
