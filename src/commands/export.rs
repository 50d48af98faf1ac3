use crate::App;

/// Dump the transaction history as JSON: `export [file.json]`
pub async fn execute(app: &App, args: &[&str]) -> Result<(), String> {
    let records = app.store.lock().await.list_descending();
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("Failed to serialize history: {}", e))?;

    match args.first() {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            println!("📤 History exported to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
