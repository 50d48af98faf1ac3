use crate::App;

/// Toggle the cosmetic "efficient contract mode" flag
pub async fn execute(app: &App) -> Result<(), String> {
    let mut state = app.state.lock().await;
    state.efficient_mode = !state.efficient_mode;

    if state.efficient_mode {
        println!("🔧 Switched to Efficient smart contracts (Low Gas)");
    } else {
        println!("🔧 Switched to Normal smart contracts (Standard)");
    }
    Ok(())
}
