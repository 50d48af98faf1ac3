use crate::services::gas_service;

/// Display-only gas estimate for an amount: `estimate <amount>`
pub fn execute(args: &[&str]) -> Result<(), String> {
    let raw = args
        .first()
        .ok_or("Usage: estimate <amount>".to_string())?;
    let amount: f64 = raw.parse().map_err(|_| format!("Invalid amount: {}", raw))?;

    let fee = gas_service::estimate(amount).map_err(|e| e.to_string())?;
    println!("⛽ Estimated gas fee: {:.6}", fee);
    Ok(())
}
