//! Cosmetic gas fee estimate
//!
//! Shown next to the send form the way the original wallet does it. The
//! figure is advisory only and is never used to build the actual
//! transfer parameters.

use crate::wallet::WalletError;

/// Flat component of the display estimate, in the asset base unit
pub const BASE_FEE: f64 = 0.0001;
/// Amount-proportional component of the display estimate
pub const MARGIN_RATE: f64 = 0.002;

/// Display-only fee estimate for a transfer of `amount`
pub fn estimate(amount: f64) -> Result<f64, WalletError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(WalletError::InvalidAmount(amount));
    }
    Ok(BASE_FEE + amount * MARGIN_RATE)
}
