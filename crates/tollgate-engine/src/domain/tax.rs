//! Fixed-point tax calculator.
//!
//! Integer-only, deterministic, overflow-safe. The reward share is always
//! derived as `tax - burn` rather than from `reward_share_bps`, so
//! `burn + reward == tax` holds for every input, including amounts where the
//! tax does not divide evenly.

use super::config::{TaxConfig, BASIS_POINTS};
use super::value_objects::{Amount, TransferKind};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Exact tax split for one transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub tax_amount: Amount,
    pub burn_amount: Amount,
    pub reward_amount: Amount,
}

impl TaxBreakdown {
    /// The all-zero breakdown used for exempt parties and zero amounts.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Compute the tax for `amount` under `kind`, and its exact burn/reward
/// split. Assumes tax applies; tax-exempt parties are handled by the caller.
///
/// `tax = floor(amount * rate / 10000)`, `burn = floor(tax * share / 10000)`,
/// `reward = tax - burn`. For all inputs `0 <= tax <= amount`.
pub fn compute_tax(amount: Amount, kind: TransferKind, config: &TaxConfig) -> TaxBreakdown {
    let rate_bps = match kind {
        TransferKind::Buy => config.buy_tax_bps,
        TransferKind::Sell => config.sell_tax_bps,
        TransferKind::Transfer => config.transfer_tax_bps,
    };
    if amount.is_zero() || rate_bps == 0 {
        return TaxBreakdown::zero();
    }

    let tax_amount = mul_bps(amount, rate_bps);
    let burn_amount = mul_bps(tax_amount, config.burn_share_bps);
    // Reward absorbs the rounding unit; never derived from reward_share_bps.
    let reward_amount = tax_amount - burn_amount;

    TaxBreakdown {
        tax_amount,
        burn_amount,
        reward_amount,
    }
}

/// `floor(value * bps / 10000)` without overflow for the full 256-bit range.
///
/// The multiplication is split around the denominator: with
/// `value = q * 10000 + r`, the result is `q * bps + r * bps / 10000`.
/// Requires `bps <= 10000`, which the config invariants guarantee, so
/// `q * bps <= value` and neither term can exceed 256 bits.
fn mul_bps(value: Amount, bps: u32) -> Amount {
    debug_assert!(bps <= BASIS_POINTS);
    let denom = U256::from(BASIS_POINTS);
    let bps = U256::from(bps);
    (value / denom) * bps + (value % denom) * bps / denom
}
