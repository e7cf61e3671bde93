//! Domain invariants as standalone predicates.
//!
//! Used by the test suites to state the engine's arithmetic and config
//! contracts directly.

use super::config::{AntiAbuseConfig, TaxConfig};
use super::tax::TaxBreakdown;
use super::value_objects::Amount;

/// The tax never exceeds the amount it was computed from.
pub fn invariant_tax_bounded(amount: Amount, breakdown: &TaxBreakdown) -> bool {
    breakdown.tax_amount <= amount
}

/// Burn plus reward reconstructs the tax exactly, with no remainder drift.
pub fn invariant_split_preserved(breakdown: &TaxBreakdown) -> bool {
    breakdown.burn_amount + breakdown.reward_amount == breakdown.tax_amount
}

/// The tax config passes its full admission-time invariant set.
pub fn invariant_tax_config_valid(config: &TaxConfig) -> bool {
    config.validate().is_ok()
}

/// The anti-abuse config passes its full admission-time invariant set.
pub fn invariant_anti_abuse_config_valid(config: &AntiAbuseConfig) -> bool {
    config.validate().is_ok()
}
