//! Tax and anti-abuse configuration, and the versioned store holding them.
//!
//! Both configs are created at genesis with defaults and mutated only through
//! a validated replace-whole-config operation. A replace is all-or-nothing:
//! on any invariant violation the prior config stays in place.

use super::errors::ConfigError;
use super::value_objects::Amount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Basis-point denominator: 1 bps = 1/10000.
pub const BASIS_POINTS: u32 = 10_000;

/// Hard ceiling for any single tax rate (10%).
pub const MAX_TAX_BPS: u32 = 1_000;

/// Minimum cooldown while anti-bot protection is enabled.
pub const MIN_COOLDOWN_SECS: u64 = 30;

/// Tax rates and the burn/reward split, all in basis points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub buy_tax_bps: u32,
    pub sell_tax_bps: u32,
    pub transfer_tax_bps: u32,
    pub burn_share_bps: u32,
    pub reward_share_bps: u32,
}

impl Default for TaxConfig {
    /// Genesis defaults: 2% buy, 2% sell, 1% transfer, 50/50 burn/reward.
    fn default() -> Self {
        Self {
            buy_tax_bps: 200,
            sell_tax_bps: 200,
            transfer_tax_bps: 100,
            burn_share_bps: 5_000,
            reward_share_bps: 5_000,
        }
    }
}

impl TaxConfig {
    /// Check the full invariant set: every rate at or below [`MAX_TAX_BPS`],
    /// burn and reward shares summing to exactly [`BASIS_POINTS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rate_bps in [self.buy_tax_bps, self.sell_tax_bps, self.transfer_tax_bps] {
            if rate_bps > MAX_TAX_BPS {
                return Err(ConfigError::TaxRateTooHigh {
                    rate_bps,
                    max_bps: MAX_TAX_BPS,
                });
            }
        }
        if self.burn_share_bps as u64 + self.reward_share_bps as u64 != BASIS_POINTS as u64 {
            return Err(ConfigError::InvalidBurnRewardSplit {
                burn_bps: self.burn_share_bps,
                reward_bps: self.reward_share_bps,
            });
        }
        Ok(())
    }
}

/// Anti-bot and anti-MEV thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiAbuseConfig {
    /// Largest admissible gross transfer amount for non-exempt senders.
    pub max_tx_amount: Amount,
    /// Largest admissible post-transfer recipient balance for non-exempt
    /// recipients.
    pub max_wallet_amount: Amount,
    /// Minimum seconds between two transfers from the same sender.
    pub cooldown_seconds: u64,
    pub anti_bot_enabled: bool,
    pub anti_mev_enabled: bool,
}

impl Default for AntiAbuseConfig {
    fn default() -> Self {
        Self {
            max_tx_amount: U256::from(1_000_000u64),
            max_wallet_amount: U256::from(5_000_000u64),
            cooldown_seconds: MIN_COOLDOWN_SECS,
            anti_bot_enabled: true,
            anti_mev_enabled: true,
        }
    }
}

impl AntiAbuseConfig {
    /// Check the full invariant set: cooldown floor while anti-bot is on,
    /// positive tx limit, wallet limit at least the tx limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anti_bot_enabled && self.cooldown_seconds < MIN_COOLDOWN_SECS {
            return Err(ConfigError::CooldownTooShort {
                seconds: self.cooldown_seconds,
                min_seconds: MIN_COOLDOWN_SECS,
            });
        }
        if self.max_tx_amount.is_zero() || self.max_wallet_amount < self.max_tx_amount {
            return Err(ConfigError::InvalidLimits);
        }
        Ok(())
    }
}

/// One recorded config replacement, tagged by which config changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigChange {
    Tax { old: TaxConfig, new: TaxConfig },
    AntiAbuse {
        old: AntiAbuseConfig,
        new: AntiAbuseConfig,
    },
}

/// Owned store for the current configs with atomic replace semantics and an
/// append-only change history.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    tax: TaxConfig,
    anti_abuse: AntiAbuseConfig,
    history: Vec<ConfigChange>,
}

impl ConfigStore {
    /// Create a store holding the genesis defaults.
    pub fn new() -> Self {
        Self {
            tax: TaxConfig::default(),
            anti_abuse: AntiAbuseConfig::default(),
            history: Vec::new(),
        }
    }

    /// Create a store from explicit configs, validating both.
    pub fn with_configs(
        tax: TaxConfig,
        anti_abuse: AntiAbuseConfig,
    ) -> Result<Self, ConfigError> {
        tax.validate()?;
        anti_abuse.validate()?;
        Ok(Self {
            tax,
            anti_abuse,
            history: Vec::new(),
        })
    }

    /// Consistent snapshot of both configs.
    pub fn current(&self) -> (TaxConfig, AntiAbuseConfig) {
        (self.tax, self.anti_abuse)
    }

    pub fn tax(&self) -> TaxConfig {
        self.tax
    }

    pub fn anti_abuse(&self) -> AntiAbuseConfig {
        self.anti_abuse
    }

    /// Replace the tax config wholesale. Validates before swapping; on
    /// violation the prior config is untouched.
    pub fn replace_tax_config(&mut self, new: TaxConfig) -> Result<(), ConfigError> {
        new.validate()?;
        let old = self.tax;
        self.tax = new;
        self.history.push(ConfigChange::Tax { old, new });
        Ok(())
    }

    /// Replace the anti-abuse config wholesale, same all-or-nothing rules.
    pub fn replace_anti_abuse_config(
        &mut self,
        new: AntiAbuseConfig,
    ) -> Result<(), ConfigError> {
        new.validate()?;
        let old = self.anti_abuse;
        self.anti_abuse = new;
        self.history.push(ConfigChange::AntiAbuse { old, new });
        Ok(())
    }

    /// Every successful replacement since genesis, oldest first.
    pub fn history(&self) -> &[ConfigChange] {
        &self.history
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
