//! Error types for the Tollgate engine.
//!
//! Three families: configuration errors (raised only at config-replace time,
//! never mid-transfer), admission/transfer errors (raised before any state is
//! mutated), and ledger errors (raised during commit, pre-validated so they
//! signal an invariant violation rather than a routine rejection).

use super::value_objects::{Address, Amount, Epoch};
use thiserror::Error;

/// Rejected configuration replacement. The prior config is always left intact.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A tax rate exceeds the hard ceiling
    #[error("Tax rate too high: {rate_bps} bps > {max_bps} bps")]
    TaxRateTooHigh { rate_bps: u32, max_bps: u32 },

    /// Burn and reward shares must sum to exactly 10000 bps
    #[error("Invalid burn/reward split: {burn_bps} + {reward_bps} != 10000")]
    InvalidBurnRewardSplit { burn_bps: u32, reward_bps: u32 },

    /// Cooldown below the minimum while anti-bot protection is enabled
    #[error("Cooldown too short: {seconds}s < {min_seconds}s")]
    CooldownTooShort { seconds: u64, min_seconds: u64 },

    /// `max_tx_amount` must be positive and no larger than `max_wallet_amount`
    #[error("Invalid limits: max_tx_amount must be > 0 and <= max_wallet_amount")]
    InvalidLimits,
}

/// Rejected privileged flag mutation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Owner and reward-sink addresses can never be blacklisted
    #[error("Address {0:?} is protected and cannot be blacklisted")]
    ProtectedAddress(Address),
}

/// Ledger-side failure during commit.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },
}

/// All ways a transfer step can be rejected. Any rejection leaves every piece
/// of persisted state untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    /// Recipient is the zero/sentinel address
    #[error("Recipient is the null address")]
    NullRecipient,

    /// Sender is flagged blacklisted
    #[error("Sender {0:?} is blacklisted")]
    BlacklistedSender(Address),

    /// Recipient is flagged blacklisted
    #[error("Recipient {0:?} is blacklisted")]
    BlacklistedRecipient(Address),

    /// Ledger-wide trading flag is closed and sender is not the deployer
    #[error("Trading is not open")]
    TradingNotOpen,

    /// Sender already acted in the current epoch
    #[error("MEV protection active: sender already acted in epoch {epoch}")]
    MevProtectionActive { epoch: Epoch },

    /// Sender acted again before the cooldown elapsed
    #[error("Cooldown active: {remaining}s remaining")]
    CooldownActive { remaining: u64 },

    /// Gross amount above the per-transaction limit
    #[error("Transfer amount {amount} exceeds per-transaction limit {max}")]
    ExceedsTxLimit { amount: Amount, max: Amount },

    /// Recipient balance plus the net amount would exceed the wallet limit
    #[error("Recipient balance would reach {projected}, above wallet limit {max}")]
    ExceedsWalletLimit { projected: Amount, max: Amount },

    /// Commit-phase ledger failure (treated as fatal, never auto-retried)
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
