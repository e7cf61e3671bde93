//! Anti-bot / anti-MEV admission guard.
//!
//! A small per-address state machine gating transfer admission. Checks run in
//! a fixed order; the first failure wins and all later checks are skipped.
//! Evaluation never mutates anything: on admission it returns the
//! `(epoch, timestamp)` pair the orchestrator must record afterwards.
//!
//! The wallet-limit check is evaluated against the net amount the recipient
//! actually receives after tax, not the gross transfer amount.

use super::config::AntiAbuseConfig;
use super::registry::AddressRegistry;
use super::value_objects::{Address, Admission, Amount, Epoch, Timestamp, TransferRequest};
use crate::domain::errors::TransferError;

/// Resolved external state the guard needs for one evaluation.
///
/// Epochs must start at 1: epoch 0 is the never-active sentinel in
/// [`super::value_objects::AddressActivity`].
#[derive(Clone, Copy, Debug)]
pub struct GuardInput {
    /// `amount - tax`, what the recipient will actually be credited.
    pub net_amount: Amount,
    pub recipient_balance: Amount,
    pub trading_open: bool,
    pub epoch: Epoch,
    pub now: Timestamp,
}

/// Evaluate admission for one request. First failure wins.
pub fn evaluate(
    request: &TransferRequest,
    registry: &AddressRegistry,
    config: &AntiAbuseConfig,
    deployer: Address,
    input: &GuardInput,
) -> Result<Admission, TransferError> {
    // 1. Recipient validity
    if request.recipient == Address::zero() {
        return Err(TransferError::NullRecipient);
    }

    // 2. Blacklist, sender before recipient, regardless of venue status
    let sender_flags = registry.flags(request.sender);
    let recipient_flags = registry.flags(request.recipient);
    if sender_flags.is_blacklisted {
        return Err(TransferError::BlacklistedSender(request.sender));
    }
    if recipient_flags.is_blacklisted {
        return Err(TransferError::BlacklistedRecipient(request.recipient));
    }

    // 3. Trading-open gate
    if !input.trading_open && request.sender != deployer {
        return Err(TransferError::TradingNotOpen);
    }

    let activity = registry.activity(request.sender);

    // 4. Same-epoch repeat activity
    if config.anti_mev_enabled
        && !sender_flags.is_limit_exempt
        && activity.last_activity_epoch == input.epoch
    {
        return Err(TransferError::MevProtectionActive { epoch: input.epoch });
    }

    // 5. Cooldown
    if config.anti_bot_enabled && !sender_flags.is_limit_exempt {
        let elapsed = input.now.saturating_sub(activity.last_activity_timestamp);
        if elapsed < config.cooldown_seconds {
            return Err(TransferError::CooldownActive {
                remaining: config.cooldown_seconds - elapsed,
            });
        }
    }

    // 6. Per-transaction limit on the gross amount
    if config.anti_bot_enabled
        && !sender_flags.is_limit_exempt
        && request.amount > config.max_tx_amount
    {
        return Err(TransferError::ExceedsTxLimit {
            amount: request.amount,
            max: config.max_tx_amount,
        });
    }

    // 7. Wallet limit on the projected post-transfer recipient balance
    if !recipient_flags.is_limit_exempt {
        let projected = input.recipient_balance.saturating_add(input.net_amount);
        if projected > config.max_wallet_amount {
            return Err(TransferError::ExceedsWalletLimit {
                projected,
                max: config.max_wallet_amount,
            });
        }
    }

    Ok(Admission {
        epoch: input.epoch,
        timestamp: input.now,
    })
}
