//! Value objects for the transfer pipeline.

use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};

/// Type aliases for clarity
pub type Address = H160;
pub type Amount = U256;

/// Opaque, monotonically ordered batch marker (analogous to a block number).
///
/// Epoch 0 is reserved as the "never active" sentinel in [`AddressActivity`];
/// live epochs start at 1.
pub type Epoch = u64;

/// Seconds since an engine-wide origin (the engine never reads a wall clock).
pub type Timestamp = u64;

/// Classification of a balance-transferring operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferKind {
    /// Transfer originating from a venue pair or router.
    Buy,
    /// Transfer into a venue pair or router.
    Sell,
    /// Peer-to-peer transfer, no venue on either side.
    Transfer,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferKind::Buy => "BUY",
            TransferKind::Sell => "SELL",
            TransferKind::Transfer => "TRANSFER",
        }
    }
}

/// A single transfer request entering the engine. Ephemeral, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender: Address,
    pub recipient: Address,
    pub amount: Amount,
}

impl TransferRequest {
    pub fn new(sender: Address, recipient: Address, amount: Amount) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }
}

/// Result of one admitted transfer step, used to drive ledger mutation and
/// event emission. Not persisted beyond the step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// What the recipient actually receives (`amount - tax_amount`).
    pub net_amount: Amount,
    pub tax_amount: Amount,
    pub burn_amount: Amount,
    pub reward_amount: Amount,
    pub kind: TransferKind,
}

/// Per-address capability flags. Unseen addresses default to all-false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFlags {
    pub is_venue_pair: bool,
    pub is_venue_router: bool,
    pub is_tax_exempt: bool,
    pub is_limit_exempt: bool,
    pub is_blacklisted: bool,
}

impl AddressFlags {
    /// An address belonging to an external exchange/liquidity venue.
    pub fn is_venue(&self) -> bool {
        self.is_venue_pair || self.is_venue_router
    }
}

/// Selector for the privileged flag-mutation entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressFlag {
    VenuePair,
    VenueRouter,
    TaxExempt,
    LimitExempt,
    Blacklisted,
}

/// Transient per-address activity, created lazily on first transfer and
/// updated only after a successful admission where the address is the sender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressActivity {
    pub last_activity_epoch: Epoch,
    pub last_activity_timestamp: Timestamp,
}

/// What the orchestrator must record via `record_activity` once the ledger
/// commit succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Admission {
    pub epoch: Epoch,
    pub timestamp: Timestamp,
}
