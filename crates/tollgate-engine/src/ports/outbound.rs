//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::LedgerError;
use crate::domain::value_objects::{Address, Amount, Epoch, Timestamp};
use crate::events::EngineEvent;

/// The external fungible-token ledger the engine drives.
///
/// Ordinary balance/allowance bookkeeping lives behind this trait; the engine
/// only debits, credits, burns, and reads.
pub trait Ledger {
    fn balance_of(&self, addr: Address) -> Amount;

    /// Remove `amount` from `addr`. Fails only on insufficient balance; the
    /// engine pre-validates, so a failure here aborts the whole step.
    fn debit(&mut self, addr: Address, amount: Amount) -> Result<(), LedgerError>;

    fn credit(&mut self, addr: Address, amount: Amount);

    /// Permanently remove `amount` from total supply. The tokens were already
    /// debited from the sender and credited nowhere.
    fn burn(&mut self, amount: Amount);

    /// Ledger-wide trading flag, owned by the ledger collaborator.
    fn is_trading_open(&self) -> bool;
}

/// Monotonic epoch and timestamp source.
///
/// The epoch is an opaque batch marker incremented by whatever process groups
/// admitted requests into batches, not a wall-clock timer. Live epochs start
/// at 1; epoch 0 marks a never-active address.
pub trait EpochClock {
    fn current_epoch(&self) -> Epoch;
    fn now(&self) -> Timestamp;
}

/// Consumer of the structured event stream (indexers, telemetry, staking).
pub trait EventSink {
    fn publish(&mut self, event: EngineEvent);
}
