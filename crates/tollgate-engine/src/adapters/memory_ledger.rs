//! HashMap-backed ledger adapter.

use crate::domain::errors::LedgerError;
use crate::domain::value_objects::{Address, Amount};
use crate::ports::outbound::Ledger;
use primitive_types::U256;
use std::collections::HashMap;

/// In-memory fungible-token ledger: balances, total supply, trading flag.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
    trading_open: bool,
}

impl MemoryLedger {
    /// Empty ledger with trading closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new tokens on `addr`, growing total supply.
    pub fn mint(&mut self, addr: Address, amount: Amount) {
        *self.balances.entry(addr).or_insert_with(U256::zero) += amount;
        self.total_supply += amount;
    }

    /// One-way flip of the ledger-wide trading flag.
    pub fn open_trading(&mut self) {
        self.trading_open = true;
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, addr: Address) -> Amount {
        self.balances.get(&addr).copied().unwrap_or_else(U256::zero)
    }

    fn debit(&mut self, addr: Address, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(addr);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.balances.insert(addr, available - amount);
        Ok(())
    }

    fn credit(&mut self, addr: Address, amount: Amount) {
        *self.balances.entry(addr).or_insert_with(U256::zero) += amount;
    }

    fn burn(&mut self, amount: Amount) {
        self.total_supply = self.total_supply.saturating_sub(amount);
    }

    fn is_trading_open(&self) -> bool {
        self.trading_open
    }
}
