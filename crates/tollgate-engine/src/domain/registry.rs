//! Per-address flags and transient activity state.

use super::errors::RegistryError;
use super::value_objects::{
    Address, AddressActivity, AddressFlag, AddressFlags, Epoch, Timestamp,
};
use std::collections::{HashMap, HashSet};

/// Registry of per-address capability flags and transient activity.
///
/// Flags are set only by a privileged governance collaborator. Activity is
/// recorded only by the orchestrator after a successful admission. The owner
/// and reward-sink addresses are tax- and limit-exempt from creation and can
/// never be blacklisted.
#[derive(Clone, Debug)]
pub struct AddressRegistry {
    flags: HashMap<Address, AddressFlags>,
    activity: HashMap<Address, AddressActivity>,
    protected: HashSet<Address>,
}

impl AddressRegistry {
    /// Create a registry with the owner and reward sink seeded as exempt and
    /// protected.
    pub fn new(owner: Address, reward_sink: Address) -> Self {
        let exempt = AddressFlags {
            is_tax_exempt: true,
            is_limit_exempt: true,
            ..Default::default()
        };
        let mut flags = HashMap::new();
        flags.insert(owner, exempt);
        flags.insert(reward_sink, exempt);

        let mut protected = HashSet::new();
        protected.insert(owner);
        protected.insert(reward_sink);

        Self {
            flags,
            activity: HashMap::new(),
            protected,
        }
    }

    /// Flags for an address; all-false for unseen addresses.
    pub fn flags(&self, addr: Address) -> AddressFlags {
        self.flags.get(&addr).copied().unwrap_or_default()
    }

    /// Privileged flag mutation. Blacklisting a protected address is rejected.
    pub fn set_flag(
        &mut self,
        addr: Address,
        flag: AddressFlag,
        value: bool,
    ) -> Result<(), RegistryError> {
        if flag == AddressFlag::Blacklisted && value && self.protected.contains(&addr) {
            return Err(RegistryError::ProtectedAddress(addr));
        }
        let entry = self.flags.entry(addr).or_default();
        match flag {
            AddressFlag::VenuePair => entry.is_venue_pair = value,
            AddressFlag::VenueRouter => entry.is_venue_router = value,
            AddressFlag::TaxExempt => entry.is_tax_exempt = value,
            AddressFlag::LimitExempt => entry.is_limit_exempt = value,
            AddressFlag::Blacklisted => entry.is_blacklisted = value,
        }
        Ok(())
    }

    /// Activity for an address; epoch 0 / timestamp 0 for unseen addresses.
    pub fn activity(&self, addr: Address) -> AddressActivity {
        self.activity.get(&addr).copied().unwrap_or_default()
    }

    /// Record sender activity after a successful admission. Called only by
    /// the orchestrator.
    pub fn record_activity(&mut self, addr: Address, epoch: Epoch, timestamp: Timestamp) {
        let entry = self.activity.entry(addr).or_default();
        entry.last_activity_epoch = epoch;
        entry.last_activity_timestamp = timestamp;
    }

    pub fn is_protected(&self, addr: Address) -> bool {
        self.protected.contains(&addr)
    }
}
