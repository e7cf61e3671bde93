//! Transaction classifier.
//!
//! Pure function, no side effects, no failure modes: every pair of addresses
//! yields exactly one [`TransferKind`].

use super::registry::AddressRegistry;
use super::value_objects::{Address, TransferKind};

/// Classify a transfer by venue membership, sender side winning ties:
/// venue sender means someone is buying from the venue, venue recipient means
/// someone is selling into it, anything else is a peer transfer.
pub fn classify(sender: Address, recipient: Address, registry: &AddressRegistry) -> TransferKind {
    if registry.flags(sender).is_venue() {
        TransferKind::Buy
    } else if registry.flags(recipient).is_venue() {
        TransferKind::Sell
    } else {
        TransferKind::Transfer
    }
}
