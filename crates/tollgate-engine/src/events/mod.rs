//! Structured events emitted by the engine.

mod payloads;

pub use payloads::{
    AntiAbuseConfigChangedPayload, TaxConfigChangedPayload, TransferTaxedPayload,
};

use serde::{Deserialize, Serialize};

/// Envelope for everything the engine publishes to its event sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    TransferTaxed(TransferTaxedPayload),
    TaxConfigChanged(TaxConfigChangedPayload),
    AntiAbuseConfigChanged(AntiAbuseConfigChangedPayload),
}
