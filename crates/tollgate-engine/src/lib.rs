//! # Tollgate Engine
//!
//! Fee-accounting and abuse-prevention engine for a fungible-token ledger.
//! Every balance-transferring operation is classified as a venue buy, a venue
//! sell, or a peer transfer, taxed in exact basis-point arithmetic, split
//! between a burn sink and a reward sink with no remainder loss, and screened
//! by a per-address anti-bot / anti-MEV guard before any ledger mutation.
//!
//! ## Architecture
//!
//! - **Domain**: Pure types and algorithms (configs, classifier, tax
//!   calculator, admission guard, address registry, invariants)
//! - **Ports**: Inbound ([`TransferApi`]) and outbound ([`Ledger`],
//!   [`EpochClock`], [`EventSink`]) collaborator traits
//! - **Adapters**: In-memory implementations of the outbound ports
//! - **Application**: [`TransferService`] orchestrating one atomic transfer
//!   step at a time
//! - **Events**: Structured payloads for downstream indexers
//!
//! ## Execution model
//!
//! Fully sequential: one request is fully applied, or fully rejected, before
//! the next is considered. No call suspends, blocks, or retries internally.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod events;
pub mod ports;

pub use adapters::{EventLog, ManualClock, MemoryLedger};
pub use application::service::{EngineStats, TransferService};
pub use domain::classifier::classify;
pub use domain::config::{
    AntiAbuseConfig, ConfigChange, ConfigStore, TaxConfig, BASIS_POINTS, MAX_TAX_BPS,
    MIN_COOLDOWN_SECS,
};
pub use domain::errors::{ConfigError, LedgerError, RegistryError, TransferError};
pub use domain::registry::AddressRegistry;
pub use domain::tax::{compute_tax, TaxBreakdown};
pub use domain::value_objects::*;
pub use events::{
    AntiAbuseConfigChangedPayload, EngineEvent, TaxConfigChangedPayload, TransferTaxedPayload,
};
pub use ports::inbound::TransferApi;
pub use ports::outbound::{EpochClock, EventSink, Ledger};
