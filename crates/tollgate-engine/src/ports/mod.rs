//! Ports: the engine's boundary traits.
//!
//! Inbound ports are implemented by the engine and driven by callers;
//! outbound ports are implemented by external collaborators (the ledger, the
//! batch scheduler, event consumers).

pub mod inbound;
pub mod outbound;
