//! In-memory implementations of the outbound ports.
//!
//! Used by the test suites and by embedders that keep the whole ledger in
//! process.

mod event_log;
mod manual_clock;
mod memory_ledger;

pub use event_log::EventLog;
pub use manual_clock::ManualClock;
pub use memory_ledger::MemoryLedger;
