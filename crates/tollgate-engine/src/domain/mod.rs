//! Core domain for the Tollgate engine.
//!
//! Everything in this module is pure: no I/O, no clocks, no global state.
//! Stateful holders ([`config::ConfigStore`], [`registry::AddressRegistry`])
//! are plain owned values mutated only through validated operations.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod guard;
pub mod invariants;
pub mod registry;
pub mod tax;
pub mod value_objects;
