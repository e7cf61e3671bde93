//! Application layer: the transfer orchestrator service.

pub mod service;
