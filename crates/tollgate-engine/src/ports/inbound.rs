//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::TransferError;
use crate::domain::value_objects::{Address, Amount, TransferOutcome, TransferRequest};

/// The engine's transfer entry points.
///
/// Callers must serialize all `execute` calls and all config/flag mutations
/// behind a single ordering mechanism; no call may observe a partially
/// applied predecessor.
pub trait TransferApi {
    /// Apply one transfer as a single atomic step: admission, classification,
    /// tax computation, ledger mutation, activity recording, event emission.
    /// Any rejection aborts the whole step with no partial mutation.
    fn execute(&mut self, request: TransferRequest) -> Result<TransferOutcome, TransferError>;

    /// Read-only preview: runs the same pipeline as [`Self::execute`] up to
    /// but excluding the commit. Never mutates registry, config, or ledger.
    fn quote(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<TransferOutcome, TransferError>;
}
