use crate::domain::config::{AntiAbuseConfig, TaxConfig};
use crate::domain::value_objects::{Address, Amount, TransferKind};
use serde::{Deserialize, Serialize};

/// Published after every admitted transfer, taxed or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxedPayload {
    pub sender: Address,
    pub recipient: Address,
    pub amount: Amount,
    pub tax_amount: Amount,
    pub burn_amount: Amount,
    pub reward_amount: Amount,
    pub kind: TransferKind,
}

/// Published after a successful tax-config replacement. Carries the full new
/// config for auditability, never a diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfigChangedPayload {
    pub config: TaxConfig,
}

/// Published after a successful anti-abuse-config replacement. Full config,
/// never a diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiAbuseConfigChangedPayload {
    pub config: AntiAbuseConfig,
}
