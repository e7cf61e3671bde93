//! Transfer Orchestrator Service
//!
//! Top-level entry point sequencing one transfer as a single atomic step:
//! 1. Snapshot both configs
//! 2. Classify the transfer
//! 3. Compute the tax split (zero if either party is tax-exempt)
//! 4. Run the admission guard with the net amount
//! 5. Commit the ledger deltas (debit gross, credit net, burn, reward)
//! 6. Record sender activity
//! 7. Publish the structured event
//!
//! A rejection anywhere before the commit leaves every piece of persisted
//! state untouched. Classification and tax computation are pure, so running
//! them before the guard changes nothing observable: the guard's internal
//! check order still decides which rejection the caller sees.

use crate::domain::classifier::classify;
use crate::domain::config::{AntiAbuseConfig, ConfigChange, ConfigStore, TaxConfig};
use crate::domain::errors::{ConfigError, LedgerError, RegistryError, TransferError};
use crate::domain::guard::{self, GuardInput};
use crate::domain::registry::AddressRegistry;
use crate::domain::tax::{compute_tax, TaxBreakdown};
use crate::domain::value_objects::{
    Address, Admission, Amount, AddressFlag, TransferOutcome, TransferRequest,
};
use crate::events::{
    AntiAbuseConfigChangedPayload, EngineEvent, TaxConfigChangedPayload, TransferTaxedPayload,
};
use crate::ports::inbound::TransferApi;
use crate::ports::outbound::{EpochClock, EventSink, Ledger};
use primitive_types::U256;
use tracing::{debug, info, warn};

/// Counters for monitoring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub executed: u64,
    pub rejected: u64,
    pub total_taxed: Amount,
    pub total_burned: Amount,
    pub total_rewarded: Amount,
}

/// The transfer orchestrator.
///
/// Owns the config store and the address registry; drives the external
/// ledger, epoch clock, and event sink through their ports. All calls are
/// synchronous and bounded; callers serialize them.
pub struct TransferService<L: Ledger, C: EpochClock, S: EventSink> {
    config_store: ConfigStore,
    registry: AddressRegistry,
    owner: Address,
    reward_sink: Address,
    ledger: L,
    clock: C,
    events: S,
    stats: EngineStats,
}

impl<L: Ledger, C: EpochClock, S: EventSink> TransferService<L, C, S> {
    /// Create a service with genesis-default configs. The owner doubles as
    /// the privileged deployer for the trading-open gate; owner and reward
    /// sink are seeded tax- and limit-exempt and protected.
    pub fn new(owner: Address, reward_sink: Address, ledger: L, clock: C, events: S) -> Self {
        Self {
            config_store: ConfigStore::new(),
            registry: AddressRegistry::new(owner, reward_sink),
            owner,
            reward_sink,
            ledger,
            clock,
            events,
            stats: EngineStats::default(),
        }
    }

    pub fn reward_sink(&self) -> Address {
        self.reward_sink
    }

    pub fn registry(&self) -> &AddressRegistry {
        &self.registry
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config_store
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable ledger access for setup (minting, opening trading).
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Privileged governance entry: flip one per-address flag.
    pub fn set_flag(
        &mut self,
        addr: Address,
        flag: AddressFlag,
        value: bool,
    ) -> Result<(), RegistryError> {
        self.registry.set_flag(addr, flag, value)?;
        info!(?addr, ?flag, value, "address flag updated");
        Ok(())
    }

    /// Replace the tax config; publishes the full new config on success.
    pub fn replace_tax_config(&mut self, new: TaxConfig) -> Result<(), ConfigError> {
        if let Err(err) = self.config_store.replace_tax_config(new) {
            warn!(error = %err, "tax config replacement rejected");
            return Err(err);
        }
        self.events
            .publish(EngineEvent::TaxConfigChanged(TaxConfigChangedPayload {
                config: new,
            }));
        info!(
            buy_bps = new.buy_tax_bps,
            sell_bps = new.sell_tax_bps,
            transfer_bps = new.transfer_tax_bps,
            "tax config replaced"
        );
        Ok(())
    }

    /// Replace the anti-abuse config; publishes the full new config on
    /// success.
    pub fn replace_anti_abuse_config(&mut self, new: AntiAbuseConfig) -> Result<(), ConfigError> {
        if let Err(err) = self.config_store.replace_anti_abuse_config(new) {
            warn!(error = %err, "anti-abuse config replacement rejected");
            return Err(err);
        }
        self.events.publish(EngineEvent::AntiAbuseConfigChanged(
            AntiAbuseConfigChangedPayload { config: new },
        ));
        info!(
            cooldown = new.cooldown_seconds,
            anti_bot = new.anti_bot_enabled,
            anti_mev = new.anti_mev_enabled,
            "anti-abuse config replaced"
        );
        Ok(())
    }

    /// Config replacement history, oldest first.
    pub fn config_history(&self) -> &[ConfigChange] {
        self.config_store.history()
    }

    /// Steps 1-4: everything up to but excluding the commit. Pure reads only.
    fn prepare(
        &self,
        request: &TransferRequest,
    ) -> Result<(TransferOutcome, Admission), TransferError> {
        let (tax_config, abuse_config) = self.config_store.current();

        let kind = classify(request.sender, request.recipient, &self.registry);

        let tax_exempt = self.registry.flags(request.sender).is_tax_exempt
            || self.registry.flags(request.recipient).is_tax_exempt;
        let breakdown = if tax_exempt {
            TaxBreakdown::zero()
        } else {
            compute_tax(request.amount, kind, &tax_config)
        };
        let net_amount = request.amount - breakdown.tax_amount;

        let input = GuardInput {
            net_amount,
            recipient_balance: self.ledger.balance_of(request.recipient),
            trading_open: self.ledger.is_trading_open(),
            epoch: self.clock.current_epoch(),
            now: self.clock.now(),
        };
        let admission = guard::evaluate(request, &self.registry, &abuse_config, self.owner, &input)?;

        debug!(
            kind = kind.as_str(),
            amount = %request.amount,
            tax = %breakdown.tax_amount,
            net = %net_amount,
            "transfer prepared"
        );

        Ok((
            TransferOutcome {
                net_amount,
                tax_amount: breakdown.tax_amount,
                burn_amount: breakdown.burn_amount,
                reward_amount: breakdown.reward_amount,
                kind,
            },
            admission,
        ))
    }

    /// Apply the four ledger deltas. The sender balance is pre-checked so the
    /// debit cannot fail after a mutation has happened.
    fn commit(
        &mut self,
        request: &TransferRequest,
        outcome: &TransferOutcome,
    ) -> Result<(), TransferError> {
        let available = self.ledger.balance_of(request.sender);
        if available < request.amount {
            return Err(LedgerError::InsufficientBalance {
                needed: request.amount,
                available,
            }
            .into());
        }

        self.ledger.debit(request.sender, request.amount)?;
        self.ledger.credit(request.recipient, outcome.net_amount);
        if outcome.burn_amount > U256::zero() {
            self.ledger.burn(outcome.burn_amount);
        }
        if outcome.reward_amount > U256::zero() {
            self.ledger.credit(self.reward_sink, outcome.reward_amount);
        }
        Ok(())
    }
}

impl<L: Ledger, C: EpochClock, S: EventSink> TransferApi for TransferService<L, C, S> {
    fn execute(&mut self, request: TransferRequest) -> Result<TransferOutcome, TransferError> {
        let prepared = self.prepare(&request);
        let committed = match prepared {
            Ok((outcome, admission)) => self
                .commit(&request, &outcome)
                .map(|()| (outcome, admission)),
            Err(err) => Err(err),
        };

        let (outcome, admission) = match committed {
            Ok(v) => v,
            Err(err) => {
                self.stats.rejected += 1;
                warn!(
                    sender = ?request.sender,
                    recipient = ?request.recipient,
                    error = %err,
                    "transfer rejected"
                );
                return Err(err);
            }
        };

        self.registry
            .record_activity(request.sender, admission.epoch, admission.timestamp);

        self.events
            .publish(EngineEvent::TransferTaxed(TransferTaxedPayload {
                sender: request.sender,
                recipient: request.recipient,
                amount: request.amount,
                tax_amount: outcome.tax_amount,
                burn_amount: outcome.burn_amount,
                reward_amount: outcome.reward_amount,
                kind: outcome.kind,
            }));

        self.stats.executed += 1;
        self.stats.total_taxed += outcome.tax_amount;
        self.stats.total_burned += outcome.burn_amount;
        self.stats.total_rewarded += outcome.reward_amount;

        info!(
            sender = ?request.sender,
            recipient = ?request.recipient,
            kind = outcome.kind.as_str(),
            amount = %request.amount,
            tax = %outcome.tax_amount,
            "transfer executed"
        );

        Ok(outcome)
    }

    fn quote(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<TransferOutcome, TransferError> {
        let request = TransferRequest::new(sender, recipient, amount);
        self.prepare(&request).map(|(outcome, _)| outcome)
    }
}
