//! # Config replacement and flag administration flows
//!
//! Exercises the governance-facing surface: validated whole-config
//! replacement, change history, config-changed events, and the protected
//! address rules.

#[cfg(test)]
mod tests {
    use primitive_types::{H160, U256};
    use tollgate_engine::{
        Address, AddressFlag, AntiAbuseConfig, ConfigChange, ConfigError, EngineEvent, EventLog,
        ManualClock, MemoryLedger, RegistryError, TaxConfig, TransferApi, TransferError,
        TransferRequest, TransferService,
    };

    use crate::init_tracing;

    const OWNER: u8 = 1;
    const SINK: u8 = 2;

    fn addr(val: u8) -> Address {
        H160::from_low_u64_be(val as u64)
    }

    fn service() -> (
        TransferService<MemoryLedger, ManualClock, EventLog>,
        EventLog,
    ) {
        init_tracing();
        let events = EventLog::new();
        let mut ledger = MemoryLedger::new();
        ledger.open_trading();
        let service = TransferService::new(
            addr(OWNER),
            addr(SINK),
            ledger,
            ManualClock::at(1, 1_000),
            events.clone(),
        );
        (service, events)
    }

    // =========================================================================
    // CONFIG REPLACEMENT
    // =========================================================================

    #[test]
    fn test_valid_replacement_publishes_full_config_and_history() {
        let (mut svc, events) = service();
        let old = svc.config_store().tax();
        let new = TaxConfig {
            buy_tax_bps: 300,
            sell_tax_bps: 400,
            transfer_tax_bps: 0,
            burn_share_bps: 7_000,
            reward_share_bps: 3_000,
        };

        svc.replace_tax_config(new).unwrap();

        assert_eq!(svc.config_store().tax(), new);
        assert_eq!(svc.config_history(), &[ConfigChange::Tax { old, new }]);

        let published = events.snapshot();
        assert_eq!(published.len(), 1);
        match &published[0] {
            EngineEvent::TaxConfigChanged(payload) => assert_eq!(payload.config, new),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_split_rejected_atomically_with_no_event() {
        let (mut svc, events) = service();
        let before = svc.config_store().tax();

        let result = svc.replace_tax_config(TaxConfig {
            burn_share_bps: 9_999,
            reward_share_bps: 2,
            ..TaxConfig::default()
        });

        assert_eq!(
            result,
            Err(ConfigError::InvalidBurnRewardSplit {
                burn_bps: 9_999,
                reward_bps: 2
            })
        );
        assert_eq!(svc.config_store().tax(), before);
        assert!(svc.config_history().is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_anti_abuse_replacement_lifecycle() {
        let (mut svc, events) = service();

        // Too-short cooldown rejected while anti-bot is enabled
        let result = svc.replace_anti_abuse_config(AntiAbuseConfig {
            cooldown_seconds: 10,
            ..AntiAbuseConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::CooldownTooShort { .. })));

        // Wallet limit below tx limit rejected
        let result = svc.replace_anti_abuse_config(AntiAbuseConfig {
            max_tx_amount: U256::from(1_000),
            max_wallet_amount: U256::from(500),
            ..AntiAbuseConfig::default()
        });
        assert_eq!(result, Err(ConfigError::InvalidLimits));

        // A valid replacement lands and is published
        let new = AntiAbuseConfig {
            cooldown_seconds: 120,
            anti_mev_enabled: false,
            ..AntiAbuseConfig::default()
        };
        svc.replace_anti_abuse_config(new).unwrap();

        assert_eq!(svc.config_store().anti_abuse(), new);
        let published = events.snapshot();
        assert_eq!(published.len(), 1);
        assert!(matches!(
            published[0],
            EngineEvent::AntiAbuseConfigChanged(_)
        ));
    }

    #[test]
    fn test_history_interleaves_both_config_families() {
        let (mut svc, _) = service();
        let tax = TaxConfig {
            transfer_tax_bps: 0,
            ..TaxConfig::default()
        };
        let abuse = AntiAbuseConfig {
            anti_bot_enabled: false,
            cooldown_seconds: 0,
            ..AntiAbuseConfig::default()
        };

        svc.replace_tax_config(tax).unwrap();
        svc.replace_anti_abuse_config(abuse).unwrap();

        let history = svc.config_history();
        assert_eq!(history.len(), 2);
        assert!(matches!(history[0], ConfigChange::Tax { .. }));
        assert!(matches!(history[1], ConfigChange::AntiAbuse { .. }));
    }

    // =========================================================================
    // FLAG ADMINISTRATION
    // =========================================================================

    #[test]
    fn test_protected_addresses_cannot_be_blacklisted() {
        let (mut svc, _) = service();

        for protected in [addr(OWNER), addr(SINK)] {
            assert_eq!(
                svc.set_flag(protected, AddressFlag::Blacklisted, true),
                Err(RegistryError::ProtectedAddress(protected))
            );
        }
        // Any other flag on protected addresses is fine
        svc.set_flag(addr(SINK), AddressFlag::VenueRouter, true)
            .unwrap();
    }

    #[test]
    fn test_blacklisted_venue_pair_fails_as_blacklisted_sender() {
        let (mut svc, _) = service();
        svc.ledger_mut().mint(addr(7), U256::from(10_000));
        svc.set_flag(addr(7), AddressFlag::VenuePair, true).unwrap();
        svc.set_flag(addr(7), AddressFlag::Blacklisted, true).unwrap();

        // Blacklist wins over venue classification
        let result = svc.execute(TransferRequest::new(
            addr(7),
            addr(8),
            U256::from(100),
        ));
        assert_eq!(result, Err(TransferError::BlacklistedSender(addr(7))));
    }

    #[test]
    fn test_unblacklisting_restores_admission() {
        let (mut svc, _) = service();
        svc.ledger_mut().mint(addr(7), U256::from(10_000));
        svc.set_flag(addr(7), AddressFlag::Blacklisted, true).unwrap();

        let req = TransferRequest::new(addr(7), addr(8), U256::from(100));
        assert_eq!(
            svc.execute(req),
            Err(TransferError::BlacklistedSender(addr(7)))
        );

        svc.set_flag(addr(7), AddressFlag::Blacklisted, false).unwrap();
        svc.execute(req).unwrap();
    }
}
