//! # Ledger Flows
//!
//! End-to-end scenarios: identity bootstrap, asset issuance and transfer,
//! device rewards, and the block shape they leave behind.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ledger, verify_all, AUTHORITY};
    use rwa_05_ledger::{Ledger, LedgerConfig, LedgerError};
    use shared_types::{
        Attributes, DeviceStatus, IdentityStatus, ManualClock, RejectionKind, Transaction, TxKind,
        TxPayload,
    };
    use std::io::Write;
    use std::sync::Arc;

    // =========================================================================
    // ASSETS
    // =========================================================================

    #[test]
    fn test_verify_issue_transfer() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["issuer", AUTHORITY]);

        ledger
            .submit(ledger.transaction("issuer", TxPayload::issue_asset("X", 1000)))
            .unwrap();
        ledger
            .submit(ledger.transaction("issuer", TxPayload::transfer("X", AUTHORITY, 500)))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert_eq!(report.included(), 2);
        assert_eq!(ledger.get_balance("X", "issuer"), 500);
        assert_eq!(ledger.get_balance("X", AUTHORITY), 500);

        let asset = ledger.get_asset("X").unwrap();
        assert_eq!(asset.total_supply, 1000);
        assert_eq!(asset.issuer, "issuer");
    }

    #[test]
    fn test_transaction_order_within_block_matters() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["issuer", "receiver"]);

        // Transfer is routed before the issuance it depends on.
        let transfer = ledger.transaction("issuer", TxPayload::transfer("X", "receiver", 1));
        let transfer_id = ledger.submit(transfer).unwrap();
        ledger
            .submit(ledger.transaction("issuer", TxPayload::issue_asset("X", 10)))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert_eq!(report.included(), 1);
        assert!(report.was_rejected(&transfer_id));
        assert_eq!(
            report.rejected[0].reason.kind(),
            RejectionKind::InsufficientBalance
        );
        assert_eq!(ledger.get_balance("X", "issuer"), 10);
    }

    #[test]
    fn test_unverified_sender_transfer_is_dropped() {
        let (ledger, clock) = ledger();
        verify_all(&ledger, &["issuer", "receiver"]);
        ledger
            .submit(ledger.transaction("issuer", TxPayload::issue_asset("X", 100)))
            .unwrap();
        ledger.produce_block("producer");
        clock.advance(1_000);

        let tx = ledger.transaction("stranger", TxPayload::transfer("X", "receiver", 5));
        let tx_id = ledger.submit(tx).unwrap();
        let report = ledger.produce_block("producer");

        assert!(!report.block.contains(&tx_id));
        assert!(report.was_rejected(&tx_id));
        assert_eq!(ledger.get_balance("X", "issuer"), 100);
        assert_eq!(ledger.get_balance("X", "receiver"), 0);
        assert_eq!(ledger.get_balance("X", "stranger"), 0);
    }

    #[test]
    fn test_transfer_to_revoked_receiver_rejected() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["issuer", "receiver"]);
        ledger
            .submit(ledger.transaction("issuer", TxPayload::issue_asset("X", 100)))
            .unwrap();
        ledger
            .submit(ledger.transaction(AUTHORITY, TxPayload::revoke_identity("receiver")))
            .unwrap();
        let tx_id = ledger
            .submit(ledger.transaction("issuer", TxPayload::transfer("X", "receiver", 5)))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.was_rejected(&tx_id));
        assert_eq!(
            ledger.get_identity("receiver").unwrap().status,
            IdentityStatus::Revoked
        );
        assert_eq!(ledger.get_balance("X", "issuer"), 100);
    }

    // =========================================================================
    // IDENTITY
    // =========================================================================

    #[test]
    fn test_identity_record_contents() {
        let (ledger, _) = ledger();
        let mut attributes = Attributes::new();
        attributes.insert("jurisdiction".into(), "EU".into());
        ledger
            .submit(ledger.transaction(
                AUTHORITY,
                TxPayload::verify_identity("0xabcdef0123456789", None, attributes),
            ))
            .unwrap();
        ledger.produce_block("producer");

        let record = ledger.get_identity("0xabcdef0123456789").unwrap();
        assert_eq!(record.did, "did:rwa:0xabcdef");
        assert_eq!(record.status, IdentityStatus::Verified);
        assert_eq!(
            record.attributes.get("jurisdiction").map(String::as_str),
            Some("EU")
        );
    }

    #[test]
    fn test_revoke_of_unknown_identity_is_accepted_noop() {
        let (ledger, _) = ledger();
        let digest_before = ledger.state_digest();
        let tx_id = ledger
            .submit(ledger.transaction(AUTHORITY, TxPayload::revoke_identity("ghost")))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.block.contains(&tx_id));
        assert!(ledger.get_identity("ghost").is_none());
        assert_eq!(ledger.state_digest(), digest_before);
    }

    #[test]
    fn test_non_authority_cannot_verify() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["user"]);

        // A verified user is still not an authority.
        let tx = ledger.transaction(
            "user",
            TxPayload::verify_identity("friend", None, Attributes::new()),
        );
        let tx_id = ledger.submit(tx).unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.was_rejected(&tx_id));
        assert_eq!(report.rejected[0].kind, TxKind::IdentityClaim);
        assert!(ledger.get_identity("friend").is_none());
    }

    // =========================================================================
    // DEVICES
    // =========================================================================

    #[test]
    fn test_device_heartbeat_rewards_once_per_heartbeat() {
        let (ledger, clock) = ledger();
        verify_all(&ledger, &["owner"]);

        let payload = TxPayload::register_device("meter-7", "smart_meter");
        ledger.submit(ledger.transaction("owner", payload)).unwrap();
        ledger.produce_block("producer");
        let registered = ledger.get_device("meter-7").unwrap();
        assert_eq!(registered.status, DeviceStatus::Active);
        assert_eq!(ledger.get_balance("INFRA", "owner"), 0);

        clock.advance(60_000);
        let heartbeat_time = clock.advance(0);
        ledger
            .submit(ledger.transaction("meter-7", TxPayload::heartbeat("meter-7")))
            .unwrap();
        ledger.produce_block("producer");

        assert_eq!(ledger.get_balance("INFRA", "owner"), 10);
        assert_eq!(ledger.get_balance("INFRA", "meter-7"), 0);
        assert_eq!(
            ledger.get_device("meter-7").unwrap().last_heartbeat,
            heartbeat_time
        );

        clock.advance(60_000);
        ledger
            .submit(ledger.transaction("meter-7", TxPayload::heartbeat("meter-7")))
            .unwrap();
        ledger.produce_block("producer");
        assert_eq!(ledger.get_balance("INFRA", "owner"), 20);
    }

    #[test]
    fn test_heartbeat_for_unregistered_device() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["owner"]);
        let tx_id = ledger
            .submit(ledger.transaction("owner", TxPayload::heartbeat("ghost")))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.was_rejected(&tx_id));
        assert_eq!(report.rejected[0].reason.kind(), RejectionKind::NotFound);
        assert_eq!(ledger.get_balance("INFRA", "owner"), 0);
        assert_eq!(ledger.get_balance("INFRA", "ghost"), 0);
    }

    #[test]
    fn test_reward_from_config() {
        let config = LedgerConfig::from_json_str(
            r#"{"authorities": ["a"], "reward": {"symbol": "SUN", "amount": 3}}"#,
        )
        .unwrap();
        let ledger = Ledger::with_clock(config, Arc::new(ManualClock::new(0))).unwrap();
        ledger
            .submit(ledger.transaction(
                "a",
                TxPayload::verify_identity("owner", None, Attributes::new()),
            ))
            .unwrap();
        ledger
            .submit(ledger.transaction("owner", TxPayload::register_device("p1", "panel")))
            .unwrap();
        ledger
            .submit(ledger.transaction("owner", TxPayload::heartbeat("p1")))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert_eq!(report.included(), 3);
        assert_eq!(ledger.reward_symbol(), "SUN");
        assert_eq!(ledger.get_balance("SUN", "owner"), 3);
        assert_eq!(ledger.get_balance("INFRA", "owner"), 0);
    }

    #[test]
    fn test_ledger_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"authorities": ["file-auth"], "genesis_generator": "BOOT"}}"#).unwrap();

        let config = LedgerConfig::from_file(file.path()).unwrap();
        let ledger = Ledger::with_clock(config, Arc::new(ManualClock::new(0))).unwrap();
        assert!(ledger.is_authority("file-auth"));
        assert_eq!(ledger.block(0).unwrap().generator(), "BOOT");
    }

    // =========================================================================
    // CHAIN
    // =========================================================================

    #[test]
    fn test_validator_vote_is_included_without_effect() {
        let (ledger, _) = ledger();
        let digest_before = ledger.state_digest();
        let tx_id = ledger
            .submit(ledger.transaction("v", TxPayload::ValidatorVote { ballot: vec![1, 2] }))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.block.contains(&tx_id));
        assert_eq!(ledger.state_digest(), digest_before);
    }

    #[test]
    fn test_signature_is_carried_not_checked() {
        let (ledger, _) = ledger();
        let unsigned = ledger.transaction(
            AUTHORITY,
            TxPayload::verify_identity("user", None, Attributes::new()),
        );
        let signed = unsigned.clone().with_signature("not-a-real-signature");
        assert_eq!(signed.id(), unsigned.id());

        ledger.submit(signed).unwrap();
        let report = ledger.produce_block("producer");
        assert_eq!(
            report.block.transactions()[0].signature(),
            Some("not-a-real-signature")
        );
        assert!(ledger.has_valid_identity("user"));
    }

    #[test]
    fn test_altered_transaction_cannot_reach_the_ledger() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["issuer"]);
        let tx = ledger.transaction("issuer", TxPayload::issue_asset("X", 5));
        let json = serde_json::to_string(&tx).unwrap();

        // Inflate the supply but keep the stored id.
        let inflated = json.replace(r#""supply":"5""#, r#""supply":"5000000""#);
        assert_ne!(inflated, json);
        assert!(serde_json::from_str::<Transaction>(&inflated).is_err());

        let decoded: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id(), tx.id());
        ledger.submit(decoded).unwrap();
        let report = ledger.produce_block("producer");

        assert!(report.block.contains(tx.id()));
        assert_eq!(ledger.get_balance("X", "issuer"), 5);
        assert!(ledger.verify_chain().is_ok());
    }

    #[test]
    fn test_generator_is_recorded_verbatim() {
        let (ledger, _) = ledger();
        let report = ledger.produce_block("anyone-at-all");
        assert_eq!(report.block.generator(), "anyone-at-all");
        assert!(!ledger.is_authority("anyone-at-all"));
    }

    #[test]
    fn test_pool_full_is_an_error() {
        let config = LedgerConfig {
            max_pending: Some(2),
            ..LedgerConfig::default()
        };
        let ledger = Ledger::with_clock(config, Arc::new(ManualClock::new(0))).unwrap();
        for n in 0..2 {
            ledger
                .submit(ledger.transaction("a", TxPayload::heartbeat(format!("d{n}"))))
                .unwrap();
        }
        assert!(matches!(
            ledger.submit(ledger.transaction("a", TxPayload::heartbeat("d2"))),
            Err(LedgerError::PoolFull { capacity: 2 })
        ));

        ledger.produce_block("producer");
        assert_eq!(ledger.pending_count(), 0);
        assert!(ledger
            .submit(ledger.transaction("a", TxPayload::heartbeat("d2")))
            .is_ok());
    }
}
