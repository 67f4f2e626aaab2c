//! # Ledger Properties
//!
//! Invariants checked over generated transaction streams.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ledger, verify_all, AUTHORITY};
    use proptest::prelude::*;
    use rwa_05_ledger::Ledger;
    use shared_types::{Attributes, Quantity, TxPayload};

    const HOLDERS: [&str; 4] = ["h0", "h1", "h2", "outsider"];

    /// One generated action.
    #[derive(Debug, Clone)]
    enum Action {
        Transfer { from: usize, to: usize, amount: Quantity },
        Heartbeat { device: usize },
        Verify { sender: usize, target: usize },
        Seal,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            4 => (0usize..4, 0usize..4, 0u128..400)
                .prop_map(|(from, to, amount)| Action::Transfer { from, to, amount }),
            1 => (0usize..3).prop_map(|device| Action::Heartbeat { device }),
            1 => (0usize..4, 0usize..4)
                .prop_map(|(sender, target)| Action::Verify { sender, target }),
            1 => Just(Action::Seal),
        ]
    }

    fn balances(ledger: &Ledger, symbol: &str) -> Vec<Quantity> {
        HOLDERS
            .iter()
            .map(|h| ledger.get_balance(symbol, h))
            .collect()
    }

    /// Three verified holders sharing `supply` of X, one registered device.
    fn seeded(supply: Quantity) -> Ledger {
        let (ledger, _) = ledger();
        verify_all(&ledger, &HOLDERS[..3]);
        ledger
            .submit(ledger.transaction("h0", TxPayload::issue_asset("X", supply)))
            .unwrap();
        ledger
            .submit(ledger.transaction("h1", TxPayload::register_device("dev-0", "sensor")))
            .unwrap();
        ledger.produce_block("producer");
        ledger
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_supply_conserved_and_chain_linked(
            supply in 1u128..10_000,
            actions in proptest::collection::vec(action(), 1..40)
        ) {
            let ledger = seeded(supply);

            for (n, action) in actions.into_iter().enumerate() {
                let tx = match action {
                    Action::Transfer { from, to, amount } => ledger.transaction(
                        HOLDERS[from],
                        TxPayload::transfer("X", HOLDERS[to], amount),
                    ),
                    Action::Heartbeat { device } => ledger.transaction(
                        "anyone",
                        TxPayload::heartbeat(format!("dev-{device}")),
                    ),
                    Action::Verify { sender, target } => ledger.transaction(
                        HOLDERS[sender],
                        TxPayload::verify_identity(HOLDERS[target], None, Attributes::new()),
                    ),
                    Action::Seal => {
                        let tip = ledger.latest_block();
                        let report = ledger.produce_block(format!("producer-{n}"));
                        prop_assert_eq!(report.block.previous_digest(), tip.digest());
                        prop_assert_eq!(report.block.index(), tip.index() + 1);
                        prop_assert!(report.faulted.is_empty());
                        continue;
                    }
                };
                ledger.submit(tx).unwrap();
            }
            ledger.produce_block("final");

            let total: Quantity = balances(&ledger, "X").iter().sum();
            prop_assert_eq!(total, supply);
            prop_assert!(!ledger.has_valid_identity("outsider"));
            prop_assert_eq!(ledger.get_balance("X", "outsider"), 0);
            prop_assert!(ledger.verify_chain().is_ok());
        }

        #[test]
        fn prop_rejected_transfer_leaves_balances(
            supply in 1u128..10_000,
            amount in 0u128..20_000,
            to_outsider in any::<bool>()
        ) {
            let ledger = seeded(supply);
            let before = balances(&ledger, "X");
            let receiver = if to_outsider { "outsider" } else { "h1" };

            let tx_id = ledger
                .submit(ledger.transaction("h0", TxPayload::transfer("X", receiver, amount)))
                .unwrap();
            let report = ledger.produce_block("producer");

            if report.was_rejected(&tx_id) {
                prop_assert!(!report.block.contains(&tx_id));
                prop_assert_eq!(balances(&ledger, "X"), before);
            } else {
                prop_assert!(!to_outsider);
                prop_assert!(amount <= supply);
                prop_assert_eq!(ledger.get_balance("X", "h1"), amount);
            }
        }
    }

    #[test]
    fn test_stored_digests_reproduce() {
        let (ledger, clock) = ledger();
        verify_all(&ledger, &["a", "b"]);
        ledger
            .submit(ledger.transaction("a", TxPayload::issue_asset("X", 5)))
            .unwrap();
        clock.advance(10);
        ledger
            .submit(ledger.transaction("a", TxPayload::transfer("X", "b", 2)))
            .unwrap();
        ledger.produce_block("producer");

        for index in 0..=ledger.height() {
            let block = ledger.block(index).unwrap();
            assert_eq!(&block.compute_digest(), block.digest());
            for tx in block.transactions() {
                assert_eq!(&tx.compute_id(), tx.id());
            }
        }
        assert!(ledger.verify_chain().is_ok());
    }

    #[test]
    fn test_non_authority_never_touches_target() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["target"]);
        let before = ledger.get_identity("target");

        ledger
            .submit(ledger.transaction("target", TxPayload::revoke_identity("target")))
            .unwrap();
        ledger
            .submit(ledger.transaction(
                "target",
                TxPayload::verify_identity("target", Some("did:evil:1".into()), Attributes::new()),
            ))
            .unwrap();
        let report = ledger.produce_block("producer");

        assert_eq!(report.rejected.len(), 2);
        assert_eq!(ledger.get_identity("target"), before);
        assert!(!ledger.is_authority("target"));
        assert!(ledger.is_authority(AUTHORITY));
    }
}
