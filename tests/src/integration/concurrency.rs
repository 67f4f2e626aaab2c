//! # Shared Ledger
//!
//! Submitters, a producer and readers on separate threads against one
//! `Ledger`.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ledger, verify_all};
    use parking_lot::Mutex;
    use shared_types::{Digest, Transaction, TxPayload};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_submitters_and_producer() {
        let (ledger, _) = ledger();
        verify_all(&ledger, &["issuer", "r0", "r1", "r2", "r3"]);
        ledger
            .submit(ledger.transaction("issuer", TxPayload::issue_asset("X", 1_000)))
            .unwrap();
        ledger.produce_block("producer");

        let ledger = Arc::new(ledger);
        let submitted = Arc::new(Mutex::new(Vec::<Digest>::new()));

        let submitters: Vec<_> = (0..4u64)
            .map(|worker| {
                let ledger = Arc::clone(&ledger);
                let submitted = Arc::clone(&submitted);
                thread::spawn(move || {
                    for n in 0..25u64 {
                        // Distinct timestamps keep ids distinct.
                        let tx = Transaction::new(
                            "issuer",
                            TxPayload::transfer("X", format!("r{worker}"), 1),
                            worker * 100 + n,
                        );
                        submitted.lock().push(ledger.submit(tx).unwrap());
                    }
                })
            })
            .collect();

        let producer = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                let mut included = Vec::new();
                for _ in 0..10 {
                    let report = ledger.produce_block("producer");
                    assert!(report.rejected.is_empty());
                    included.extend(report.block.transaction_ids().copied());
                    thread::yield_now();
                }
                included
            })
        };

        let reader = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for _ in 0..50 {
                    let total: u128 = ["issuer", "r0", "r1", "r2", "r3"]
                        .iter()
                        .map(|h| ledger.get_balance("X", h))
                        .sum();
                    // A read never observes a half-applied transfer.
                    assert_eq!(total, 1_000);
                    thread::yield_now();
                }
            })
        };

        for handle in submitters {
            handle.join().unwrap();
        }
        let mut included = producer.join().unwrap();
        reader.join().unwrap();

        let last = ledger.produce_block("producer");
        included.extend(last.block.transaction_ids().copied());

        let submitted: HashSet<Digest> = submitted.lock().iter().copied().collect();
        let included: HashSet<Digest> = included.into_iter().collect();
        assert_eq!(submitted.len(), 100);
        assert_eq!(included, submitted);
        assert_eq!(ledger.get_balance("X", "issuer"), 900);
        for worker in 0..4 {
            assert_eq!(ledger.get_balance("X", &format!("r{worker}")), 25);
        }
        assert_eq!(ledger.pending_count(), 0);
        assert!(ledger.verify_chain().is_ok());
    }
}
