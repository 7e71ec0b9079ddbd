    use std::time::Duration;

    use super::*;

    fn id(s: &str) -> Identity {
        Identity::new(s).expect("identity")
    }

    fn code(s: &str) -> AssetCode {
        AssetCode::parse(s).expect("code")
    }

    fn ledger() -> SimulatedLedger {
        SimulatedLedger::new(SettlementConfig::default())
    }

    async fn create(ledger: &SimulatedLedger, c: &str, owner: &str) -> Result<Receipt, LedgerError> {
        ledger
            .create_asset(CreateAsset {
                code: code(c),
                url: "https://github.com/acme/tool".to_string(),
                creator: id(owner),
            })
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn create_waits_for_settlement_delay() {
        let ledger = ledger();
        let start = tokio::time::Instant::now();
        let receipt = create(&ledger, "TOOL", "GALICE").await.expect("create");
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.code.as_str(), "TOOL");
        assert_eq!(receipt.id.len(), 64);

        let asset = ledger.asset(&code("TOOL")).expect("asset recorded");
        assert_eq!(asset.issuer, id("GALICE"));
        assert_eq!(asset.holder, id("GALICE"));
        assert_eq!(asset.supply, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_code_is_rejected_before_settlement() {
        let ledger = ledger();
        create(&ledger, "TOOL", "GALICE").await.expect("create");

        let start = tokio::time::Instant::now();
        let err = create(&ledger, "tool", "GBOB").await.expect_err("duplicate");
        assert_eq!(err, LedgerError::AssetExists(code("TOOL")));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn update_by_non_issuer_is_unauthorized() {
        let ledger = ledger();
        create(&ledger, "TOOL", "GALICE").await.expect("create");

        let err = ledger
            .update_metadata(UpdateMetadata {
                code: code("TOOL"),
                version: "v2.0.1".to_string(),
                notes: "api".to_string(),
                issuer: id("GMALLORY"),
            })
            .await
            .expect_err("non-issuer");
        assert!(matches!(err, LedgerError::Unauthorized { .. }));
        assert_eq!(ledger.asset(&code("TOOL")).and_then(|a| a.version), None);
    }

    #[tokio::test(start_paused = true)]
    async fn update_unknown_asset_fails() {
        let ledger = ledger();
        let err = ledger
            .update_metadata(UpdateMetadata {
                code: code("NOPE"),
                version: "v1".to_string(),
                notes: "n".to_string(),
                issuer: id("GALICE"),
            })
            .await
            .expect_err("unknown");
        assert_eq!(err, LedgerError::UnknownAsset(code("NOPE")));
    }

    #[tokio::test(start_paused = true)]
    async fn issuer_keeps_update_rights_after_transfer() {
        let ledger = ledger();
        create(&ledger, "TOOL", "GALICE").await.expect("create");
        ledger
            .transfer(Transfer {
                code: code("TOOL"),
                from: id("GALICE"),
                to: id("GBOB"),
            })
            .await
            .expect("transfer");

        assert!(ledger.holdings(&id("GALICE")).is_empty());
        let bob = ledger.holdings(&id("GBOB"));
        assert_eq!(bob.len(), 1);
        assert!(!bob[0].issued_by_holder);

        ledger
            .update_metadata(UpdateMetadata {
                code: code("TOOL"),
                version: "v2".to_string(),
                notes: "after sale".to_string(),
                issuer: id("GALICE"),
            })
            .await
            .expect("issuer update");
        assert_eq!(
            ledger.asset(&code("TOOL")).and_then(|a| a.version),
            Some("v2".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn transfer_requires_holder_and_distinct_destination() {
        let ledger = ledger();
        create(&ledger, "TOOL", "GALICE").await.expect("create");

        let err = ledger
            .transfer(Transfer {
                code: code("TOOL"),
                from: id("GBOB"),
                to: id("GCAROL"),
            })
            .await
            .expect_err("not holder");
        assert!(matches!(err, LedgerError::NotHolder { .. }));

        let err = ledger
            .transfer(Transfer {
                code: code("TOOL"),
                from: id("GALICE"),
                to: id("GALICE"),
            })
            .await
            .expect_err("self transfer");
        assert!(matches!(err, LedgerError::InvalidDestination(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn history_is_newest_first_and_scoped_to_account() {
        let ledger = ledger();
        create(&ledger, "ONE", "GALICE").await.expect("create one");
        create(&ledger, "TWO", "GBOB").await.expect("create two");
        ledger
            .transfer(Transfer {
                code: code("ONE"),
                from: id("GALICE"),
                to: id("GBOB"),
            })
            .await
            .expect("transfer");

        let alice = ledger.history(&id("GALICE"), 10);
        assert_eq!(alice.len(), 2);
        assert!(matches!(alice[0].kind, HistoryKind::Transferred { .. }));
        assert!(matches!(alice[1].kind, HistoryKind::Created { .. }));

        let bob = ledger.history(&id("GBOB"), 1);
        assert_eq!(bob.len(), 1);
        assert!(matches!(bob[0].kind, HistoryKind::Transferred { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn full_failure_rate_always_fails_transiently() {
        let ledger = SimulatedLedger::new(SettlementConfig {
            delay_ms: 10,
            failure_rate: 1.0,
        });
        let err = create(&ledger, "TOOL", "GALICE").await.expect_err("transient");
        assert!(err.is_transient());
        assert!(ledger.asset(&code("TOOL")).is_none());
    }

    #[test]
    fn zero_failure_rate_never_rolls() {
        for _ in 0..100 {
            assert!(!roll_failure(0.0).expect("roll"));
        }
    }
