    use std::time::Duration;

    use super::*;
    use crate::ledger::{LedgerError, SimulatedLedger};
    use crate::model::SettlementConfig;
    use crate::workflow::Phase;

    fn owner() -> Identity {
        Identity::new("GALICE").expect("identity")
    }

    fn filled(code: &str, url: &str) -> ProjectCreator {
        let mut c = ProjectCreator::new(Some(12));
        c.focused_mut().type_str(code);
        c.focus_next();
        c.focused_mut().type_str(url);
        c
    }

    #[test]
    fn scenario_long_code_is_clamped_while_typing() {
        let mut c = ProjectCreator::new(Some(12));
        c.focused_mut().type_str("abc-123-long-code-here");
        assert_eq!(c.field(CreatorField::Code).value(), "ABC-123-LONG");
    }

    #[test]
    fn empty_fields_never_mark_busy() {
        let cases = [("", ""), ("TOOL", ""), ("", "https://x.dev"), ("   ", "https://x.dev")];
        for (code, url) in cases {
            let mut c = filled(code, url);
            let err = c.begin_submit(&owner()).expect_err("incomplete draft");
            assert!(matches!(err, SubmitError::Draft(DraftError::Missing(_))), "{:?}", err);
            assert!(!c.state().busy());
            assert_eq!(c.state().phase(), Phase::Idle);
        }
    }

    #[test]
    fn relative_url_is_rejected() {
        let mut c = filled("TOOL", "github.com/acme/tool");
        let err = c.begin_submit(&owner()).expect_err("relative url");
        assert!(matches!(err, SubmitError::Draft(DraftError::InvalidUrl(_))));
        assert!(!c.state().busy());
    }

    #[test]
    fn begin_submit_builds_request_for_owner() {
        let mut c = filled("tool", " https://github.com/acme/tool ");
        let pending = c.begin_submit(&owner()).expect("submit");
        assert!(c.state().busy());
        assert_eq!(pending.request.code.as_str(), "TOOL");
        assert_eq!(pending.request.url, "https://github.com/acme/tool");
        assert_eq!(pending.request.creator, owner());

        assert_eq!(c.begin_submit(&owner()), Err(SubmitError::Busy));
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut c = ProjectCreator::new(Some(12));
        assert_eq!(c.focus(), CreatorField::Code);
        c.focus_next();
        assert_eq!(c.focus(), CreatorField::Url);
        c.focus_next();
        assert_eq!(c.focus(), CreatorField::Code);
        c.focus_prev();
        assert_eq!(c.focus(), CreatorField::Url);
    }

    #[tokio::test(start_paused = true)]
    async fn busy_until_settlement_then_success() {
        let ledger = SimulatedLedger::new(SettlementConfig::default());
        let mut c = filled("tool", "https://github.com/acme/tool");

        let pending = c.begin_submit(&owner()).expect("submit");
        assert!(c.state().busy());

        let start = tokio::time::Instant::now();
        let outcome = ledger.create_asset(pending.request).await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert!(c.state().busy());

        assert!(c.complete(pending.ticket, &outcome));
        assert!(!c.state().busy());
        assert_eq!(c.state().phase(), Phase::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn every_default_submission_succeeds() {
        let ledger = SimulatedLedger::new(SettlementConfig::default());
        for i in 0..5 {
            let mut c = filled(&format!("tool{}", i), "https://github.com/acme/tool");
            let outcome = c.submit_create(&ledger, &owner()).await.expect("submit");
            assert!(outcome.is_ok());
            assert_eq!(c.state().phase(), Phase::Success);
            assert!(!c.state().busy());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_code_settles_in_error_phase() {
        let ledger = SimulatedLedger::new(SettlementConfig::default());
        let mut first = filled("tool", "https://github.com/acme/tool");
        first.submit_create(&ledger, &owner()).await.expect("submit");

        let mut second = filled("tool", "https://github.com/other/tool");
        let outcome = second.submit_create(&ledger, &owner()).await.expect("submit");
        assert!(matches!(outcome, Err(LedgerError::AssetExists(_))));
        assert_eq!(second.state().phase(), Phase::Error);
        assert_eq!(second.state().message(), Some("asset TOOL already exists"));
    }
