    use super::*;
    use crate::ledger::{LedgerError, SimulatedLedger};
    use crate::model::{AssetCode, SettlementConfig};
    use crate::workflow::{CreatorField, ManagerField, Phase, TransferField};

    fn id(s: &str) -> Identity {
        Identity::new(s).expect("identity")
    }

    fn shell() -> Shell {
        Shell::new(&AppConfig::default())
    }

    fn ledger() -> SimulatedLedger {
        SimulatedLedger::new(SettlementConfig::default())
    }

    fn fill_creator(shell: &mut Shell, code: &str, url: &str) {
        let MountedView::Creator(f) = shell.view_mut() else {
            panic!("creator not mounted");
        };
        f.field_mut(CreatorField::Code).type_str(code);
        f.field_mut(CreatorField::Url).type_str(url);
    }

    fn fill_transfer(shell: &mut Shell, code: &str, to: &str) {
        let MountedView::Dashboard(d) = shell.view_mut() else {
            panic!("dashboard not mounted");
        };
        d.transfer_mut().field_mut(TransferField::Code).type_str(code);
        d.transfer_mut()
            .field_mut(TransferField::Destination)
            .type_str(to);
    }

    fn dashboard(shell: &Shell) -> &Dashboard {
        match shell.view() {
            MountedView::Dashboard(d) => d.as_ref(),
            other => panic!("expected dashboard, got {}", other.name()),
        }
    }

    async fn create_tool(shell: &mut Shell, ledger: &SimulatedLedger) {
        shell.select_tab(Tab::Creator).expect("select creator");
        fill_creator(shell, "tool", "https://github.com/acme/tool");
        let sub = shell.submit().expect("submit");
        let c = sub.run(ledger).await;
        assert_eq!(shell.complete(c), CompletionStatus::Applied { refreshed: false });
        shell.select_tab(Tab::Dashboard).expect("select dashboard");
    }

    #[test]
    fn disconnected_shell_shows_onboarding_and_has_no_form() {
        let mut s = shell();
        assert_eq!(s.view().name(), "onboarding");
        assert_eq!(s.submit(), Err(SubmitError::NotConnected));
        assert_eq!(s.select_tab(Tab::Creator), Err(SessionError::NotConnected));
    }

    #[test]
    fn connect_mounts_dashboard_and_tabs_swap_views() {
        let mut s = shell();
        s.connect(id("GALICE"));
        assert_eq!(s.view().name(), "dashboard");

        s.select_tab(Tab::Manager).expect("select");
        assert_eq!(s.view().name(), "manager");
        s.disconnect();
        assert_eq!(s.view().name(), "onboarding");
        assert_eq!(s.session().tab(), Tab::Dashboard);
        assert!(s.session().identity().is_none());
    }

    #[test]
    fn switching_tabs_discards_drafts() {
        let mut s = shell();
        s.connect(id("GALICE"));
        s.select_tab(Tab::Creator).expect("select");
        fill_creator(&mut s, "tool", "https://x.dev");

        s.select_tab(Tab::Creator).expect("reselect");
        let MountedView::Creator(f) = s.view() else {
            panic!("creator");
        };
        assert_eq!(f.field(CreatorField::Code).value(), "TOOL");

        s.select_tab(Tab::Dashboard).expect("away");
        s.select_tab(Tab::Creator).expect("back");
        let MountedView::Creator(f) = s.view() else {
            panic!("creator");
        };
        assert_eq!(f.field(CreatorField::Code).value(), "");
    }

    #[test]
    fn invalid_draft_never_goes_busy() {
        let mut s = shell();
        s.connect(id("GALICE"));
        s.select_tab(Tab::Manager).expect("select");
        if let MountedView::Manager(f) = s.view_mut() {
            f.field_mut(ManagerField::Code).type_str("tool");
        }
        assert!(matches!(s.submit(), Err(SubmitError::Draft(_))));
        let MountedView::Manager(f) = s.view() else {
            panic!("manager");
        };
        assert!(!f.state().busy());
    }

    #[tokio::test(start_paused = true)]
    async fn settlement_after_unmount_is_dropped() {
        let ledger = ledger();
        let mut s = shell();
        s.connect(id("GALICE"));
        s.select_tab(Tab::Creator).expect("select");
        fill_creator(&mut s, "tool", "https://github.com/acme/tool");
        let sub = s.submit().expect("submit");

        s.select_tab(Tab::Dashboard).expect("leave");
        let c = sub.run(&ledger).await;
        assert_eq!(s.complete(c), CompletionStatus::Dropped { refreshed: false });
        // The ledger still settled the operation.
        assert!(ledger.asset(&AssetCode::parse("TOOL").expect("code")).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn creator_settles_to_success() {
        let ledger = ledger();
        let mut s = shell();
        s.connect(id("GALICE"));
        s.select_tab(Tab::Creator).expect("select");
        fill_creator(&mut s, "tool", "https://github.com/acme/tool");

        let sub = s.submit().expect("submit");
        assert_eq!(sub.kind(), OpKind::Create);
        let MountedView::Creator(f) = s.view() else {
            panic!("creator");
        };
        assert!(f.state().busy());

        let c = sub.run(&ledger).await;
        assert_eq!(s.complete(c), CompletionStatus::Applied { refreshed: false });
        let MountedView::Creator(f) = s.view() else {
            panic!("creator");
        };
        assert!(!f.state().busy());
        assert_eq!(f.state().phase(), Phase::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn successful_transfer_remounts_balance_and_history() {
        let ledger = ledger();
        let mut s = shell();
        s.connect(id("GALICE"));
        create_tool(&mut s, &ledger).await;

        assert!(s.sync_panels(&ledger));
        assert!(!s.sync_panels(&ledger));
        assert_eq!(dashboard(&s).balance().mounts(), 1);
        assert_eq!(dashboard(&s).history().mounts(), 1);
        assert_eq!(dashboard(&s).balance().data().len(), 1);

        fill_transfer(&mut s, "tool", "GBOB");
        let sub = s.submit().expect("submit transfer");
        let c = sub.run(&ledger).await;
        assert_eq!(s.complete(c), CompletionStatus::Applied { refreshed: true });
        assert_eq!(s.session().refresh().value(), 1);

        assert!(s.sync_panels(&ledger));
        let d = dashboard(&s);
        assert_eq!(d.balance().mounts(), 2);
        assert_eq!(d.history().mounts(), 2);
        assert_eq!(d.balance().key(), Some(1));
        assert!(d.balance().data().is_empty());
        assert_eq!(d.history().data().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_transfer_does_not_refresh() {
        let ledger = ledger();
        let mut s = shell();
        s.connect(id("GALICE"));
        s.sync_panels(&ledger);

        fill_transfer(&mut s, "missing", "GBOB");
        let sub = s.submit().expect("submit transfer");
        let c = sub.run(&ledger).await;
        assert!(matches!(c.outcome, Err(LedgerError::UnknownAsset(_))));
        assert_eq!(s.complete(c), CompletionStatus::Applied { refreshed: false });
        assert_eq!(s.session().refresh().value(), 0);
        assert!(!s.sync_panels(&ledger));
        assert_eq!(dashboard(&s).transfer().state().phase(), Phase::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn transfer_settling_after_remount_still_refreshes_panels() {
        let ledger = ledger();
        let mut s = shell();
        s.connect(id("GALICE"));
        create_tool(&mut s, &ledger).await;
        s.sync_panels(&ledger);

        fill_transfer(&mut s, "tool", "GBOB");
        let sub = s.submit().expect("submit transfer");

        s.select_tab(Tab::Creator).expect("away");
        s.select_tab(Tab::Dashboard).expect("back");
        assert!(s.sync_panels(&ledger));
        assert_eq!(dashboard(&s).balance().data().len(), 1);

        let c = sub.run(&ledger).await;
        assert_eq!(s.complete(c), CompletionStatus::Dropped { refreshed: true });
        assert_eq!(s.session().refresh().value(), 1);
        assert_eq!(dashboard(&s).transfer().state().phase(), Phase::Idle);

        assert!(s.sync_panels(&ledger));
        let d = dashboard(&s);
        assert!(d.balance().data().is_empty());
        assert_eq!(d.balance().key(), Some(1));
        assert!(d.history().data()[0].summary().starts_with("transferred TOOL"));
    }
