    use super::*;
    use crate::workflow::{CreatorField, Phase};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        event_loop::handle_key(app, key(code));
    }

    fn type_keys(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn run_command(app: &mut App, line: &str) {
        type_keys(app, line);
        press(app, KeyCode::Enter);
    }

    fn new_app() -> App {
        App::new(&AppConfig::default(), Handle::current())
    }

    fn connected_app() -> App {
        let mut app = new_app();
        app.connect(Identity::new("GALICE").expect("identity"));
        app
    }

    fn screen(app: &App) -> String {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(140, 50)).expect("terminal");
        terminal.draw(|f| render::draw(f, app)).expect("draw");
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    async fn settle_all(app: &mut App) {
        tokio::time::sleep(Duration::from_millis(2001)).await;
        tokio::task::yield_now().await;
        app.tick();
    }

    fn fill_creator(app: &mut App, code: &str, url: &str) {
        press(app, KeyCode::F(2));
        assert_eq!(app.focus, Focus::Form);
        type_keys(app, code);
        press(app, KeyCode::Tab);
        type_keys(app, url);
    }

    fn last_result(app: &App) -> String {
        app.last_result
            .as_ref()
            .map(|r| r.lines.join("\n"))
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn onboarding_screen_shows_guide_and_testnet_warning() {
        let app = new_app();
        let s = screen(&app);
        assert!(s.contains("disconnected"));
        assert!(s.contains("Get Wallet"));
        assert!(s.contains("Fund Testnet"));
        assert!(s.contains("Do not use real Stellar Lumens"));
    }

    #[tokio::test]
    async fn connect_command_mounts_dashboard() {
        let mut app = new_app();
        run_command(&mut app, "connect GALICE");
        assert_eq!(
            app.shell.session().identity().map(|i| i.as_str()),
            Some("GALICE")
        );
        assert_eq!(app.shell.session().tab(), Tab::Dashboard);
        app.tick();
        let s = screen(&app);
        assert!(s.contains("Connected Wallet:"));
        assert!(s.contains("F1 Dashboard"));
        assert!(s.contains("Instant Transfer"));
    }

    #[tokio::test]
    async fn connect_without_key_prompts() {
        let mut app = new_app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.kind),
            Some(ModalKind::TextInput { .. })
        ));
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_some(), "empty key keeps the prompt open");
        type_keys(&mut app, "GBOB");
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        assert!(app.shell.session().is_connected());
    }

    #[tokio::test]
    async fn tabs_need_a_connection() {
        let mut app = new_app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.shell.view().name(), "onboarding");
        assert_eq!(last_result(&app), "connect a wallet first");
    }

    #[tokio::test]
    async fn creator_code_is_uppercased_and_clamped_while_typing() {
        let mut app = connected_app();
        press(&mut app, KeyCode::F(2));
        type_keys(&mut app, "abc-123-long-code-here");
        let MountedView::Creator(form) = app.shell.view() else {
            panic!("creator not mounted");
        };
        assert_eq!(form.field(CreatorField::Code).value(), "ABC-123-LONG");
    }

    #[tokio::test]
    async fn submit_with_missing_field_never_goes_busy() {
        let mut app = connected_app();
        press(&mut app, KeyCode::F(2));
        type_keys(&mut app, "tool");
        press(&mut app, KeyCode::Enter);
        let state = app.shell.view().submission_state().expect("form");
        assert!(!state.busy());
        assert_eq!(app.in_flight, 0);
        assert_eq!(last_result(&app), "submit: project url is required");
    }

    #[tokio::test(start_paused = true)]
    async fn create_settles_after_delay() {
        let mut app = connected_app();
        fill_creator(&mut app, "tool", "https://github.com/acme/tool");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.in_flight, 1);
        assert!(app.shell.view().submission_state().expect("form").busy());
        assert!(screen(&app).contains("Creating token..."));

        app.tick();
        assert!(app.shell.view().submission_state().expect("form").busy());

        settle_all(&mut app).await;
        let state = app.shell.view().submission_state().expect("form");
        assert!(!state.busy());
        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(app.in_flight, 0);
        assert!(screen(&app).contains("Project token created successfully!"));
    }

    #[tokio::test(start_paused = true)]
    async fn switching_tabs_drops_the_pending_settlement() {
        let mut app = connected_app();
        fill_creator(&mut app, "tool", "https://github.com/acme/tool");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.shell.view().name(), "dashboard");

        settle_all(&mut app).await;
        assert_eq!(app.in_flight, 0);
        assert!(last_result(&app).contains("result dropped"));
        let state = app.shell.view().submission_state().expect("transfer form");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn transfer_refreshes_balance_and_history() {
        let mut app = connected_app();
        fill_creator(&mut app, "tool", "https://github.com/acme/tool");
        press(&mut app, KeyCode::Enter);
        settle_all(&mut app).await;

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Command);
        run_command(&mut app, "transfer TOOL GBOB");
        assert_eq!(app.in_flight, 1);
        app.tick();

        let MountedView::Dashboard(d) = app.shell.view() else {
            panic!("dashboard not mounted");
        };
        assert_eq!(d.balance().mounts(), 1);
        assert_eq!(d.balance().data().len(), 1);

        settle_all(&mut app).await;
        assert_eq!(app.shell.session().refresh().value(), 1);
        let MountedView::Dashboard(d) = app.shell.view() else {
            panic!("dashboard not mounted");
        };
        assert_eq!(d.balance().mounts(), 2);
        assert_eq!(d.history().mounts(), 2);
        assert!(d.balance().data().is_empty());
        assert!(d.history().data()[0].summary().starts_with("transferred TOOL"));
        assert!(last_result(&app).contains("balance and history refreshed"));
    }

    #[tokio::test(start_paused = true)]
    async fn disconnect_while_settling_asks_first() {
        let mut app = connected_app();
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.shell.session().tab(), Tab::Manager);
        press(&mut app, KeyCode::F(2));
        fill_creator(&mut app, "tool", "https://x.dev/tool");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        run_command(&mut app, "disconnect");
        assert!(matches!(
            app.modal.as_ref().map(|m| &m.kind),
            Some(ModalKind::ConfirmAction { .. })
        ));
        press(&mut app, KeyCode::Enter);
        assert!(!app.shell.session().is_connected());
        assert_eq!(app.shell.session().tab(), Tab::Dashboard);
        assert_eq!(app.shell.view().name(), "onboarding");

        settle_all(&mut app).await;
        assert_eq!(app.in_flight, 0);
        assert!(last_result(&app).contains("result dropped"));
    }

    #[tokio::test]
    async fn slash_opens_palette_for_current_context() {
        let mut app = connected_app();
        type_keys(&mut app, "/");
        let names: Vec<_> = app.suggestions.iter().map(|d| d.name).collect();
        assert!(names.contains(&"transfer"));
        assert!(!names.contains(&"connect"));

        type_keys(&mut app, "man");
        assert_eq!(app.suggestions[0].name, "manage");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.shell.session().tab(), Tab::Manager);
    }

    #[tokio::test]
    async fn q_quits_only_from_an_empty_command_line() {
        let mut app = connected_app();
        type_keys(&mut app, "/q");
        assert!(!app.quit);
        press(&mut app, KeyCode::Esc);
        type_keys(&mut app, "q");
        assert!(app.quit);
    }

    #[tokio::test]
    async fn testnet_warning_stays_on_every_view() {
        let mut app = connected_app();
        for tab in [KeyCode::F(1), KeyCode::F(2), KeyCode::F(3)] {
            press(&mut app, tab);
            let s = screen(&app);
            assert!(s.contains("Built on the Stellar Network"), "{}", app.shell.view().name());
            assert!(s.contains("Do not use real Stellar Lumens"), "{}", app.shell.view().name());
        }
    }

    #[tokio::test]
    async fn activity_lists_newest_first_and_clears() {
        let mut app = connected_app();
        run_command(&mut app, "frobnicate");
        run_command(&mut app, "log");

        let modal = app.modal.as_ref().expect("activity viewer");
        assert!(matches!(modal.kind, ModalKind::Viewer));
        assert!(modal.title.starts_with("Activity ("));
        let body = modal.lines.join("\n");
        let unknown = body.find("unknown command: frobnicate").expect("error listed");
        let connected = body.find("connected as").expect("connect listed");
        assert!(unknown < connected);
        assert!(screen(&app).contains("Activity ("));

        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
        run_command(&mut app, "activity clear");
        assert_eq!(last_result(&app), "activity cleared");
        // Only the confirmation outlives the clear.
        assert_eq!(app.activity.len(), 1);

        run_command(&mut app, "activity everything");
        assert_eq!(last_result(&app), "usage: activity [clear] (got everything)");
    }
