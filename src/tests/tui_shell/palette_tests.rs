    use super::*;

    fn def(name: &'static str, aliases: &'static [&'static str]) -> CommandDef {
        CommandDef {
            name,
            aliases,
            usage: "",
            help: "",
        }
    }

    fn names(defs: &[CommandDef]) -> Vec<&'static str> {
        defs.iter().map(|d| d.name).collect()
    }

    #[test]
    fn rank_takes_the_best_of_name_and_aliases() {
        let manage = def("manage", &["manager", "update"]);
        assert_eq!(rank("manage", &manage), Some(MatchRank::Exact));
        assert_eq!(rank("UPD", &manage), Some(MatchRank::Prefix));
        assert_eq!(rank("age", &manage), Some(MatchRank::Contains));
        assert_eq!(rank("xfer", &manage), None);
    }

    #[test]
    fn better_match_wins_over_view_hint() {
        let defs = vec![def("dashboard", &["dash"]), def("disconnect", &[])];
        let out = palette_entries("disc", defs, &["dashboard"]);
        assert_eq!(names(&out), ["disconnect"]);

        let defs = vec![def("create", &["new"]), def("connect", &[])];
        let out = palette_entries("c", defs, &["create"]);
        assert_eq!(names(&out), ["create", "connect"]);
    }

    #[test]
    fn view_hints_order_equal_matches() {
        let defs = vec![
            def("create", &["creator"]),
            def("transfer", &["send"]),
            def("manage", &["manager"]),
        ];
        let out = palette_entries("e", defs, &["transfer", "create", "manage"]);
        assert_eq!(names(&out), ["transfer", "create", "manage"]);
    }

    #[test]
    fn empty_query_lists_hinted_commands_first() {
        let defs = vec![def("quit", &[]), def("help", &[]), def("connect", &[])];
        let out = palette_entries("", defs, &["connect", "help"]);
        assert_eq!(names(&out), ["connect", "help", "quit"]);
    }
