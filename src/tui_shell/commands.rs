use super::CommandDef;

const HELP: CommandDef = CommandDef {
    name: "help",
    aliases: &["h", "?"],
    usage: "help [command]",
    help: "Show commands and keys",
};

const ACTIVITY: CommandDef = CommandDef {
    name: "activity",
    aliases: &["log"],
    usage: "activity [clear]",
    help: "Show (or clear) this session's activity",
};

const TIME: CommandDef = CommandDef {
    name: "time",
    aliases: &[],
    usage: "time",
    help: "Toggle relative/absolute timestamps",
};

const QUIT: CommandDef = CommandDef {
    name: "quit",
    aliases: &["exit"],
    usage: "quit",
    help: "Exit",
};

const CONNECT: CommandDef = CommandDef {
    name: "connect",
    aliases: &["login"],
    usage: "connect [public-key]",
    help: "Connect a wallet (prompts when no key is given)",
};

const WALLET_COMMANDS: [CommandDef; 7] = [
    CommandDef {
        name: "disconnect",
        aliases: &["logout"],
        usage: "disconnect",
        help: "Disconnect the wallet",
    },
    CommandDef {
        name: "dashboard",
        aliases: &["dash", "home"],
        usage: "dashboard",
        help: "Balance, transfer and history (F1)",
    },
    CommandDef {
        name: "create",
        aliases: &["creator", "new"],
        usage: "create",
        help: "Tokenize a new project (F2)",
    },
    CommandDef {
        name: "manage",
        aliases: &["manager", "update"],
        usage: "manage",
        help: "Update version and metadata (F3)",
    },
    CommandDef {
        name: "tab",
        aliases: &[],
        usage: "tab <dashboard|creator|manager>",
        help: "Select a tab by name",
    },
    CommandDef {
        name: "submit",
        aliases: &[],
        usage: "submit",
        help: "Submit the form in the current view",
    },
    CommandDef {
        name: "transfer",
        aliases: &["send"],
        usage: "transfer [asset-code] [destination]",
        help: "Transfer a project token you hold",
    },
];

pub(super) fn disconnected_command_defs() -> Vec<CommandDef> {
    vec![CONNECT, HELP, ACTIVITY, TIME, QUIT]
}

pub(super) fn connected_command_defs() -> Vec<CommandDef> {
    let mut out = WALLET_COMMANDS.to_vec();
    out.extend([HELP, ACTIVITY, TIME, QUIT]);
    out
}

/// Every command in any context, for resolving what the user typed.
pub(super) fn all_command_defs() -> Vec<CommandDef> {
    let mut out = connected_command_defs();
    out.push(CONNECT);
    out
}

/// Canonical name for a typed word: the name itself, an alias, or a prefix
/// that only one command starts with.
pub(super) fn resolve(word: &str) -> Option<CommandDef> {
    let word = word.to_lowercase();
    let defs = all_command_defs();
    if let Some(d) = defs
        .iter()
        .find(|d| d.name == word || d.aliases.iter().any(|a| *a == word))
    {
        return Some(*d);
    }
    let mut prefixed = defs.iter().filter(|d| d.name.starts_with(&word));
    match (prefixed.next(), prefixed.next()) {
        (Some(d), None) => Some(*d),
        _ => None,
    }
}
