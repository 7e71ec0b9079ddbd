//! Matching for the `/` command palette.

use std::cmp::Reverse;

use super::CommandDef;

/// How well a query matches a command word. Later variants rank higher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum MatchRank {
    Contains,
    Prefix,
    Exact,
}

fn rank_word(query: &str, word: &str) -> Option<MatchRank> {
    if word == query {
        Some(MatchRank::Exact)
    } else if word.starts_with(query) {
        Some(MatchRank::Prefix)
    } else if word.contains(query) {
        Some(MatchRank::Contains)
    } else {
        None
    }
}

/// Best rank of `query` against the command's name and aliases.
pub(super) fn rank(query: &str, def: &CommandDef) -> Option<MatchRank> {
    let query = query.to_lowercase();
    std::iter::once(def.name)
        .chain(def.aliases.iter().copied())
        .filter_map(|word| rank_word(&query, word))
        .max()
}

/// Palette rows for `query`: best match first, then the commands the current
/// view points at, then by name. An empty query lists every command.
pub(super) fn palette_entries(
    query: &str,
    defs: Vec<CommandDef>,
    view_hints: &[&str],
) -> Vec<CommandDef> {
    let hint_pos = |d: &CommandDef| {
        view_hints
            .iter()
            .position(|h| *h == d.name)
            .unwrap_or(usize::MAX)
    };

    if query.is_empty() {
        let mut defs = defs;
        defs.sort_by_key(|d| (hint_pos(d), d.name));
        return defs;
    }

    let mut ranked: Vec<(MatchRank, CommandDef)> = defs
        .into_iter()
        .filter_map(|d| rank(query, &d).map(|r| (r, d)))
        .collect();
    ranked.sort_by_key(|(r, d)| (Reverse(*r), hint_pos(d), d.name));
    ranked.into_iter().map(|(_, d)| d).collect()
}

#[cfg(test)]
#[path = "../tests/tui_shell/palette_tests.rs"]
mod tests;
