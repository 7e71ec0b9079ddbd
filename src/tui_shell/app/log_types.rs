use std::collections::VecDeque;

/// Oldest entries fall off once the activity log holds this many.
const ACTIVITY_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Command,
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ScrollEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) lines: Vec<String>,
}

/// Everything typed and reported this session.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ActivityLog {
    entries: VecDeque<ScrollEntry>,
}

impl ActivityLog {
    pub(in crate::tui_shell) fn push(&mut self, entry: ScrollEntry) {
        if self.entries.len() == ACTIVITY_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub(in crate::tui_shell) fn entries(&self) -> impl DoubleEndedIterator<Item = &ScrollEntry> {
        self.entries.iter()
    }

    pub(in crate::tui_shell) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(in crate::tui_shell) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Clone, Copy, Debug)]
pub(in crate::tui_shell) struct CommandDef {
    pub(in crate::tui_shell) name: &'static str,
    pub(in crate::tui_shell) aliases: &'static [&'static str],
    pub(in crate::tui_shell) usage: &'static str,
    pub(in crate::tui_shell) help: &'static str,
}
