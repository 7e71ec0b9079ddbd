use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::ledger::{Ledger, SimulatedLedger};
use crate::model::{AppConfig, Identity};
use crate::session::Tab;
use crate::shell::{Completion, CompletionStatus, MountedView, Shell};
use crate::time_utils::now_ts;

use super::commands::{connected_command_defs, disconnected_command_defs};
use super::input::{Input, edit_text};
use super::modal;
use super::palette::palette_entries;
use super::view::RenderCtx;
use super::views;

mod activity;
mod cmd_dispatch;
mod cmd_line;
mod cmd_palette;
mod event_loop;
mod forms;
mod lifecycle;
mod log_types;
mod modal_types;
mod render;
mod runtime;
mod settlement;
mod state;
mod time_utils;
mod types;

pub(super) use self::log_types::CommandDef;
use self::log_types::{ActivityLog, EntryKind, ScrollEntry};
pub(super) use self::modal_types::{Modal, ModalKind, PendingAction, TextInputAction};
pub(super) use self::runtime::run;
pub(super) use self::state::App;
pub(super) use self::time_utils::fmt_ts_list;
use self::time_utils::fmt_ts_ui;
pub(super) use self::types::{Focus, TimestampMode};

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
