use anyhow::Result;

mod app;

mod commands;
mod input;
mod modal;
mod palette;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, CommandDef, Focus, Modal, ModalKind, TextInputAction, TimestampMode, fmt_ts_list};
use view::{RenderCtx, render_view_chrome_with_header};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
