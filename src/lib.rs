pub mod ledger;
pub mod logging;
pub mod model;
pub mod script;
pub mod session;
pub mod shell;
pub mod tui;
pub mod workflow;

mod time_utils;
mod tui_shell;
