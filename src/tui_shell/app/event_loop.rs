use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

const POLL: Duration = Duration::from_millis(50);

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.quit {
        // Settlements land between keystrokes, so drain before every frame.
        app.tick();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;

        if !event::poll(POLL).context("poll")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}

/// Routes a key: modal first, then tab shortcuts, then whichever of the
/// form or the command line has focus.
pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }
    if let KeyCode::F(n @ 1..=3) = key.code {
        app.select_tab(Tab::ALL[usize::from(n) - 1]);
        return;
    }
    match app.focus {
        Focus::Form => super::forms::handle_form_key(app, key),
        Focus::Command => command_line_key(app, key),
    }
}

fn command_line_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let palette_open = !app.suggestions.is_empty();

    match key.code {
        KeyCode::Char('q') if !ctrl && app.input.is_empty() => app.quit = true,
        KeyCode::Esc if app.input.is_empty() => app.quit = true,
        KeyCode::Esc => app.input.clear(),
        KeyCode::Char('u') if ctrl => app.input.clear(),

        KeyCode::Tab if app.input.is_empty() => {
            app.focus_form();
            return;
        }
        KeyCode::Tab => {
            app.accept_suggestion();
            return;
        }
        KeyCode::Enter => {
            submit_line(app);
            return;
        }

        KeyCode::Up if palette_open => {
            app.cycle_suggestion(false);
            return;
        }
        KeyCode::Down if palette_open => {
            app.cycle_suggestion(true);
            return;
        }
        KeyCode::Up => app.input.recall_older(),
        KeyCode::Char('p') if ctrl => app.input.recall_older(),
        KeyCode::Down => app.input.recall_newer(),
        KeyCode::Char('n') if ctrl => app.input.recall_newer(),

        _ => {
            if !app.input.edit(key) {
                return;
            }
        }
    }
    app.recompute_suggestions();
}

/// Enter on the command line. A partly typed command takes the selected
/// palette entry before it runs.
fn submit_line(app: &mut App) {
    if app.input.is_empty() {
        app.run_default_action();
        return;
    }
    if let Some(def) = app.selected_suggestion() {
        if app.typed_command() != def.name {
            app.accept_suggestion();
        }
    }
    app.run_current_input();
}
