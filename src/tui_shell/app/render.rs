use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::*;

const PALETTE_ROWS: u16 = 9;
const TAB_KEYS: &str = "F1 F2 F3: tabs";

pub(in crate::tui_shell) fn draw(frame: &mut Frame, app: &App) {
    let palette_rows = if app.suggestions.is_empty() { 0 } else { PALETTE_ROWS };
    let [header, main, last, palette, input, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(palette_rows),
        Constraint::Length(2),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_header(frame, header, app);
    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
        ts_mode: app.ts_mode,
    };
    views::draw(frame, main, app, &ctx);
    draw_last(frame, last, app);
    if palette_rows > 0 {
        draw_palette(frame, palette, app);
    }
    draw_input(frame, input, app);
    draw_testnet_footer(frame, footer);

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    } else if app.focus == Focus::Command {
        // Form views place their own cursor.
        let x = app.prompt().chars().count() + 1 + app.input.cursor();
        frame.set_cursor_position((input.x + x as u16, input.y + 1));
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("StellaHub", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled("Tokenized Code Ownership", Style::default().fg(Color::Gray)),
        Span::raw("  "),
    ];
    match app.shell.session().identity() {
        Some(id) => spans.push(Span::styled(
            format!("connected {}", id.short()),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled("disconnected", Style::default().fg(Color::Red))),
    }
    if app.in_flight > 0 {
        spans.push(Span::styled(
            format!("  settling {}", app.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn entry_style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Command => Style::default().fg(Color::Cyan),
        EntryKind::Output => Style::default().fg(Color::White),
        EntryKind::Error => Style::default().fg(Color::Red),
    }
}

/// The last command and what it produced.
fn draw_last(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if let Some(cmd) = &app.last_command {
        lines.push(Line::from(Span::styled(cmd.as_str(), entry_style(EntryKind::Command))));
    }
    if let Some(r) = &app.last_result {
        let style = entry_style(r.kind);
        let stamp = Span::styled(format!("{} ", fmt_ts_ui(&r.ts)), Style::default().fg(Color::Gray));
        let mut first = Some(stamp);
        for l in &r.lines {
            let mut spans: Vec<Span> = first.take().into_iter().collect();
            spans.push(Span::styled(l.as_str(), style));
            lines.push(Line::from(spans));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Last")),
        area,
    );
}

/// Palette entries, windowed so the selection stays in view.
fn draw_palette(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.suggestions.len();
    let selected = app.suggestion_selected.min(total.saturating_sub(1));
    let rows = usize::from(area.height.saturating_sub(3)).max(1);
    let start = (selected + 1).saturating_sub(rows).min(total.saturating_sub(rows));

    let mut lines = vec![Line::from(Span::styled(
        format!("Commands {}/{}", selected + 1, total),
        Style::default().fg(Color::Gray),
    ))];
    for (i, def) in app.suggestions.iter().enumerate().skip(start).take(rows) {
        let base = if i == selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", def.name), base.fg(Color::Yellow)),
            Span::styled(def.help, base.fg(Color::White)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
        area,
    );
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let prompt_color = if app.shell.session().is_connected() {
        Color::Green
    } else {
        Color::Red
    };
    let buf = app.input.buf();
    let mut spans = vec![
        Span::styled(app.prompt(), Style::default().fg(prompt_color)),
        Span::raw(" "),
        Span::raw(buf),
    ];
    let hint = input_hint(app);
    if let Some(hint) = &hint {
        if !buf.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP)),
        area,
    );

    // Tab keys on the right when there is room beside the hint.
    let row = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    let used = app.prompt().chars().count() + 1 + buf.chars().count() + hint.map_or(0, |h| h.len() + 2);
    if app.shell.session().is_connected() && used + TAB_KEYS.len() < usize::from(row.width) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                TAB_KEYS,
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Right),
            row,
        );
    }
}

fn input_hint(app: &App) -> Option<String> {
    if app.modal.is_some() {
        return None;
    }
    match app.focus {
        Focus::Form => Some("editing form: Tab next field, Enter submit, Esc back".to_string()),
        Focus::Command if app.input.is_empty() => Some(app.primary_hint_commands().join(" | ")),
        Focus::Command => None,
    }
}

/// Shown under every view.
fn draw_testnet_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "StellaHub | Built on the Stellar Network | Testnet Interface",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "This is a Testnet application. Do not use real Stellar Lumens (XLM).",
                Style::default().fg(Color::Red),
            )),
        ]),
        area,
    );
}

fn dim_frame(frame: &mut Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
