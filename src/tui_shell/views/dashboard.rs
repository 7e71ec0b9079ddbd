use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::shell::Dashboard;
use crate::workflow::TransferField;

use super::super::{RenderCtx, fmt_ts_list};
use super::form::{FieldRow, FormCopy, draw_form};

const FEATURE_CARDS: [(&str, &str); 3] = [
    (
        "Instant Transfer",
        "Ownership changes are recorded in seconds, faster than traditional escrow.",
    ),
    (
        "Micro Fees",
        "Transaction costs are negligible (0.00001 XLM), making micro-licensing viable.",
    ),
    (
        "Asset Flexibility",
        "Project tokens allow for fractional ownership, royalty streams and licensing models.",
    ),
];

pub(super) fn draw(
    frame: &mut ratatui::Frame,
    area: Rect,
    d: &Dashboard,
    editing: bool,
    ctx: &RenderCtx,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(5),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    draw_wallet(frame, top[0], d);
    draw_balance(frame, top[1], d);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 5), Constraint::Ratio(3, 5)])
        .split(rows[1]);
    draw_transfer(frame, mid[0], d, editing);
    draw_history(frame, mid[1], d, ctx);

    draw_features(frame, rows[2]);
}

fn draw_wallet(frame: &mut ratatui::Frame, area: Rect, d: &Dashboard) {
    let lines = vec![
        Line::from(Span::styled(
            "Connected Wallet:",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(d.identity().as_str())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Wallet")),
        area,
    );
}

fn draw_balance(frame: &mut ratatui::Frame, area: Rect, d: &Dashboard) {
    let panel = d.balance();
    let mut lines = Vec::new();
    if panel.data().is_empty() {
        lines.push(Line::from(Span::styled(
            "(no project tokens)",
            Style::default().fg(Color::Gray),
        )));
    }
    for h in panel.data() {
        let mut spans = vec![
            Span::styled(format!("{:<12}", h.code.as_str()), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" x{}", h.amount)),
        ];
        if let Some(v) = &h.version {
            spans.push(Span::styled(format!("  {}", v), Style::default().fg(Color::Cyan)));
        }
        if h.issued_by_holder {
            spans.push(Span::styled("  issuer", Style::default().fg(Color::Gray)));
        }
        lines.push(Line::from(spans));
    }
    let title = Line::from(vec![
        Span::raw("Project Tokens"),
        Span::styled(
            format!("  mount {}", panel.mounts()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_transfer(frame: &mut ratatui::Frame, area: Rect, d: &Dashboard, editing: bool) {
    let form = d.transfer();
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = [
        FieldRow {
            label: "Asset Code".to_string(),
            placeholder: "PROJECT_TOKEN",
            field: form.field(TransferField::Code),
            focused: form.focus() == TransferField::Code,
        },
        FieldRow {
            label: "Destination Public Key".to_string(),
            placeholder: "G...",
            field: form.field(TransferField::Destination),
            focused: form.focus() == TransferField::Destination,
        },
    ];
    let copy = FormCopy {
        title: "Transfer Ownership",
        intro: "Send a project token you hold to another account.",
        note: None,
        submit: "Transfer",
        busy: "Transferring...",
        success: "Ownership transferred!",
    };
    draw_form(frame, inner, &copy, &rows, form.state(), editing);
}

fn draw_history(frame: &mut ratatui::Frame, area: Rect, d: &Dashboard, ctx: &RenderCtx) {
    let panel = d.history();
    let mut lines = vec![Line::from(Span::styled(
        "Recent transactions reflect the transfer of project assets and metadata updates.",
        Style::default().fg(Color::Gray),
    ))];
    if panel.data().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "(no history yet)",
            Style::default().fg(Color::Gray),
        )));
    }
    for e in panel.data() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", fmt_ts_list(&e.at, ctx)),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(e.summary()),
        ]));
    }
    let title = Line::from(vec![
        Span::raw("Ownership & Transaction History"),
        Span::styled(
            format!("  mount {}", panel.mounts()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_features(frame: &mut ratatui::Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);
    for (i, (title, body)) in FEATURE_CARDS.iter().enumerate() {
        frame.render_widget(
            Paragraph::new(*body).wrap(Wrap { trim: true }).block(
                Block::default().borders(Borders::ALL).title(Span::styled(
                    *title,
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                )),
            ),
            cols[i],
        );
    }
}
