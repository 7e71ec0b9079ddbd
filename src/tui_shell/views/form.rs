use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::workflow::{
    CreatorField, ManagerField, Phase, ProjectCreator, ProjectManager, SubmissionState, TextField,
};

pub(super) struct FieldRow<'a> {
    pub(super) label: String,
    pub(super) placeholder: &'a str,
    pub(super) field: &'a TextField,
    pub(super) focused: bool,
}

/// Static copy for one form.
pub(super) struct FormCopy<'a> {
    pub(super) title: &'a str,
    pub(super) intro: &'a str,
    pub(super) note: Option<&'a str>,
    pub(super) submit: &'a str,
    pub(super) busy: &'a str,
    pub(super) success: &'a str,
}

pub(super) fn draw_form(
    frame: &mut ratatui::Frame,
    area: Rect,
    copy: &FormCopy<'_>,
    rows: &[FieldRow<'_>],
    state: &SubmissionState,
    editing: bool,
) {
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(rows.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(if copy.note.is_some() { 2 } else { 0 }));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                copy.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(copy.intro, Style::default().fg(Color::Gray))),
        ])
        .wrap(Wrap { trim: true }),
        parts[0],
    );

    for (i, row) in rows.iter().enumerate() {
        let rect = parts[i + 1];
        let active = editing && row.focused;
        let label_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if row.field.value().is_empty() {
            Span::styled(
                row.placeholder,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else {
            Span::raw(row.field.value())
        };
        frame.render_widget(
            Paragraph::new(Line::from(value)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(label_style)
                    .title(Span::styled(row.label.as_str(), label_style)),
            ),
            rect,
        );
        if active {
            let x = (row.field.cursor() as u16).min(rect.width.saturating_sub(3));
            frame.set_cursor_position((rect.x + 1 + x, rect.y + 1));
        }
    }

    let after = rows.len() + 1;
    if let Some(note) = copy.note {
        frame.render_widget(
            Paragraph::new(Span::styled(note, Style::default().fg(Color::Cyan)))
                .wrap(Wrap { trim: true }),
            parts[after],
        );
    }

    let button = if state.busy() {
        Span::styled(
            format!("[ {} ]", copy.busy),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(
            format!("[ {} ]", copy.submit),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(button)), parts[after + 1]);

    let banner = match state.phase() {
        Phase::Success => Some(Line::from(vec![
            Span::styled(copy.success, Style::default().fg(Color::Green)),
            Span::styled(
                format!("  receipt {}", short(state.message().unwrap_or(""))),
                Style::default().fg(Color::Gray),
            ),
        ])),
        Phase::Error => Some(Line::from(Span::styled(
            format!("Error: {}", state.message().unwrap_or("settlement failed")),
            Style::default().fg(Color::Red),
        ))),
        Phase::Idle => None,
    };
    if let Some(line) = banner {
        frame.render_widget(
            Paragraph::new(line).wrap(Wrap { trim: true }),
            parts[after + 2],
        );
    }
}

fn short(id: &str) -> String {
    id.chars().take(8).collect()
}

pub(super) fn draw_creator(frame: &mut ratatui::Frame, area: Rect, form: &ProjectCreator, editing: bool) {
    let code_label = match form.field(CreatorField::Code).shape().max_len {
        Some(n) => format!("Project Code (Asset Code, e.g. MYCODE1, max {} characters)", n),
        None => "Project Code (Asset Code, e.g. MYCODE1)".to_string(),
    };
    let rows = [
        FieldRow {
            label: code_label,
            placeholder: "PROJECT_TOKEN",
            field: form.field(CreatorField::Code),
            focused: form.focus() == CreatorField::Code,
        },
        FieldRow {
            label: "GitHub/Project URL".to_string(),
            placeholder: "https://github.com/user/project-name",
            field: form.field(CreatorField::Url),
            focused: form.focus() == CreatorField::Url,
        },
    ];
    let copy = FormCopy {
        title: "Tokenize New Project",
        intro: "Create a unique Owner Token (Stellar Asset) for your project. The token is assigned to your wallet automatically.",
        note: Some(
            "Note: as an ownership token, supply is fixed at 1. Transferring it transfers full ownership of the project.",
        ),
        submit: "Tokenize Project",
        busy: "Creating token...",
        success: "Project token created successfully!",
    };
    draw_form(frame, area, &copy, &rows, form.state(), editing);
}

pub(super) fn draw_manager(frame: &mut ratatui::Frame, area: Rect, form: &ProjectManager, editing: bool) {
    let rows = [
        FieldRow {
            label: "Project Code to Update (Asset Code)".to_string(),
            placeholder: "EXISTING_PROJECT",
            field: form.field(ManagerField::Code),
            focused: form.focus() == ManagerField::Code,
        },
        FieldRow {
            label: "New Version Number".to_string(),
            placeholder: "v2.0.1",
            field: form.field(ManagerField::Version),
            focused: form.focus() == ManagerField::Version,
        },
        FieldRow {
            label: "Update Notes / Description".to_string(),
            placeholder: "Important bug fixes and a new API integration.",
            field: form.field(ManagerField::Notes),
            focused: form.focus() == ManagerField::Notes,
        },
    ];
    let copy = FormCopy {
        title: "Update Version and Metadata",
        intro: "Only the token's issuer account can do this. Updates let you manage your project's lifecycle.",
        note: None,
        submit: "Update Metadata",
        busy: "Updating metadata...",
        success: "Project metadata updated successfully!",
    };
    draw_form(frame, area, &copy, &rows, form.state(), editing);
}
