use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{Modal, ModalKind};

fn centered(area: Rect) -> Rect {
    let width = area.width.saturating_sub(6).clamp(20, 90).min(area.width);
    let height = area.height.saturating_sub(6).clamp(8, 22).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = centered(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(title_line(modal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body_lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let body = Paragraph::new(body_lines)
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll as u16, 0));

    let ModalKind::TextInput { prompt, .. } = &modal.kind else {
        frame.render_widget(body, inner);
        return;
    };

    let [body_area, edit_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .areas(inner);
    frame.render_widget(body, body_area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
            Span::raw(modal.input.buf()),
        ]))
        .block(Block::default().borders(Borders::ALL)),
        edit_area,
    );
    let col = (prompt.chars().count() + modal.input.cursor()) as u16;
    frame.set_cursor_position((edit_area.x + 1 + col, edit_area.y + 1));
}

fn title_line(modal: &Modal) -> Line<'static> {
    let keys = match modal.kind {
        ModalKind::Viewer => "Esc close  Up/Down scroll",
        ModalKind::ConfirmAction { .. } => "Enter confirm  Esc cancel",
        ModalKind::TextInput { .. } => "Enter submit  Esc cancel",
    };
    Line::from(vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(keys, Style::default().fg(Color::Gray)),
    ])
}
