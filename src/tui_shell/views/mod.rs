use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::session::Tab;
use crate::shell::MountedView;

use super::{App, Focus, RenderCtx, render_view_chrome_with_header};

mod dashboard;
mod form;
mod guide;

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect, app: &App, ctx: &RenderCtx) {
    let editing = app.focus == Focus::Form && app.modal.is_none();
    let view = app.shell.view();
    if let MountedView::Onboarding = view {
        guide::draw(frame, area);
        return;
    }

    let inner = render_view_chrome_with_header(frame, tab_header(app.shell.session().tab()), area);
    match view {
        MountedView::Onboarding => {}
        MountedView::Dashboard(d) => dashboard::draw(frame, inner, d, editing, ctx),
        MountedView::Creator(f) => form::draw_creator(frame, inner, f, editing),
        MountedView::Manager(f) => form::draw_manager(frame, inner, f, editing),
    }
}

fn tab_header(active: Tab) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let label = format!("F{} {}", i + 1, tab.label());
        let style = if *tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}
