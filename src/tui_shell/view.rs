use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
    pub(super) ts_mode: super::TimestampMode,
}

/// Draws the bordered frame around a view and returns the area inside it.
pub(super) fn render_view_chrome_with_header<'a>(
    frame: &mut ratatui::Frame,
    header: Line<'a>,
    area: Rect,
) -> Rect {
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
