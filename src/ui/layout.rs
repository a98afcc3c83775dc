use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{breadcrumbs_view, header, help_overlay, items_view, theme};
use crate::app::{App, ClickTarget, RowPart};

/// The fixed vertical split of the screen.
pub struct ScreenAreas {
    pub header: Rect,
    pub crumbs: Rect,
    pub list: Rect,
    pub status: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Breadcrumbs
            Constraint::Min(3),    // Items
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        crumbs: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_layout(f: &mut Frame, app: &App) {
    let areas = screen_areas(f.area());

    header::draw_header(f, areas.header, app);
    breadcrumbs_view::draw_breadcrumbs(f, areas.crumbs, app);
    items_view::draw_items(f, areas.list, app);
    draw_status_bar(f, areas.status, app);

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

/// Map a screen cell to what was drawn there. Links inside a row take
/// precedence over the row itself.
pub fn hit_test(app: &App, column: u16, row: u16) -> Option<ClickTarget> {
    let areas = screen_areas(app.viewport);
    let pos = Position::new(column, row);

    if header::upload_button_rect(areas.header).contains(pos) {
        return Some(ClickTarget::Upload);
    }

    if areas.crumbs.contains(pos) {
        let rel = column - areas.crumbs.x;
        return breadcrumbs_view::crumb_segments(app)
            .into_iter()
            .find(|seg| rel >= seg.x && rel < seg.x.saturating_add(seg.width))
            .and_then(|seg| seg.target);
    }

    let inner = items_view::list_inner(areas.list);
    if inner.contains(pos) {
        let offset = items_view::scroll_offset(app.selected, inner.height as usize);
        let index = offset + (row - inner.y) as usize;
        if index >= app.visible_items().len() {
            return None;
        }
        let part = if items_view::name_columns(inner.width).contains(&(column - inner.x)) {
            RowPart::Link
        } else {
            RowPart::Body
        };
        return Some(ClickTarget::Row { index, part });
    }

    None
}

fn hint_text() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "nav"),
        ("Enter", "open"),
        ("Bksp", "up"),
        ("~", "home"),
        ("0-9", "crumb"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    match app.status {
        Some(ref status) => {
            let style = if status.is_error {
                theme::STATUS_ERROR
            } else {
                theme::STATUS_BAR
            };
            left_spans.push(Span::styled(format!(" {} ", status.text), style));
        }
        None => {
            let count = app.visible_items().len();
            let noun = if count == 1 { "item" } else { "items" };
            left_spans.push(Span::styled(
                format!(" {} {} ", count, noun),
                theme::STATUS_BAR,
            ));
        }
    }

    // Build right-aligned hint spans
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hint_text().iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let hint_width: usize = hint_spans.iter().map(|s| s.width()).sum();
    let total = area.width as usize;
    let gap = total.saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
