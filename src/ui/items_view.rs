use std::ops::Range;

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{theme, util};
use crate::app::App;
use crate::model::item::Item;

pub const FOLDER_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";
pub const EMPTY_MESSAGE: &str = "This folder is empty";

const SIZE_WIDTH: usize = 10;
const DATE_WIDTH: usize = 10;
/// " " + icon (2 cols) + " "
const LEAD_WIDTH: usize = 4;
/// "  " + size + "  " + date + " "
const META_WIDTH: usize = 2 + SIZE_WIDTH + 2 + DATE_WIDTH + 1;

/// Column span of the name (link) cell for a row of the given width.
pub fn name_columns(width: u16) -> Range<u16> {
    let name_width = (width as usize).saturating_sub(LEAD_WIDTH + META_WIDTH);
    LEAD_WIDTH as u16..(LEAD_WIDTH + name_width) as u16
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (selected + 1).saturating_sub(height)
}

/// Inner area of the bordered list block.
pub fn list_inner(area: Rect) -> Rect {
    list_block("").inner(area)
}

fn list_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::BORDER_INACTIVE)
}

fn row_line(item: &Item, width: u16, selected: bool) -> Line<'_> {
    let names = name_columns(width);
    let name_width = (names.end - names.start) as usize;

    let (icon, icon_style, name_style) = if item.is_folder() {
        (FOLDER_ICON, theme::FOLDER_ICON, theme::LIST_NORMAL)
    } else {
        (FILE_ICON, theme::FILE_ICON, theme::FILE_LINK)
    };
    let name_style = if selected {
        name_style.patch(theme::LIST_SELECTED)
    } else {
        name_style
    };
    let meta_style = if selected {
        theme::META.patch(theme::LIST_SELECTED)
    } else {
        theme::META
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled(icon, icon_style),
        Span::raw(" "),
        Span::styled(util::fit(&item.name, name_width), name_style),
        Span::styled(
            format!(
                "  {}  {} ",
                util::fit_right(item.size_label(), SIZE_WIDTH),
                util::fit_right(&item.modified_date, DATE_WIDTH)
            ),
            meta_style,
        ),
    ])
}

pub fn draw_items(f: &mut Frame, area: Rect, app: &App) {
    let items = app.visible_items();
    let crumbs = app.breadcrumbs();
    let current = crumbs.last().map(|c| c.name.as_str()).unwrap_or("");
    let title = format!(" {} ", current);
    let block = list_block(&title);

    if items.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let top = inner.height / 2;
        let placeholder = Rect::new(
            inner.x,
            inner.y + top.saturating_sub(1),
            inner.width,
            3.min(inner.height),
        );
        let lines = vec![
            Line::from(Span::styled(FOLDER_ICON, theme::EMPTY_STATE)),
            Line::from(""),
            Line::from(Span::styled(EMPTY_MESSAGE, theme::EMPTY_STATE)),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            placeholder,
        );
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let offset = scroll_offset(app.selected, height);
    let end = (offset + height).min(items.len());

    let lines: Vec<Line> = items[offset..end]
        .iter()
        .enumerate()
        .map(|(i, item)| row_line(item, inner.width, offset + i == app.selected))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
