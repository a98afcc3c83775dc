use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::app::{App, ClickTarget};

const HOME_ICON: &str = "⌂";
const SEPARATOR: &str = " › ";

/// One piece of the breadcrumb line, with its column offset.
#[derive(Debug, Clone, PartialEq)]
pub struct CrumbSegment {
    pub text: String,
    pub x: u16,
    pub width: u16,
    pub style: Style,
    pub target: Option<ClickTarget>,
}

/// Lay out the home control, separators and crumbs left to right.
/// Every crumb but the last (the open folder) is clickable.
pub fn crumb_segments(app: &App) -> Vec<CrumbSegment> {
    let crumbs = app.breadcrumbs();
    let mut segments = Vec::new();
    let mut x: u16 = 1;
    let mut push = |text: String, style: Style, target: Option<ClickTarget>| {
        let width = text.width() as u16;
        segments.push(CrumbSegment {
            text,
            x,
            width,
            style,
            target,
        });
        x = x.saturating_add(width);
    };

    push(HOME_ICON.to_string(), theme::HOME, Some(ClickTarget::Home));
    let last = crumbs.len() - 1;
    for (i, crumb) in crumbs.into_iter().enumerate() {
        push(SEPARATOR.to_string(), theme::CRUMB_SEPARATOR, None);
        if i == last {
            push(crumb.name, theme::CRUMB_CURRENT, None);
        } else {
            push(crumb.name, theme::CRUMB_LINK, Some(ClickTarget::Crumb(i)));
        }
    }
    segments
}

pub fn draw_breadcrumbs(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for seg in crumb_segments(app) {
        spans.push(Span::styled(seg.text, seg.style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
