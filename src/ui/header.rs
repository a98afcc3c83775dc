use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::app::App;

const LOGO: &str = " G ";
pub const UPLOAD_LABEL: &str = " ↑ Upload ";

/// Where the Upload button sits inside the header line.
pub fn upload_button_rect(area: Rect) -> Rect {
    let width = (UPLOAD_LABEL.width() as u16).min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    Rect::new(x, area.y, width, 1.min(area.height))
}

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(LOGO, theme::LOGO),
        Span::raw(" "),
        Span::styled(app.title.as_str(), theme::TITLE),
    ];

    let button = upload_button_rect(area);
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let gap = (button.x.saturating_sub(area.x) as usize).saturating_sub(used);
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(UPLOAD_LABEL, theme::UPLOAD_BUTTON));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
