use ratatui::style::{Color, Modifier, Style};

// Header
pub const LOGO: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);
pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const UPLOAD_BUTTON: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

// Breadcrumbs
pub const CRUMB_LINK: Style = Style::new().fg(Color::Blue);
pub const CRUMB_CURRENT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const CRUMB_SEPARATOR: Style = Style::new().fg(Color::DarkGray);
pub const HOME: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const STATUS_ERROR: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);
pub const FOLDER_ICON: Style = Style::new().fg(Color::Blue);
pub const FILE_ICON: Style = Style::new().fg(Color::Gray);
pub const FILE_LINK: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::UNDERLINED);
pub const META: Style = Style::new().fg(Color::DarkGray);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);
pub const BORDER_INACTIVE: Style = Style::new().fg(Color::DarkGray);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);
