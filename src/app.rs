use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::data::dataset::Dataset;
use crate::data::navigator::{self, NavigationState};
use crate::data::opener::LinkOpener;
use crate::model::item::{Breadcrumb, Item};

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Home,
    Crumb(usize),
    Upload,
    Row { index: usize, part: RowPart },
}

/// The name column of a row is a link for files; everything else is the row body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPart {
    Body,
    Link,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub dirty: bool,
    pub title: String,

    dataset: Dataset,
    nav: NavigationState,
    pub selected: usize,

    pub status: Option<StatusMessage>,
    status_ttl: Duration,
    opener: Box<dyn LinkOpener>,

    /// Last frame area, used to hit-test mouse clicks.
    pub viewport: Rect,
}

impl App {
    pub fn new(dataset: Dataset, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            dirty: true,
            title: crate::config::DEFAULT_TITLE.to_string(),
            dataset,
            nav: NavigationState::new(),
            selected: 0,
            status: None,
            status_ttl: Duration::from_secs(crate::config::STATUS_TTL_SECS),
            opener,
            viewport: Rect::default(),
        }
    }

    pub fn with_status_ttl(mut self, ttl: Duration) -> Self {
        self.status_ttl = ttl;
        self
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn path(&self) -> &[String] {
        self.nav.path()
    }

    pub fn visible_items(&self) -> &[Item] {
        navigator::list_visible_items(self.dataset.items(), self.nav.path())
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        navigator::build_breadcrumbs(self.dataset.items(), self.nav.path())
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected)
    }

    // --- Navigation actions ---

    pub fn open_folder(&mut self, id: &str) {
        self.nav.open_folder(id);
        self.after_navigation();
    }

    pub fn navigate_to(&mut self, index: usize) {
        self.nav.navigate_to(index);
        self.after_navigation();
    }

    pub fn go_home(&mut self) {
        self.nav.go_home();
        self.after_navigation();
    }

    pub fn go_up(&mut self) {
        if self.nav.is_root() {
            return;
        }
        self.nav.go_up();
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        self.selected = 0;
        tracing::debug!(path = ?self.nav.path(), "navigated");
    }

    // --- Selection cursor ---

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < self.visible_items().len() {
            self.selected += 1;
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn jump_top(&mut self) {
        self.selected = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.selected = self.visible_items().len().saturating_sub(1);
    }

    /// Enter on the selected row: open a folder, or follow a file's link.
    pub fn activate_selected(&mut self) {
        let part = match self.selected_item() {
            Some(item) if item.is_folder() => RowPart::Body,
            Some(_) => RowPart::Link,
            None => return,
        };
        self.click_row(self.selected, part);
    }

    // --- Mouse ---

    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Home => self.go_home(),
            ClickTarget::Crumb(index) => {
                // The last crumb is the current folder and is not a link.
                if index + 1 < self.breadcrumbs().len() {
                    self.navigate_to(index);
                }
            }
            ClickTarget::Upload => self.press_upload(),
            ClickTarget::Row { index, part } => {
                if index < self.visible_items().len() {
                    self.selected = index;
                }
                self.click_row(index, part);
            }
        }
    }

    /// A click on a file's link is handled there and never reaches the
    /// row handler, which only opens folders.
    fn click_row(&mut self, index: usize, part: RowPart) {
        let (id, url, is_folder) = match self.visible_items().get(index) {
            Some(item) => (
                item.id.clone(),
                item.url().map(str::to_string),
                item.is_folder(),
            ),
            None => return,
        };

        if part == RowPart::Link {
            if let Some(url) = url {
                self.open_link(&url);
                return;
            }
        }

        if is_folder {
            self.open_folder(&id);
        }
    }

    fn open_link(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => {
                tracing::info!(url, "opened link");
                self.set_status(format!("Opened {}", url), false);
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to open link");
                self.set_status(format!("{:#}", e), true);
            }
        }
    }

    /// The Upload button is decorative.
    pub fn press_upload(&mut self) {
        tracing::debug!("upload pressed");
    }

    // --- Status bar ---

    pub fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage {
            text,
            is_error,
            at: Instant::now(),
        });
    }

    pub fn clear_stale_status(&mut self) {
        if let Some(ref status) = self.status {
            if status.at.elapsed() >= self.status_ttl {
                self.status = None;
            }
        }
    }
}
