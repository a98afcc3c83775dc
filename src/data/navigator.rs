use crate::model::item::{Breadcrumb, Item};

pub const ROOT_LABEL: &str = "My Drive";

/// Where a path resolves to: the unnamed root or a concrete item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Root(&'a [Item]),
    Item(&'a Item),
}

impl<'a> Node<'a> {
    /// Children of the node, or `None` when it is a file.
    pub fn children(&self) -> Option<&'a [Item]> {
        match *self {
            Node::Root(items) => Some(items),
            Node::Item(item) => item.children(),
        }
    }
}

fn find_child<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    items.iter().find(|i| i.id == id)
}

/// Follow `path` from the root, one linear search per segment.
/// Returns `None` as soon as a segment is not among the current children.
pub fn resolve_folder<'a, S: AsRef<str>>(root: &'a [Item], path: &[S]) -> Option<Node<'a>> {
    let mut current = Node::Root(root);
    for id in path {
        let found = find_child(current.children()?, id.as_ref())?;
        current = Node::Item(found);
    }
    Some(current)
}

/// Children of the folder at `path`. A path that does not resolve to a
/// folder shows the top-level items instead.
pub fn list_visible_items<'a, S: AsRef<str>>(root: &'a [Item], path: &[S]) -> &'a [Item] {
    resolve_folder(root, path)
        .and_then(|node| node.children())
        .unwrap_or(root)
}

/// Root crumb followed by one crumb per path segment.
///
/// Walks the path once. A segment that cannot be found leaves the walk where
/// it was, and its crumb borrows the name of the deepest resolved folder (or
/// its own id when nothing resolved yet).
pub fn build_breadcrumbs<S: AsRef<str>>(root: &[Item], path: &[S]) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::with_capacity(path.len() + 1);
    crumbs.push(Breadcrumb {
        id: None,
        name: ROOT_LABEL.to_string(),
    });

    let mut current: Option<&Item> = None;
    for id in path {
        let id = id.as_ref();
        let children = match current {
            Some(item) => item.children(),
            None => Some(root),
        };
        if let Some(found) = children.and_then(|c| find_child(c, id)) {
            current = Some(found);
        }
        let name = current.map(|i| i.name.clone()).unwrap_or_else(|| id.to_string());
        crumbs.push(Breadcrumb {
            id: Some(id.to_string()),
            name,
        });
    }
    crumbs
}

/// The only mutable UI state: folder ids from the root to the open folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    path: Vec<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Enter a child folder. Callers only pass ids of folders.
    pub fn open_folder(&mut self, id: &str) {
        self.path.push(id.to_string());
    }

    /// Keep the first `index` segments (breadcrumb `index` was clicked).
    pub fn navigate_to(&mut self, index: usize) {
        self.path.truncate(index);
    }

    pub fn go_home(&mut self) {
        self.path.clear();
    }

    pub fn go_up(&mut self) {
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::sample_items;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_path_resolves_to_root() {
        let data = sample_items();
        let empty: [&str; 0] = [];
        assert_eq!(resolve_folder(&data, &empty), Some(Node::Root(&data[..])));
    }

    #[test]
    fn valid_path_resolves_to_folder() {
        let data = sample_items();
        match resolve_folder(&data, &["1", "1-2"]) {
            Some(Node::Item(item)) => {
                assert_eq!(item.name, "Mobile App");
                assert_eq!(names(item.children().unwrap()), vec!["app-prototype.xd"]);
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn nested_id_is_not_found_from_root() {
        let data = sample_items();
        assert!(resolve_folder(&data, &["1-1"]).is_none());
        assert!(resolve_folder(&data, &["1", "2-1"]).is_none());
    }

    #[test]
    fn invalid_path_falls_back_to_top_level() {
        let data = sample_items();
        let visible = list_visible_items(&data, &["1", "nope"]);
        assert_eq!(
            names(visible),
            vec!["Projects", "Documents", "presentation.pptx"]
        );
    }

    #[test]
    fn path_ending_at_file_falls_back_to_top_level() {
        let data = sample_items();
        let visible = list_visible_items(&data, &["3"]);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].name, "Projects");
    }

    #[test]
    fn empty_folder_lists_nothing() {
        let data = vec![Item::folder("e", "Empty", "2025-01-01", vec![])];
        assert!(list_visible_items(&data, &["e"]).is_empty());
    }

    #[test]
    fn breadcrumbs_for_root() {
        let data = sample_items();
        let empty: [&str; 0] = [];
        assert_eq!(
            build_breadcrumbs(&data, &empty),
            vec![Breadcrumb {
                id: None,
                name: "My Drive".to_string()
            }]
        );
    }

    #[test]
    fn breadcrumbs_follow_path() {
        let data = sample_items();
        let crumbs = build_breadcrumbs(&data, &["1", "1-1"]);
        let pairs: Vec<(Option<&str>, &str)> = crumbs
            .iter()
            .map(|c| (c.id.as_deref(), c.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (None, "My Drive"),
                (Some("1"), "Projects"),
                (Some("1-1"), "Website Redesign"),
            ]
        );
    }

    #[test]
    fn breadcrumbs_degrade_on_unknown_segment() {
        let data = sample_items();
        let crumbs = build_breadcrumbs(&data, &["ghost", "2", "missing"]);
        assert_eq!(crumbs.len(), 4);
        assert_eq!(crumbs[1].name, "ghost");
        assert_eq!(crumbs[2].name, "Documents");
        assert_eq!(crumbs[3].id.as_deref(), Some("missing"));
        assert_eq!(crumbs[3].name, "Documents");
    }

    #[test]
    fn open_folder_from_root_lists_children_in_order() {
        let data = sample_items();
        let mut nav = NavigationState::new();
        nav.open_folder("1");
        assert_eq!(
            names(list_visible_items(&data, nav.path())),
            vec!["Website Redesign", "Mobile App"]
        );
    }

    #[test]
    fn navigate_to_truncates() {
        let mut nav = NavigationState::new();
        nav.open_folder("1");
        nav.open_folder("1-1");
        nav.navigate_to(1);
        assert_eq!(nav.path(), &["1".to_string()]);

        nav.navigate_to(5);
        assert_eq!(nav.path(), &["1".to_string()]);
    }

    #[test]
    fn go_home_resets_and_lists_top_level() {
        let data = sample_items();
        let mut nav = NavigationState::new();
        nav.open_folder("2");
        nav.go_home();
        assert!(nav.is_root());
        assert_eq!(
            names(list_visible_items(&data, nav.path())),
            vec!["Projects", "Documents", "presentation.pptx"]
        );
    }

    #[test]
    fn go_up_at_root_is_noop() {
        let mut nav = NavigationState::new();
        nav.go_up();
        assert!(nav.is_root());
        nav.open_folder("1");
        nav.open_folder("1-2");
        nav.go_up();
        assert_eq!(nav.path(), &["1".to_string()]);
    }
}
