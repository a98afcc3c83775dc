use unicode_width::UnicodeWidthStr;

use crate::data::navigator;
use crate::model::item::Item;

/// Pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Plain-text view of one folder: breadcrumb line, then one row per item.
pub fn render_listing<S: AsRef<str>>(root: &[Item], path: &[S]) -> String {
    let crumbs = navigator::build_breadcrumbs(root, path);
    let trail: Vec<&str> = crumbs.iter().map(|c| c.name.as_str()).collect();
    let mut out = format!("{}\n", trail.join(" > "));

    let items = navigator::list_visible_items(root, path);
    if items.is_empty() {
        out.push_str("  This folder is empty\n");
        return out;
    }

    let name_width = items.iter().map(|i| i.name.width()).max().unwrap_or(0);
    for item in items {
        let marker = if item.is_folder() { "d" } else { "-" };
        out.push_str(&format!(
            "{} {}  {:>8}  {}",
            marker,
            pad(&item.name, name_width),
            item.size_label(),
            item.modified_date
        ));
        if let Some(url) = item.url() {
            out.push_str(&format!("  {}", url));
        }
        out.push('\n');
    }
    out
}

/// Whole dataset as an indented tree with ids.
pub fn render_tree(root: &[Item]) -> String {
    let mut out = String::new();
    write_tree(root, 0, &mut out);
    out
}

fn write_tree(items: &[Item], depth: usize, out: &mut String) {
    for item in items {
        let indent = "  ".repeat(depth);
        let suffix = if item.is_folder() { "/" } else { "" };
        out.push_str(&format!("{}{}{}  [{}]\n", indent, item.name, suffix, item.id));
        if let Some(children) = item.children() {
            write_tree(children, depth + 1, out);
        }
    }
}
