use serde::{Deserialize, Serialize};

/// A node in the dataset. Either a folder holding children or a leaf file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub modified_date: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Folder {
        #[serde(default)]
        children: Vec<Item>,
    },
    File {
        url: String,
        size: String,
    },
}

/// One label in the breadcrumb bar. `id` is `None` only for the root crumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: Option<String>,
    pub name: String,
}

impl Item {
    pub fn folder(id: &str, name: &str, modified_date: &str, children: Vec<Item>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            modified_date: modified_date.to_string(),
            kind: ItemKind::Folder { children },
        }
    }

    pub fn file(id: &str, name: &str, modified_date: &str, url: &str, size: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            modified_date: modified_date.to_string(),
            kind: ItemKind::File {
                url: url.to_string(),
                size: size.to_string(),
            },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder { .. })
    }

    /// Children of a folder; `None` for files.
    pub fn children(&self) -> Option<&[Item]> {
        match self.kind {
            ItemKind::Folder { ref children } => Some(children.as_slice()),
            ItemKind::File { .. } => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self.kind {
            ItemKind::File { ref url, .. } => Some(url.as_str()),
            ItemKind::Folder { .. } => None,
        }
    }

    /// Text for the size column: the file size, or "Folder".
    pub fn size_label(&self) -> &str {
        match self.kind {
            ItemKind::File { ref size, .. } => size.as_str(),
            ItemKind::Folder { .. } => "Folder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_json_uses_front_end_field_names() {
        let json = r#"{
            "id": "9",
            "name": "Archive",
            "type": "folder",
            "modifiedDate": "2025-02-01",
            "children": [
                {
                    "id": "9-1",
                    "name": "old.zip",
                    "type": "file",
                    "url": "https://example.com/old.zip",
                    "modifiedDate": "2025-01-30",
                    "size": "12 MB"
                }
            ]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.modified_date, "2025-02-01");
        let children = item.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].url(), Some("https://example.com/old.zip"));
        assert_eq!(children[0].size_label(), "12 MB");
    }

    #[test]
    fn folder_without_children_key_is_empty() {
        let json = r#"{"id":"e","name":"Empty","type":"folder","modifiedDate":"2025-01-01"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.children(), Some(&[][..]));
        assert_eq!(item.size_label(), "Folder");
    }

    #[test]
    fn file_has_no_children() {
        let item = Item::file("f", "a.txt", "2025-01-01", "https://example.com/a", "1 KB");
        assert!(!item.is_folder());
        assert!(item.children().is_none());
    }
}
