use serde::{Deserialize, Serialize};

/// A content category backed by an item collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Projects,
    Research,
    Blog,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Projects, Category::Research, Category::Blog];

    /// Display label, as shown in the page header
    pub fn label(self) -> &'static str {
        match self {
            Category::Projects => "Projects",
            Category::Research => "Research",
            Category::Blog => "Blog",
        }
    }

    /// Parse a category name (case-insensitive)
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "projects" => Some(Category::Projects),
            "research" => Some(Category::Research),
            "blog" => Some(Category::Blog),
            _ => None,
        }
    }
}

/// A folder on the home screen, in stack order (top of stack first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Bio,
    Projects,
    Research,
    Blog,
    Notes,
}

impl Folder {
    pub const ALL: [Folder; 5] = [
        Folder::Bio,
        Folder::Projects,
        Folder::Research,
        Folder::Blog,
        Folder::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Folder::Bio => "Bio",
            Folder::Projects => "Projects",
            Folder::Research => "Research",
            Folder::Blog => "Blog",
            Folder::Notes => "Notes",
        }
    }

    /// The item collection behind this folder, if it has one.
    /// Bio and Notes are plain pages with no list.
    pub fn category(self) -> Option<Category> {
        match self {
            Folder::Projects => Some(Category::Projects),
            Folder::Research => Some(Category::Research),
            Folder::Blog => Some(Category::Blog),
            Folder::Bio | Folder::Notes => None,
        }
    }
}

/// A single portfolio entry shown in the list/detail layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    /// Stable identifier, unique within its category
    pub id: String,
    pub title: String,
    pub year: i32,
    /// Short mark shown in the list pane (e.g. "VE")
    pub logo_text: String,
    pub summary: String,
    /// Caption for the detail pane's image block
    pub image_label: String,
}
