use serde::Serialize;

use crate::model::{Category, DetailItem, Folder};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub logo_text: String,
    pub summary: String,
    pub image_label: String,
}

impl From<&DetailItem> for ItemJson {
    fn from(item: &DetailItem) -> Self {
        ItemJson {
            id: item.id.clone(),
            title: item.title.clone(),
            year: item.year,
            logo_text: item.logo_text.clone(),
            summary: item.summary.clone(),
            image_label: item.image_label.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct CategoryListJson {
    pub category: Category,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct ItemWithCategoryJson {
    pub category: Category,
    #[serde(flatten)]
    pub item: ItemJson,
}

#[derive(Serialize)]
pub struct FolderJson {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One category's items, in rendered (year-descending) order
pub fn print_category(category: Category, items: &[&DetailItem]) {
    println!("{}", category.label());
    for item in items {
        println!("  {:<4} {:<24} {}  [{}]", item.logo_text, item.title, item.year, item.id);
    }
}

/// Full detail for a single item
pub fn print_item(category: Category, item: &DetailItem) {
    println!("{} ({})", item.title, item.year);
    println!("category: {}", category.label());
    println!("id: {}", item.id);
    println!();
    println!("{}", item.summary);
    println!();
    println!("image: {}", item.image_label);
}

/// The folder stack, top first
pub fn print_folders() {
    for folder in Folder::ALL {
        match folder.category() {
            Some(category) => println!("{:<10} -> {}", folder.label(), category.label()),
            None => println!("{}", folder.label()),
        }
    }
}
