mod items;

use indexmap::IndexMap;

use crate::model::{Category, DetailItem};

/// Read-only provider of the item collections, one per category.
/// Built once at startup and injected wherever content is needed.
#[derive(Debug, Clone)]
pub struct Library {
    collections: IndexMap<Category, Vec<DetailItem>>,
}

impl Library {
    /// The compiled-in portfolio content
    pub fn builtin() -> Self {
        let mut collections = IndexMap::new();
        collections.insert(Category::Projects, items::projects());
        collections.insert(Category::Research, items::research());
        collections.insert(Category::Blog, items::blog());
        Library { collections }
    }

    /// Items of one category, in declaration order
    pub fn items(&self, category: Category) -> &[DetailItem] {
        self.collections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Items of one category sorted by descending year. Ties keep
    /// declaration order (stable sort).
    pub fn sorted_by_year(&self, category: Category) -> Vec<&DetailItem> {
        let mut items: Vec<&DetailItem> = self.items(category).iter().collect();
        items.sort_by(|a, b| b.year.cmp(&a.year));
        items
    }

    /// Find an item by id within one category
    pub fn find(&self, category: Category, id: &str) -> Option<&DetailItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Find an item by id across all categories
    pub fn find_anywhere(&self, id: &str) -> Option<(Category, &DetailItem)> {
        self.collections
            .iter()
            .find_map(|(category, items)| {
                items.iter().find(|item| item.id == id).map(|i| (*category, i))
            })
    }

    /// Categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.collections.keys().copied()
    }
}
