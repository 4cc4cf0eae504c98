use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::app::error::{AppError, Result};

/// Stable identifier for a menu item.
///
/// Ids are assigned exactly once, when the catalog is loaded, and stay valid
/// for the whole session (the catalog is never mutated after load). Everything
/// downstream - the cart, order lines, UI callbacks - refers to items through
/// this id, never through the title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive, whitespace-collapsed-to-hyphen slug of an item title.
///
/// This is only the *starting point* for an id: two items may share a title,
/// so `MenuCatalog::assign_item_ids` appends a numeric suffix to later
/// duplicates rather than letting them collide in the cart.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in whole currency units.
    pub price: u32,
    #[serde(default)]
    pub image: String,
    /// Assigned during catalog load; never present in the menu document.
    #[serde(skip)]
    pub id: ItemId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The menu document: loaded once at startup, immutable for the session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCatalog {
    #[serde(default = "default_cafe_name")]
    pub cafe_name: String,
    /// Digits-only WhatsApp contact the order is sent to.
    pub whatsapp_number: String,
    pub categories: Vec<Category>,
}

fn default_cafe_name() -> String {
    "WhatsApp Cafe".to_string()
}

impl MenuCatalog {
    /// Parse a menu document and assign item ids.
    pub fn parse(json: &str) -> Result<Self> {
        let mut catalog: MenuCatalog = serde_json::from_str(json)?;
        if catalog.categories.is_empty() {
            return Err(AppError::Menu("no categories found in menu data".to_string()));
        }
        catalog.assign_item_ids();
        Ok(catalog)
    }

    /// Load the menu document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// All items in catalog traversal order: category order, then item order
    /// within each category. This order drives the order summary and the
    /// composed message.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Resolve an item by id over traversal order. Returns `None` for stale
    /// ids; callers treat that as "skip", not as an error.
    pub fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items().find(|item| &item.id == id)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Give every item a unique id: the title slug, with a numeric suffix
    /// (`-2`, `-3`, ...) for later items whose slug is already taken.
    fn assign_item_ids(&mut self) {
        let mut taken: Vec<String> = Vec::new();
        for category in &mut self.categories {
            for item in &mut category.items {
                let mut base = slugify(&item.title);
                if base.is_empty() {
                    base = "item".to_string();
                }
                let mut candidate = base.clone();
                let mut n = 2;
                while taken.contains(&candidate) {
                    candidate = format!("{}-{}", base, n);
                    n += 1;
                }
                taken.push(candidate.clone());
                item.id = ItemId(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "cafeName": "Test Cafe",
            "whatsappNumber": "911234567890",
            "categories": [
                {
                    "name": "Hot Drinks",
                    "items": [
                        {"title": "Masala Chai", "description": "Spiced tea", "price": 50, "image": "chai.jpg"},
                        {"title": "Filter Coffee", "description": "South Indian", "price": 60, "image": "coffee.jpg"}
                    ]
                },
                {
                    "name": "Snacks",
                    "items": [
                        {"title": "Samosa", "description": "Two pieces", "price": 30, "image": "samosa.jpg"}
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_assigns_ids_in_traversal_order() {
        let catalog = MenuCatalog::parse(sample_json()).unwrap();
        let ids: Vec<&str> = catalog.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["masala-chai", "filter-coffee", "samosa"]);
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_case() {
        assert_eq!(slugify("Masala  Chai"), "masala-chai");
        assert_eq!(slugify("  Iced\tLatte "), "iced-latte");
        assert_eq!(slugify("SAMOSA"), "samosa");
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        let json = r#"{
            "whatsappNumber": "911234567890",
            "categories": [
                {"name": "A", "items": [{"title": "Special", "price": 10}]},
                {"name": "B", "items": [{"title": "Special", "price": 20}, {"title": "special", "price": 30}]}
            ]
        }"#;
        let catalog = MenuCatalog::parse(json).unwrap();
        let ids: Vec<&str> = catalog.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["special", "special-2", "special-3"]);

        // Each id resolves to its own item, not the first title match
        let prices: Vec<u32> = catalog
            .items()
            .map(|i| catalog.item(&i.id).unwrap().price)
            .collect();
        assert_eq!(prices, vec![10, 20, 30]);
    }

    #[test]
    fn test_cafe_name_defaults_when_missing() {
        let json = r#"{
            "whatsappNumber": "911234567890",
            "categories": [{"name": "A", "items": [{"title": "Chai", "price": 10}]}]
        }"#;
        let catalog = MenuCatalog::parse(json).unwrap();
        assert_eq!(catalog.cafe_name, "WhatsApp Cafe");
    }

    #[test]
    fn test_empty_categories_is_an_error() {
        let json = r#"{"whatsappNumber": "911234567890", "categories": []}"#;
        let err = MenuCatalog::parse(json).unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(MenuCatalog::parse("{not json").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();
        let catalog = MenuCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.cafe_name, "Test Cafe");
        assert_eq!(catalog.categories.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = MenuCatalog::load(Path::new("/nonexistent/menu.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_category_lookup() {
        let catalog = MenuCatalog::parse(sample_json()).unwrap();
        assert_eq!(catalog.category("Snacks").unwrap().items.len(), 1);
        assert!(catalog.category("Desserts").is_none());
    }
}
