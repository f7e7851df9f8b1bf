//! Menu display model: cached categories and items cross-filtered for one
//! restaurant and an optional selected category.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::{Id, MenuCategory, MenuItem};

/// Shown instead of any section when nothing matches.
pub const EMPTY_MENU_PLACEHOLDER: &str = "No menu items to show.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSection {
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuDisplay {
    pub sections: Vec<MenuSection>,
}

impl MenuDisplay {
    /// Groups `items` under the categories of `restaurant`.
    ///
    /// With no selected category every item of the restaurant is shown;
    /// otherwise only items of that category. Categories without a matching
    /// item produce no section. No restaurant means nothing to show.
    pub fn build(
        categories: &[MenuCategory],
        items: &[MenuItem],
        restaurant: Option<Id>,
        selected_category: Option<Id>,
    ) -> Self {
        let Some(restaurant) = restaurant else {
            return Self::default();
        };

        let sections = categories
            .iter()
            .filter(|c| c.restaurant == restaurant)
            .filter(|c| selected_category.map_or(true, |selected| c.id == selected))
            .filter_map(|category| {
                let matching: Vec<MenuItem> = items
                    .iter()
                    .filter(|item| item.category == category.id)
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    None
                } else {
                    Some(MenuSection {
                        category: category.clone(),
                        items: matching,
                    })
                }
            })
            .collect();

        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Categories belonging to `restaurant`, in cache order.
pub fn categories_of(categories: &[MenuCategory], restaurant: Id) -> Vec<&MenuCategory> {
    categories
        .iter()
        .filter(|c| c.restaurant == restaurant)
        .collect()
}

/// Items whose category belongs to `restaurant`.
pub fn items_of<'a>(
    categories: &[MenuCategory],
    items: &'a [MenuItem],
    restaurant: Id,
) -> Vec<&'a MenuItem> {
    let owned: HashSet<Id> = categories_of(categories, restaurant)
        .into_iter()
        .map(|c| c.id)
        .collect();
    items
        .iter()
        .filter(|item| owned.contains(&item.category))
        .collect()
}

impl fmt::Display for MenuDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{}", EMPTY_MENU_PLACEHOLDER);
        }

        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let heading = format!("[{}] {}", section.category.icon(), section.category.name);
            writeln!(f, "{}", heading)?;
            writeln!(f, "{}", "-".repeat(heading.chars().count()))?;
            if let Some(description) = section.category.description.as_deref() {
                if !description.is_empty() {
                    writeln!(f, "{}", description)?;
                }
            }
            for item in &section.items {
                writeln!(f, "  {:<32} {:>10}", item.name, format!("${}", item.price))?;
                if !item.description.is_empty() {
                    writeln!(f, "    {}", item.description)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn category(id: Id, restaurant: Id, name: &str) -> MenuCategory {
        MenuCategory {
            id,
            name: name.to_string(),
            description: None,
            icon_name: "soup".to_string(),
            restaurant,
        }
    }

    fn item(id: Id, category: Id, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price: BigDecimal::from(price),
            image: None,
            category,
        }
    }

    fn seed() -> (Vec<MenuCategory>, Vec<MenuItem>) {
        (
            vec![category(10, 1, "Entradas")],
            vec![item(100, 10, "Soup", 5)],
        )
    }

    #[test]
    fn test_no_category_selected_shows_all() {
        let (categories, items) = seed();
        let display = MenuDisplay::build(&categories, &items, Some(1), None);

        assert_eq!(display.sections.len(), 1);
        assert_eq!(display.sections[0].category.name, "Entradas");
        assert_eq!(display.sections[0].items[0].name, "Soup");
        assert_eq!(display.sections[0].items[0].price, BigDecimal::from(5));
    }

    #[test]
    fn test_unknown_category_is_empty_state() {
        let (categories, items) = seed();
        let display = MenuDisplay::build(&categories, &items, Some(1), Some(99));

        assert!(display.is_empty());
        assert_eq!(display.to_string().trim(), EMPTY_MENU_PLACEHOLDER);
    }

    #[test]
    fn test_no_items_is_empty_state() {
        let (categories, _) = seed();
        let display = MenuDisplay::build(&categories, &[], Some(1), None);

        assert!(display.is_empty());
        assert_eq!(display.item_count(), 0);
        assert!(!display.to_string().contains("Entradas"));
    }

    #[test]
    fn test_no_restaurant_shows_nothing() {
        let (categories, items) = seed();
        assert!(MenuDisplay::build(&categories, &items, None, None).is_empty());
    }

    #[test]
    fn test_categories_without_items_render_nothing() {
        let categories = vec![
            category(10, 1, "Entradas"),
            category(11, 1, "Postres"),
            category(20, 2, "Other place"),
        ];
        let items = vec![
            item(100, 10, "Soup", 5),
            item(101, 10, "Bread", 2),
            item(200, 20, "Elsewhere", 9),
        ];

        let display = MenuDisplay::build(&categories, &items, Some(1), None);
        assert_eq!(display.sections.len(), 1);
        assert_eq!(display.item_count(), items_of(&categories, &items, 1).len());
        assert!(!display.to_string().contains("Postres"));
    }

    #[test]
    fn test_selected_category_count_matches() {
        let categories = vec![category(10, 1, "Entradas"), category(11, 1, "Postres")];
        let items = vec![
            item(100, 10, "Soup", 5),
            item(101, 11, "Flan", 3),
            item(102, 11, "Churros", 4),
        ];

        let display = MenuDisplay::build(&categories, &items, Some(1), Some(11));
        let expected = items.iter().filter(|i| i.category == 11).count();
        assert_eq!(display.item_count(), expected);
        assert_eq!(display.sections.len(), 1);
        assert_eq!(display.sections[0].category.name, "Postres");
    }

    #[test]
    fn test_render_lists_items_under_heading() {
        let (categories, items) = seed();
        let output = MenuDisplay::build(&categories, &items, Some(1), None).to_string();

        assert!(output.contains("[soup] Entradas"));
        assert!(output.contains("Soup"));
        assert!(output.contains("$5"));
    }

    #[test]
    fn test_categories_of_filters_by_restaurant() {
        let categories = vec![category(10, 1, "A"), category(20, 2, "B")];
        let owned = categories_of(&categories, 2);
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, 20);
    }
}
