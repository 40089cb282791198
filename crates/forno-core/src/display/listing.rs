//! Menu listings for option selection.

use std::fmt;

use crate::menu::{format_price, MenuItem};
use crate::models::{BakeStyle, Category};

/// Formatted list of the selectable options for one category.
///
/// Holds references to already-filtered items, so callers decide
/// whether compatibility filtering applies (the wizard filters, plain
/// menu browsing does not).
pub struct CategoryListing<'a> {
    pub category: Category,
    pub items: Vec<&'a MenuItem>,
}

impl fmt::Display for CategoryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.category.label())?;
        writeln!(f)?;

        if self.category == Category::Bake {
            // Bake options are an enumerated mode, not catalog items.
            for bake in [BakeStyle::Normal, BakeStyle::WellDone] {
                writeln!(
                    f,
                    "- `{}` {} — {}",
                    bake.as_str(),
                    bake.display_name(),
                    format_price(0)
                )?;
            }
            return Ok(());
        }

        for item in &self.items {
            write!(f, "- `{}` {} — {}", item.id, item.name, format_price(item.price))?;
            if item.calories != 0 {
                write!(f, " — {} kcal", item.calories)?;
            }
            if let Some(description) = &item.description {
                write!(f, " ({description})")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;

    #[test]
    fn test_listing_shows_ids_names_and_prices() {
        let menu = Menu::standard();
        let listing = CategoryListing {
            category: Category::Size,
            items: menu.items(Category::Size).iter().collect(),
        };

        let text = listing.to_string();
        assert!(text.contains("## سایز نان"));
        assert!(text.contains("`large`"));
        assert!(text.contains("340,000 تومان"));
        assert!(text.contains("۸ تکه"));
    }

    #[test]
    fn test_free_items_render_as_free() {
        let menu = Menu::standard();
        let listing = CategoryListing {
            category: Category::Cut,
            items: menu.items(Category::Cut).iter().collect(),
        };
        assert!(listing.to_string().contains("رایگان"));
    }

    #[test]
    fn test_bake_listing_uses_enumerated_options() {
        let listing = CategoryListing {
            category: Category::Bake,
            items: Vec::new(),
        };
        let text = listing.to_string();
        assert!(text.contains("`normal`"));
        assert!(text.contains("`well_done`"));
        assert!(text.contains("برشته (Well Done)"));
    }
}
