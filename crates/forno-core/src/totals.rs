//! Pure price/calorie totaling over a configuration.

use crate::menu::{Menu, MenuItem};
use crate::models::{Category, Configuration, Totals};

/// Compute aggregate price and calorie totals for a configuration.
///
/// Deterministic and side-effect free: each selected single-select id is
/// looked up in its catalog list (unset sauce is skipped), then every
/// multi-select key is looked up the same way; iteration order is
/// irrelevant since the sum is commutative. Ids not present in the menu
/// contribute nothing and never raise. Bake and sauce amount carry no
/// price or calories.
pub fn compute_totals(config: &Configuration, menu: &Menu) -> Totals {
    let mut totals = Totals::default();

    let mut add = |item: Option<&MenuItem>| {
        if let Some(item) = item {
            totals.price += item.price;
            totals.calories += item.calories;
        }
    };

    add(menu.find(Category::Size, &config.size));
    add(menu.find(Category::Crust, &config.crust));
    if let Some(sauce) = &config.sauce {
        add(menu.find(Category::Sauce, sauce));
    }

    for (category, selection) in [
        (Category::Cheese, &config.cheeses),
        (Category::Meats, &config.meats),
        (Category::Veggies, &config.veggies),
    ] {
        for id in selection.keys() {
            add(menu.find(category, id));
        }
    }

    totals
}
