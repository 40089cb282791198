//! The pizza configuration under construction.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Category;

/// Topping or sauce intensity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Less than the standard amount
    Light,

    /// The standard amount
    #[default]
    Normal,

    /// More than the standard amount
    Extra,
}

impl Intensity {
    /// Persian display label.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "کم",
            Intensity::Normal => "استاندارد",
            Intensity::Extra => "زیاد",
        }
    }
}

/// Bake style for the finished pizza.
///
/// Bake is an enumerated mode rather than a priced catalog entry; both
/// options are free and contribute no calories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BakeStyle {
    /// Even, fully cooked bake
    #[default]
    Normal,

    /// Golden cheese and crispier bread
    WellDone,
}

impl FromStr for BakeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(BakeStyle::Normal),
            "well_done" | "welldone" => Ok(BakeStyle::WellDone),
            _ => Err(format!("Invalid bake style: {s}")),
        }
    }
}

impl BakeStyle {
    /// Convert to the canonical string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            BakeStyle::Normal => "normal",
            BakeStyle::WellDone => "well_done",
        }
    }

    /// Persian receipt label.
    pub fn label(&self) -> &'static str {
        match self {
            BakeStyle::Normal => "استاندارد",
            BakeStyle::WellDone => "برشته",
        }
    }

    /// Persian option card title shown on the bake step.
    pub fn display_name(&self) -> &'static str {
        match self {
            BakeStyle::Normal => "پخت استاندارد",
            BakeStyle::WellDone => "برشته (Well Done)",
        }
    }
}

/// Selected topping ids mapped to their intensity level.
pub type ToppingSelection = BTreeMap<String, Intensity>;

/// The order under construction.
///
/// Single-select categories hold one item id each (sauce is skippable);
/// multi-select categories hold a set of item ids with intensity levels.
/// Every id must refer to an item in the corresponding menu list; unknown
/// ids are tolerated and simply contribute nothing to totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Configuration {
    /// Selected size id
    pub size: String,

    /// Selected crust id
    pub crust: String,

    /// Selected cut id
    pub cut: String,

    /// Selected base sauce id, if any
    pub sauce: Option<String>,

    /// Amount of base sauce
    pub sauce_amount: Intensity,

    /// Bake style
    pub bake: BakeStyle,

    /// Selected cheese ids with intensity
    pub cheeses: ToppingSelection,

    /// Selected meat ids with intensity
    pub meats: ToppingSelection,

    /// Selected veggie ids with intensity
    pub veggies: ToppingSelection,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            size: "large".to_string(),
            crust: "original".to_string(),
            cut: "normal".to_string(),
            sauce: Some("tomato".to_string()),
            sauce_amount: Intensity::Normal,
            bake: BakeStyle::Normal,
            cheeses: ToppingSelection::new(),
            meats: ToppingSelection::new(),
            veggies: ToppingSelection::new(),
        }
    }
}

impl Configuration {
    /// The currently selected id for a single-select category.
    ///
    /// Returns `None` for multi-select categories and for an unset sauce.
    pub fn single_selection(&self, category: Category) -> Option<&str> {
        match category {
            Category::Size => Some(self.size.as_str()),
            Category::Crust => Some(self.crust.as_str()),
            Category::Cut => Some(self.cut.as_str()),
            Category::Sauce => self.sauce.as_deref(),
            Category::Bake => Some(self.bake.as_str()),
            Category::Cheese | Category::Meats | Category::Veggies => None,
        }
    }

    /// The topping selection map for a multi-select category.
    pub fn toppings(&self, category: Category) -> Option<&ToppingSelection> {
        match category {
            Category::Cheese => Some(&self.cheeses),
            Category::Meats => Some(&self.meats),
            Category::Veggies => Some(&self.veggies),
            _ => None,
        }
    }

    /// Mutable topping selection map for a multi-select category.
    pub fn toppings_mut(&mut self, category: Category) -> Option<&mut ToppingSelection> {
        match category {
            Category::Cheese => Some(&mut self.cheeses),
            Category::Meats => Some(&mut self.meats),
            Category::Veggies => Some(&mut self.veggies),
            _ => None,
        }
    }

    /// Whether the field backing a category holds a non-empty value.
    ///
    /// Used by step validation; multi-select categories and sauce count
    /// as filled even when empty, since they never block advancement.
    pub fn is_filled(&self, category: Category) -> bool {
        match category {
            Category::Size => !self.size.is_empty(),
            Category::Crust => !self.crust.is_empty(),
            Category::Cut => !self.cut.is_empty(),
            Category::Bake => true,
            Category::Sauce | Category::Cheese | Category::Meats | Category::Veggies => true,
        }
    }
}

/// A partial configuration as returned by the voice interpreter.
///
/// Every field is independently optional: absence means the user did not
/// mention that category, which is distinct from an explicitly empty
/// selection. Multi-select maps replace the corresponding field wholesale
/// when present. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartialConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crust: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sauce: Option<String>,

    #[serde(default, alias = "sauceAmount", skip_serializing_if = "Option::is_none")]
    pub sauce_amount: Option<Intensity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bake: Option<BakeStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheeses: Option<ToppingSelection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meats: Option<ToppingSelection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veggies: Option<ToppingSelection>,
}

impl PartialConfiguration {
    /// Whether the interpreter supplied a usable value for a category.
    ///
    /// Single-select categories require a non-empty string; multi-select
    /// categories require a non-empty map.
    pub fn mentions(&self, category: Category) -> bool {
        match category {
            Category::Size => self.size.as_deref().is_some_and(|s| !s.is_empty()),
            Category::Crust => self.crust.as_deref().is_some_and(|s| !s.is_empty()),
            Category::Cut => self.cut.as_deref().is_some_and(|s| !s.is_empty()),
            Category::Sauce => self.sauce.as_deref().is_some_and(|s| !s.is_empty()),
            Category::Bake => self.bake.is_some(),
            Category::Cheese => self.cheeses.as_ref().is_some_and(|m| !m.is_empty()),
            Category::Meats => self.meats.as_ref().is_some_and(|m| !m.is_empty()),
            Category::Veggies => self.veggies.as_ref().is_some_and(|m| !m.is_empty()),
        }
    }
}
