//! Customization categories and the wizard step sequence.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of pizza customization categories.
///
/// Each category is one axis of the order: four required single-select
/// axes (size, crust, cut, bake), one optional single-select axis (sauce)
/// and three optional multi-select axes (cheese, meats, veggies).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bread size
    Size,

    /// Dough / crust style
    Crust,

    /// Cut pattern
    Cut,

    /// Base sauce (skippable)
    Sauce,

    /// Bake style
    Bake,

    /// Cheese toppings
    Cheese,

    /// Meat toppings
    Meats,

    /// Vegetable toppings
    Veggies,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" => Ok(Category::Size),
            "crust" => Ok(Category::Crust),
            "cut" => Ok(Category::Cut),
            "sauce" => Ok(Category::Sauce),
            "bake" => Ok(Category::Bake),
            "cheese" | "cheeses" => Ok(Category::Cheese),
            "meat" | "meats" => Ok(Category::Meats),
            "veggie" | "veggies" => Ok(Category::Veggies),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Convert to the canonical string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Size => "size",
            Category::Crust => "crust",
            Category::Cut => "cut",
            Category::Sauce => "sauce",
            Category::Bake => "bake",
            Category::Cheese => "cheese",
            Category::Meats => "meats",
            Category::Veggies => "veggies",
        }
    }

    /// Persian display label for the category, as shown on receipts and
    /// step headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Size => "سایز نان",
            Category::Crust => "نوع خمیر",
            Category::Cut => "مدل برش",
            Category::Sauce => "سس پایه",
            Category::Bake => "نوع پخت",
            Category::Cheese => "پنیر",
            Category::Meats => "گوشت",
            Category::Veggies => "سبزیجات",
        }
    }

    /// Whether the category holds a set of selections rather than a single
    /// value.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, Category::Cheese | Category::Meats | Category::Veggies)
    }
}

/// One entry in the fixed wizard step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    /// Category this step configures
    pub category: Category,

    /// Whether the step blocks advancement until its field is filled
    pub required: bool,
}

/// The ordered step sequence the wizard walks through.
///
/// Sauce and the topping categories never block advancement; only
/// size, crust, cut and bake carry the required flag.
pub const STEPS: &[StepDef] = &[
    StepDef { category: Category::Size, required: true },
    StepDef { category: Category::Crust, required: true },
    StepDef { category: Category::Cut, required: true },
    StepDef { category: Category::Sauce, required: false },
    StepDef { category: Category::Bake, required: true },
    StepDef { category: Category::Cheese, required: false },
    StepDef { category: Category::Meats, required: false },
    StepDef { category: Category::Veggies, required: false },
];

/// Position of a category within [`STEPS`], if present.
pub fn step_index(category: Category) -> Option<usize> {
    STEPS.iter().position(|s| s.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_roundtrip() {
        for step in STEPS {
            let parsed = Category::from_str(step.category.as_str()).unwrap();
            assert_eq!(parsed, step.category);
        }
    }

    #[test]
    fn test_category_from_str_plural_aliases() {
        assert_eq!(Category::from_str("cheeses").unwrap(), Category::Cheese);
        assert_eq!(Category::from_str("meat").unwrap(), Category::Meats);
        assert!(Category::from_str("dessert").is_err());
    }

    #[test]
    fn test_step_sequence_order() {
        assert_eq!(STEPS.len(), 8);
        assert_eq!(STEPS[0].category, Category::Size);
        assert_eq!(step_index(Category::Crust), Some(1));
        assert_eq!(step_index(Category::Veggies), Some(7));
    }

    #[test]
    fn test_required_flags() {
        let required: Vec<Category> = STEPS
            .iter()
            .filter(|s| s.required)
            .map(|s| s.category)
            .collect();
        assert_eq!(
            required,
            vec![Category::Size, Category::Crust, Category::Cut, Category::Bake]
        );
    }
}
