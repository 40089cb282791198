//! The static menu catalog.
//!
//! Each customization category has a fixed list of selectable items with
//! price (toman), calories and an optional compatibility rule. The rule
//! set is data, not code: rules are evaluated generically against the
//! current configuration, so the catalog can be validated and tested
//! independently of any executable predicate.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Configuration};

/// A compatibility restriction carried by a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CompatibilityRule {
    /// The item is unavailable while the given single-select field holds
    /// the excluded id.
    #[serde(rename_all = "camelCase")]
    IncompatibleWhen {
        field: Category,
        excluded_value: String,
    },
}

impl CompatibilityRule {
    /// Evaluate the rule against a configuration.
    pub fn allows(&self, config: &Configuration) -> bool {
        match self {
            CompatibilityRule::IncompatibleWhen {
                field,
                excluded_value,
            } => config.single_selection(*field) != Some(excluded_value.as_str()),
        }
    }
}

/// One selectable menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable identifier referenced by configurations
    pub id: String,

    /// Persian display name
    pub name: String,

    /// Optional short description shown on option cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price in toman
    pub price: u64,

    /// Calorie contribution; negative values state a reduction
    pub calories: i64,

    /// Image reference for option cards
    pub image: String,

    /// Optional availability restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityRule>,
}

impl MenuItem {
    /// Whether the item may be selected under the given configuration.
    pub fn is_available(&self, config: &Configuration) -> bool {
        self.compatibility
            .as_ref()
            .map_or(true, |rule| rule.allows(config))
    }
}

/// The full catalog across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub sizes: Vec<MenuItem>,
    pub crusts: Vec<MenuItem>,
    pub cuts: Vec<MenuItem>,
    pub sauces: Vec<MenuItem>,
    pub cheeses: Vec<MenuItem>,
    pub meats: Vec<MenuItem>,
    pub veggies: Vec<MenuItem>,
}

impl Menu {
    /// The item list for a category.
    ///
    /// Bake has no catalog entries; its two zero-price options are an
    /// enumerated mode on the configuration, not menu items.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Size => &self.sizes,
            Category::Crust => &self.crusts,
            Category::Cut => &self.cuts,
            Category::Sauce => &self.sauces,
            Category::Cheese => &self.cheeses,
            Category::Meats => &self.meats,
            Category::Veggies => &self.veggies,
            Category::Bake => &[],
        }
    }

    /// Look up an item by category and id.
    pub fn find(&self, category: Category, id: &str) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Display name for an id, falling back to the id itself when the
    /// item is unknown.
    pub fn name_of(&self, category: Category, id: &str) -> String {
        self.find(category, id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// The standard menu shipped with the application.
    pub fn standard() -> &'static Menu {
        &STANDARD_MENU
    }
}

/// Format a toman price for display: free items render as "رایگان",
/// everything else with thousands grouping.
pub fn format_price(price: u64) -> String {
    if price == 0 {
        return "رایگان".to_string();
    }

    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped} تومان")
}

fn item(
    id: &str,
    name: &str,
    description: Option<&str>,
    price: u64,
    calories: i64,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
        price,
        calories,
        image: image.to_string(),
        compatibility: None,
    }
}

static STANDARD_MENU: Lazy<Menu> = Lazy::new(|| Menu {
    sizes: vec![
        item(
            "small",
            "یک نفره (S)",
            Some("۴ تکه - ۲۰ سانتی‌متر"),
            180_000,
            800,
            "https://images.unsplash.com/photo-1534308983496-4fabb1a015ee?w=400&h=400&fit=crop",
        ),
        item(
            "medium",
            "دو نفره (M)",
            Some("۶ تکه - ۲۸ سانتی‌متر"),
            260_000,
            1400,
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=400&fit=crop",
        ),
        item(
            "large",
            "خانواده (L)",
            Some("۸ تکه - ۳۵ سانتی‌متر"),
            340_000,
            2200,
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400&h=400&fit=crop",
        ),
    ],
    crusts: vec![
        item(
            "original",
            "کلاسیک (ضخیم)",
            Some("بافت نرم و اصیل ایتالیایی"),
            0,
            0,
            "https://images.unsplash.com/photo-1574126154517-d1e0d89e7344?w=400&h=400&fit=crop",
        ),
        item(
            "thin",
            "نازک (ایتالیایی)",
            Some("ترد و برشته"),
            0,
            -100,
            "https://images.unsplash.com/photo-1571407970349-bc16f69910d9?w=400&h=400&fit=crop",
        ),
        MenuItem {
            compatibility: Some(CompatibilityRule::IncompatibleWhen {
                field: Category::Size,
                excluded_value: "small".to_string(),
            }),
            ..item(
                "stuffed",
                "دور پنیر (Gold)",
                Some("لبه‌های پر شده با پنیر گودا"),
                45_000,
                300,
                "https://images.unsplash.com/photo-1620374645310-f9d97e733268?w=400&h=400&fit=crop",
            )
        },
    ],
    cuts: vec![
        item(
            "normal",
            "مثلثی کلاسیک",
            Some("برش استاندارد پیتزا"),
            0,
            0,
            "https://cdn-icons-png.flaticon.com/512/1404/1404945.png",
        ),
        item(
            "square",
            "مربعی (پارتی)",
            Some("تکه‌های کوچک مربعی"),
            0,
            0,
            "https://cdn-icons-png.flaticon.com/512/4825/4825292.png",
        ),
        item(
            "clean",
            "بدون برش",
            Some("پیتزا کامل سرو می‌شود"),
            0,
            0,
            "https://cdn-icons-png.flaticon.com/512/3595/3595455.png",
        ),
    ],
    sauces: vec![
        item(
            "tomato",
            "مارینارا (گوجه)",
            None,
            0,
            20,
            "https://images.unsplash.com/photo-1590483427961-455b5d153163?w=200&h=200&fit=crop",
        ),
        item(
            "alfredo",
            "آلفردو (سیر و خامه)",
            None,
            25_000,
            120,
            "https://images.unsplash.com/photo-1626202158866-9e1cc6439977?w=200&h=200&fit=crop",
        ),
        item(
            "bbq",
            "باربیکیو دودی",
            None,
            15_000,
            45,
            "https://images.unsplash.com/photo-1633333320268-9122c6080e77?w=200&h=200&fit=crop",
        ),
    ],
    cheeses: vec![
        item(
            "mozzarella",
            "موزارلا تازه",
            None,
            40_000,
            150,
            "https://images.unsplash.com/photo-1634509426315-782806877987?w=200&h=200&fit=crop",
        ),
        item(
            "gorgonzola",
            "گورگونزولا (کپکی)",
            None,
            55_000,
            180,
            "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?w=200&h=200&fit=crop",
        ),
        item(
            "mix",
            "میکس پنیرها",
            None,
            60_000,
            200,
            "https://images.unsplash.com/photo-1621659911217-1f95a4c5853a?w=200&h=200&fit=crop",
        ),
    ],
    meats: vec![
        item(
            "pepperoni",
            "پپرونی ۹۰٪",
            None,
            55_000,
            200,
            "https://images.unsplash.com/photo-1625938145744-e38051524294?w=200&h=200&fit=crop",
        ),
        item(
            "steak",
            "راسته گوساله",
            None,
            95_000,
            180,
            "https://images.unsplash.com/photo-1600891964092-4316c288032e?w=200&h=200&fit=crop",
        ),
        item(
            "chicken",
            "مرغ گریل شده",
            None,
            45_000,
            140,
            "https://images.unsplash.com/photo-1532550907401-a500c9a57435?w=200&h=200&fit=crop",
        ),
        item(
            "bacon",
            "بیکن دودی",
            None,
            65_000,
            250,
            "https://images.unsplash.com/photo-1607328696884-2458c9735d49?w=200&h=200&fit=crop",
        ),
    ],
    veggies: vec![
        item(
            "mushroom",
            "قارچ اسلایس",
            None,
            20_000,
            15,
            "https://images.unsplash.com/photo-1504953285093-68e169a83eb9?w=200&h=200&fit=crop",
        ),
        item(
            "olive",
            "زیتون سیاه",
            None,
            25_000,
            30,
            "https://images.unsplash.com/photo-1634547902787-849a60e6530a?w=200&h=200&fit=crop",
        ),
        item(
            "pepper",
            "فلفل دلمه‌ای",
            None,
            15_000,
            10,
            "https://images.unsplash.com/photo-1563715830026-6a2c20847250?w=200&h=200&fit=crop",
        ),
        item(
            "corn",
            "ذرت شیرین",
            None,
            20_000,
            50,
            "https://images.unsplash.com/photo-1551754655-cd27e38d2076?w=200&h=200&fit=crop",
        ),
    ],
});
