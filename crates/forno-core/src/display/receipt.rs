//! Receipt formatting.

use std::fmt;

use jiff::Zoned;

use crate::menu::{format_price, Menu};
use crate::models::{Category, Configuration, Totals};

/// Formatted order receipt.
///
/// Renders the markdown receipt shown on the success screen and posted
/// verbatim to the notification webhook: order id and date, the base
/// specs, the topping list, totals and the chef comment. Item ids are
/// resolved to display names; ids missing from the menu fall back to
/// the raw id rather than failing.
pub struct Receipt<'a> {
    pub order_id: &'a str,
    pub config: &'a Configuration,
    pub menu: &'a Menu,
    pub totals: Totals,
    pub chef_comment: &'a str,
    pub placed_at: Zoned,
}

impl Receipt<'_> {
    fn topping_names(&self, category: Category) -> String {
        let names: Vec<String> = self
            .config
            .toppings(category)
            .map(|selection| {
                selection
                    .keys()
                    .map(|id| self.menu.name_of(category, id))
                    .collect()
            })
            .unwrap_or_default();

        if names.is_empty() {
            "-".to_string()
        } else {
            names.join("، ")
        }
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# سفارش جدید دریافت شد 🍕")?;
        writeln!(f)?;
        writeln!(
            f,
            "`#{}` — {}",
            self.order_id,
            self.placed_at.strftime("%Y-%m-%d")
        )?;
        writeln!(f)?;

        writeln!(f, "## مشخصات پیتزا")?;
        writeln!(f)?;
        writeln!(
            f,
            "- سایز: {}",
            self.menu.name_of(Category::Size, &self.config.size)
        )?;
        writeln!(
            f,
            "- خمیر: {}",
            self.menu.name_of(Category::Crust, &self.config.crust)
        )?;
        writeln!(
            f,
            "- برش: {}",
            self.menu.name_of(Category::Cut, &self.config.cut)
        )?;
        writeln!(f, "- پخت: {}", self.config.bake.label())?;
        if let Some(sauce) = &self.config.sauce {
            writeln!(f, "- سس: {}", self.menu.name_of(Category::Sauce, sauce))?;
        }
        writeln!(f)?;

        writeln!(f, "## مخلفات")?;
        writeln!(f)?;
        writeln!(f, "- 🧀 پنیر: {}", self.topping_names(Category::Cheese))?;
        writeln!(f, "- 🥩 گوشت: {}", self.topping_names(Category::Meats))?;
        writeln!(f, "- 🍄 سبزیجات: {}", self.topping_names(Category::Veggies))?;
        writeln!(f)?;

        writeln!(f, "کالری تقریبی: {} kcal", self.totals.calories)?;
        writeln!(f)?;
        writeln!(
            f,
            "**💰 مبلغ قابل پرداخت: {}**",
            format_price(self.totals.price)
        )?;
        writeln!(f)?;
        writeln!(f, "👨‍🍳 پیام سرآشپز:")?;
        writeln!(f, "{}", self.chef_comment)?;

        Ok(())
    }
}
