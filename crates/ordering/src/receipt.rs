//! Textual and serializable views of an order.

use core::fmt;
use serde::{Deserialize, Serialize};

use bistro_core::OrderId;
use bistro_menu::{Item, MenuItem};

use crate::order::Order;

/// Currency suffix appended to every price.
pub const CURRENCY: &str = "₮";

/// Unit suffix appended to every calorie count.
pub const CALORIES_UNIT: &str = "ccals";

/// Column the per-item annotation starts at in the detailed listing.
const LISTING_WIDTH: usize = 40;

fn numbered(position: usize, item: &Item) -> String {
    format!("{position}: {item}")
}

impl Order {
    /// 1-indexed listing, one item per line.
    pub fn get_items(&self) -> String {
        self.items()
            .iter()
            .enumerate()
            .map(|(index, item)| numbered(index + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Listing with each line padded to a fixed column, then price and calories.
    pub fn get_items_with_price_and_calories(&self) -> String {
        self.items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                format!(
                    "{:<width$}{}{CURRENCY} ({} {CALORIES_UNIT})",
                    numbered(index + 1, item),
                    item.calculate_price(),
                    item.calculate_calories(),
                    width = LISTING_WIDTH,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id_typed(),
            paid: self.is_paid(),
            lines: self
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| SummaryLine {
                    position: index + 1,
                    description: item.to_string(),
                    item: *item,
                    price: item.calculate_price(),
                    calories: item.calculate_calories(),
                })
                .collect(),
            total_price: self.calculate_price(),
            total_calories: self.calculate_calories(),
        }
    }
}

/// Receipt form of the order.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_paid() { "Paid" } else { "Not Paid" };
        writeln!(f, "Order #{}", self.id_typed())?;
        writeln!(f, "{status}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.get_items_with_price_and_calories())?;
        writeln!(f)?;
        writeln!(f, "Total: ")?;
        writeln!(f, "Price: {}{CURRENCY} ", self.calculate_price())?;
        write!(f, "Calories: {} {CALORIES_UNIT}", self.calculate_calories())
    }
}

/// Machine-readable snapshot of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub paid: bool,
    pub lines: Vec<SummaryLine>,
    pub total_price: f64,
    pub total_calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub position: usize,
    pub description: String,
    pub item: Item,
    pub price: f64,
    pub calories: f64,
}
