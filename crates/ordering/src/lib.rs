//! Orders domain module.
//!
//! An [`Order`] collects menu items while open, computes price and calorie
//! totals, and refuses every edit once closed. Decisions go through the
//! command/event split from `bistro-core`; rendering lives in [`receipt`].

pub mod order;
pub mod receipt;

pub use order::{Order, OrderCommand, OrderEvent, OrderStatus};
pub use receipt::{OrderSummary, SummaryLine};
