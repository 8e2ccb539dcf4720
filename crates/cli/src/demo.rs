//! Walkthrough of the ordering workflow.

use bistro_core::{DomainError, DomainResult};
use bistro_menu::{Drink, Hamburger, Salad, catalog};
use bistro_ordering::Order;

/// Render the full menu board.
pub fn menu_board() -> String {
    catalog::entries()
        .iter()
        .map(|row| {
            format!(
                "{:<20}{:<10}{:>5}₮ {:>5} ccals",
                row.family.to_string(),
                row.key,
                row.entry.price,
                row.entry.calories
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the canonical order: small hamburger with salad, 250 g Caesar, cola.
pub fn sample_order() -> DomainResult<Order> {
    let mut order = Order::new();
    order.add_item(Hamburger::new("Small", "Salad")?)?;
    order.add_item(Salad::new("Caesar", 250)?)?;
    order.add_item(Drink::new("Cola")?)?;
    Ok(order)
}

/// Close `order`, then try to add a coffee. Returns the refusal, if any.
pub fn close_and_try_edit(order: &mut Order) -> DomainResult<Option<DomainError>> {
    order.close();
    Ok(order.add_item(Drink::new("Coffee")?).err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_lists_every_key() {
        let board = menu_board();
        assert_eq!(board.lines().count(), 9);
        assert!(board.contains("COLA"));
        assert!(board.contains("POTATO"));
    }

    #[test]
    fn sample_order_totals() {
        let order = sample_order().unwrap();
        assert_eq!(order.calculate_price(), 370.0);
        assert_eq!(order.calculate_calories(), 115.0);
    }

    #[test]
    fn closed_sample_refuses_coffee() {
        let mut order = sample_order().unwrap();
        let err = close_and_try_edit(&mut order).unwrap();
        assert_eq!(err, Some(DomainError::ClosedOrder));
        assert_eq!(order.items().len(), 3);
    }
}
