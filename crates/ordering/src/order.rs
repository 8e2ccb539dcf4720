use serde::{Deserialize, Serialize};

use bistro_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, OrderId, OrderIdGenerator,
    next_order_id,
};
use bistro_menu::{Item, MenuItem};

/// Order lifecycle. `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Paid,
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    items: Vec<Item>,
    status: OrderStatus,
    version: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    AddItem(Item),
    /// 1-based position in the item list.
    RemoveItem { position: usize },
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    ItemAdded { item: Item },
    ItemRemoved { position: usize, item: Item },
    OrderClosed,
}

impl Order {
    /// Open an empty order numbered from the process-wide sequence.
    pub fn new() -> Self {
        Self::with_id(next_order_id())
    }

    /// Open an empty order numbered by `ids`.
    pub fn with_ids(ids: &impl OrderIdGenerator) -> Self {
        Self::with_id(ids.next_id())
    }

    fn with_id(id: OrderId) -> Self {
        tracing::debug!(order_id = %id, "order opened");
        Self {
            id,
            items: Vec::new(),
            status: OrderStatus::Open,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Read-only view of the items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append an item. Fails once the order is closed.
    pub fn add_item(&mut self, item: impl Into<Item>) -> DomainResult<()> {
        self.execute(&OrderCommand::AddItem(item.into()))?;
        Ok(())
    }

    /// Remove the item at 1-based `position`.
    ///
    /// Returns `None` and leaves the order untouched when `position` is out
    /// of range (0 included).
    pub fn remove_item(&mut self, position: usize) -> DomainResult<Option<Item>> {
        let events = self.execute(&OrderCommand::RemoveItem { position })?;
        Ok(events.into_iter().find_map(|event| match event {
            OrderEvent::ItemRemoved { item, .. } => Some(item),
            _ => None,
        }))
    }

    /// Close the order. Irreversible; closing twice is a no-op.
    pub fn close(&mut self) {
        if !self.is_paid() {
            self.apply(&OrderEvent::OrderClosed);
        }
    }

    /// Zero (positive) for an empty order.
    pub fn calculate_price(&self) -> f64 {
        self.items
            .iter()
            .map(MenuItem::calculate_price)
            .fold(0.0, |total, price| total + price)
    }

    pub fn calculate_calories(&self) -> f64 {
        self.items
            .iter()
            .map(MenuItem::calculate_calories)
            .fold(0.0, |total, calories| total + calories)
    }

    fn ensure_open(&self) -> DomainResult<()> {
        if self.is_paid() {
            return Err(DomainError::closed_order());
        }
        Ok(())
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::ItemAdded { item } => {
                tracing::debug!(order_id = %self.id, item = %item, "item added");
                self.items.push(*item);
            }
            OrderEvent::ItemRemoved { position, item } => {
                // Events not produced by `handle` may name a missing position.
                match position.checked_sub(1).filter(|&index| index < self.items.len()) {
                    Some(index) => {
                        tracing::debug!(order_id = %self.id, position, item = %item, "item removed");
                        self.items.remove(index);
                    }
                    None => {
                        tracing::warn!(order_id = %self.id, position, "removal of missing position ignored");
                    }
                }
            }
            OrderEvent::OrderClosed => {
                tracing::debug!(order_id = %self.id, items = self.items.len(), "order closed");
                self.status = OrderStatus::Paid;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::AddItem(item) => {
                self.ensure_open()?;
                Ok(vec![OrderEvent::ItemAdded { item: *item }])
            }
            OrderCommand::RemoveItem { position } => {
                self.ensure_open()?;
                let removed = position
                    .checked_sub(1)
                    .and_then(|index| self.items.get(index))
                    .map(|item| OrderEvent::ItemRemoved {
                        position: *position,
                        item: *item,
                    });
                Ok(removed.into_iter().collect())
            }
            OrderCommand::Close => {
                if self.is_paid() {
                    return Ok(Vec::new());
                }
                Ok(vec![OrderEvent::OrderClosed])
            }
        }
    }
}
