//! Order identifiers and the process-wide id sequence.

use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Identifier of an order. Ids start at 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<OrderId> for u64 {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

/// Source of fresh order ids.
pub trait OrderIdGenerator {
    /// Returns an id strictly greater than any id previously returned.
    fn next_id(&self) -> OrderId;
}

/// Atomic counter handing out 1, 2, 3, ...
#[derive(Debug)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdGenerator for SequentialIds {
    fn next_id(&self) -> OrderId {
        OrderId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

static ORDER_IDS: SequentialIds = SequentialIds::new();

/// Draw the next id from the process-wide sequence.
///
/// Never reset, never decremented.
pub fn next_order_id() -> OrderId {
    ORDER_IDS.next_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sequence_starts_at_one() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), OrderId::new(1));
        assert_eq!(ids.next_id(), OrderId::new(2));
    }

    #[test]
    fn global_sequence_is_increasing() {
        let first = next_order_id();
        let second = next_order_id();
        assert!(second > first);
        assert!(first.get() >= 1);
    }

    #[test]
    fn unique_across_threads() {
        let ids = std::sync::Arc::new(SequentialIds::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<OrderId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
        assert_eq!(all.first(), Some(&OrderId::new(1)));
        assert_eq!(all.last(), Some(&OrderId::new(400)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: n draws from a fresh sequence yield exactly 1..=n in order.
        #[test]
        fn draws_are_dense_and_ordered(n in 1usize..500) {
            let ids = SequentialIds::new();
            let drawn: Vec<u64> = (0..n).map(|_| ids.next_id().get()).collect();
            let expected: Vec<u64> = (1..=n as u64).collect();
            prop_assert_eq!(drawn, expected);
        }
    }
}
