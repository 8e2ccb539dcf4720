//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: catalog rows,
/// portions and menu items qualify, an order (which has an id) does not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
