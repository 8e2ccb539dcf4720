//! `bistro-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the menu and
//! ordering crates (no IO, no formatting concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, OrderIdGenerator, SequentialIds, next_order_id};
pub use value_object::ValueObject;
