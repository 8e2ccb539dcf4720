//! Menu domain module.
//!
//! Static catalog data plus the menu item variants built from it. Every
//! constructor validates its keys against the catalog and fails with
//! [`bistro_core::DomainError`] on a miss.

pub mod catalog;
pub mod item;

pub use catalog::{CatalogEntry, CatalogRow, DrinkKind, Family, HamburgerSize, SaladKind, StuffingKind};
pub use item::{Drink, Hamburger, Item, MenuItem, Portion, Salad, Stuffing};
