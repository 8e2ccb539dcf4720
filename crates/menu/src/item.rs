//! Menu item variants.

use core::fmt;
use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

use bistro_core::{DomainError, DomainResult, ValueObject};

use crate::catalog::{DrinkKind, HamburgerSize, SaladKind, StuffingKind};

/// Capability shared by everything that can be priced on a receipt.
///
/// `price`/`calories` are the flat catalog values; the `calculate_*` methods
/// give the amount actually charged, which defaults to the flat value.
pub trait MenuItem: fmt::Display {
    fn title(&self) -> &str;

    fn price(&self) -> u32;

    fn calories(&self) -> u32;

    fn calculate_price(&self) -> f64 {
        f64::from(self.price())
    }

    fn calculate_calories(&self) -> f64 {
        f64::from(self.calories())
    }
}

/// A drink, sold by the unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    kind: DrinkKind,
}

impl Drink {
    /// Look up `kind` (case-insensitive) in the drink catalog.
    pub fn new(kind: &str) -> DomainResult<Self> {
        Ok(Self::from_kind(kind.parse()?))
    }

    pub fn from_kind(kind: DrinkKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DrinkKind {
        self.kind
    }
}

impl MenuItem for Drink {
    fn title(&self) -> &str {
        self.kind.entry().title
    }

    fn price(&self) -> u32 {
        self.kind.entry().price
    }

    fn calories(&self) -> u32 {
        self.kind.entry().calories
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Salad serving size in grams. Never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portion(NonZeroU32);

impl Portion {
    pub fn new(grams: u32) -> DomainResult<Self> {
        NonZeroU32::new(grams)
            .map(Self)
            .ok_or_else(DomainError::undefined_portion)
    }

    /// Missing and zero portions are both undefined.
    pub fn from_option(grams: Option<u32>) -> DomainResult<Self> {
        grams
            .ok_or_else(DomainError::undefined_portion)
            .and_then(Self::new)
    }

    pub fn grams(&self) -> u32 {
        self.0.get()
    }

    fn scale(&self, per_100g: u32) -> f64 {
        f64::from(per_100g) * f64::from(self.grams()) / 100.0
    }
}

impl ValueObject for Portion {}

/// A salad priced per 100 g of `portion`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salad {
    kind: SaladKind,
    portion: Portion,
}

impl Salad {
    /// Look up `kind` in the salad catalog, then validate `portion` (grams).
    pub fn new(kind: &str, portion: u32) -> DomainResult<Self> {
        Self::with_portion(kind, Some(portion))
    }

    /// Like [`Salad::new`], for callers whose portion may be missing.
    pub fn with_portion(kind: &str, portion: Option<u32>) -> DomainResult<Self> {
        let kind: SaladKind = kind.parse()?;
        let portion = Portion::from_option(portion)?;
        Ok(Self::from_kind(kind, portion))
    }

    pub fn from_kind(kind: SaladKind, portion: Portion) -> Self {
        Self { kind, portion }
    }

    pub fn kind(&self) -> SaladKind {
        self.kind
    }

    pub fn portion(&self) -> Portion {
        self.portion
    }
}

impl MenuItem for Salad {
    fn title(&self) -> &str {
        self.kind.entry().title
    }

    fn price(&self) -> u32 {
        self.kind.entry().price
    }

    fn calories(&self) -> u32 {
        self.kind.entry().calories
    }

    fn calculate_price(&self) -> f64 {
        self.portion.scale(self.price())
    }

    fn calculate_calories(&self) -> f64 {
        self.portion.scale(self.calories())
    }
}

impl fmt::Display for Salad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} salad", self.title())
    }
}

/// Hamburger filling. Only ever owned by a [`Hamburger`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stuffing {
    kind: StuffingKind,
}

impl Stuffing {
    pub fn new(kind: &str) -> DomainResult<Self> {
        Ok(Self::from_kind(kind.parse()?))
    }

    pub fn from_kind(kind: StuffingKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> StuffingKind {
        self.kind
    }
}

impl MenuItem for Stuffing {
    fn title(&self) -> &str {
        self.kind.entry().title
    }

    fn price(&self) -> u32 {
        self.kind.entry().price
    }

    fn calories(&self) -> u32 {
        self.kind.entry().calories
    }
}

impl fmt::Display for Stuffing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A hamburger: a sized base plus one stuffing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hamburger {
    size: HamburgerSize,
    stuffing: Stuffing,
}

impl Hamburger {
    pub const TITLE: &'static str = "Hamburger";

    /// Size and stuffing are each validated against their own catalog.
    pub fn new(size: &str, stuffing: &str) -> DomainResult<Self> {
        let size: HamburgerSize = size.parse()?;
        let stuffing = Stuffing::new(stuffing)?;
        Ok(Self { size, stuffing })
    }

    pub fn from_kind(size: HamburgerSize, stuffing: StuffingKind) -> Self {
        Self {
            size,
            stuffing: Stuffing::from_kind(stuffing),
        }
    }

    /// Capitalised size label (`Big`, `Small`).
    pub fn size(&self) -> &'static str {
        self.size.entry().title
    }

    pub fn size_kind(&self) -> HamburgerSize {
        self.size
    }

    /// Title of the stuffing.
    pub fn stuffing(&self) -> &str {
        self.stuffing.title()
    }

    pub fn stuffing_item(&self) -> &Stuffing {
        &self.stuffing
    }
}

impl MenuItem for Hamburger {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn price(&self) -> u32 {
        self.size.entry().price
    }

    fn calories(&self) -> u32 {
        self.size.entry().calories
    }

    fn calculate_price(&self) -> f64 {
        f64::from(self.price()) + self.stuffing.calculate_price()
    }

    fn calculate_calories(&self) -> f64 {
        f64::from(self.calories()) + self.stuffing.calculate_calories()
    }
}

impl fmt::Display for Hamburger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} w/ {}", self.size(), self.title(), self.stuffing())
    }
}

/// Any orderable menu item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Drink(Drink),
    Salad(Salad),
    Hamburger(Hamburger),
}

impl Item {
    fn as_menu_item(&self) -> &dyn MenuItem {
        match self {
            Item::Drink(d) => d,
            Item::Salad(s) => s,
            Item::Hamburger(h) => h,
        }
    }
}

impl MenuItem for Item {
    fn title(&self) -> &str {
        self.as_menu_item().title()
    }

    fn price(&self) -> u32 {
        self.as_menu_item().price()
    }

    fn calories(&self) -> u32 {
        self.as_menu_item().calories()
    }

    fn calculate_price(&self) -> f64 {
        self.as_menu_item().calculate_price()
    }

    fn calculate_calories(&self) -> f64 {
        self.as_menu_item().calculate_calories()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_menu_item(), f)
    }
}

impl From<Drink> for Item {
    fn from(value: Drink) -> Self {
        Item::Drink(value)
    }
}

impl From<Salad> for Item {
    fn from(value: Salad) -> Self {
        Item::Salad(value)
    }
}

impl From<Hamburger> for Item {
    fn from(value: Hamburger) -> Self {
        Item::Hamburger(value)
    }
}

impl ValueObject for Drink {}
impl ValueObject for Salad {}
impl ValueObject for Stuffing {}
impl ValueObject for Hamburger {}
impl ValueObject for Item {}
