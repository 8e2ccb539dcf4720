//! Fixed menu catalog.
//!
//! Each family of purchasable variants is a key enum. Keys parse
//! case-insensitively and resolve to a [`CatalogEntry`] through a `const fn`,
//! so the whole catalog is compile-time data.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use bistro_core::{DomainError, ValueObject};

/// Display title, unit price (₮) and unit calories of one catalog row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub price: u32,
    pub calories: u32,
}

impl ValueObject for CatalogEntry {}

/// Catalog family a key belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Drink,
    Salad,
    HamburgerSize,
    HamburgerStuffing,
}

impl core::fmt::Display for Family {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Family::Drink => "Drink",
            Family::Salad => "Salad",
            Family::HamburgerSize => "Hamburger size",
            Family::HamburgerStuffing => "Hamburger stuffing",
        };
        f.write_str(label)
    }
}

macro_rules! catalog_keys {
    (
        $(#[$meta:meta])*
        $name:ident in $family:expr => {
            $($variant:ident = ($key:literal, $title:literal, $price:literal, $calories:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every key of this family, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const FAMILY: Family = $family;

            /// Upper-case catalog key.
            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub const fn entry(self) -> CatalogEntry {
                match self {
                    $($name::$variant => CatalogEntry {
                        title: $title,
                        price: $price,
                        calories: $calories,
                    }),+
                }
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|k| k.key().eq_ignore_ascii_case(s))
                    .ok_or_else(|| DomainError::unknown_item(s))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.entry().title)
            }
        }
    };
}

catalog_keys! {
    /// Drinks are sold by the unit.
    DrinkKind in Family::Drink => {
        Cola = ("COLA", "Cola", 50, 40),
        Coffee = ("COFFEE", "Coffee", 80, 20),
    }
}

catalog_keys! {
    /// Salads are priced per 100 g.
    SaladKind in Family::Salad => {
        Caesar = ("CAESAR", "Caesar", 100, 20),
        Olivier = ("OLIVIER", "Olivier", 50, 80),
    }
}

catalog_keys! {
    /// Base of a hamburger. The title doubles as the capitalised size label.
    HamburgerSize in Family::HamburgerSize => {
        Big = ("BIG", "Big", 100, 40),
        Small = ("SMALL", "Small", 50, 20),
    }
}

catalog_keys! {
    StuffingKind in Family::HamburgerStuffing => {
        Cheese = ("CHEESE", "Cheese", 10, 20),
        Salad = ("SALAD", "Salad", 20, 5),
        Potato = ("POTATO", "Potato", 15, 10),
    }
}

/// One printable row of the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub family: Family,
    pub key: &'static str,
    #[serde(flatten)]
    pub entry: CatalogEntry,
}

fn rows_of<K: Copy>(
    family: Family,
    keys: &[K],
    key: fn(K) -> &'static str,
    entry: fn(K) -> CatalogEntry,
) -> impl Iterator<Item = CatalogRow> + '_ {
    keys.iter().map(move |&k| CatalogRow {
        family,
        key: key(k),
        entry: entry(k),
    })
}

/// Every catalog row, family by family.
pub fn entries() -> Vec<CatalogRow> {
    rows_of(DrinkKind::FAMILY, DrinkKind::ALL, DrinkKind::key, DrinkKind::entry)
        .chain(rows_of(SaladKind::FAMILY, SaladKind::ALL, SaladKind::key, SaladKind::entry))
        .chain(rows_of(
            HamburgerSize::FAMILY,
            HamburgerSize::ALL,
            HamburgerSize::key,
            HamburgerSize::entry,
        ))
        .chain(rows_of(
            StuffingKind::FAMILY,
            StuffingKind::ALL,
            StuffingKind::key,
            StuffingKind::entry,
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &'static str, price: u32, calories: u32) -> CatalogEntry {
        CatalogEntry {
            title,
            price,
            calories,
        }
    }

    #[test]
    fn catalog_matches_menu_board() {
        assert_eq!(DrinkKind::Cola.entry(), entry("Cola", 50, 40));
        assert_eq!(DrinkKind::Coffee.entry(), entry("Coffee", 80, 20));
        assert_eq!(SaladKind::Caesar.entry(), entry("Caesar", 100, 20));
        assert_eq!(SaladKind::Olivier.entry(), entry("Olivier", 50, 80));
        assert_eq!(HamburgerSize::Big.entry(), entry("Big", 100, 40));
        assert_eq!(HamburgerSize::Small.entry(), entry("Small", 50, 20));
        assert_eq!(StuffingKind::Cheese.entry(), entry("Cheese", 10, 20));
        assert_eq!(StuffingKind::Salad.entry(), entry("Salad", 20, 5));
        assert_eq!(StuffingKind::Potato.entry(), entry("Potato", 15, 10));
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!("cola".parse::<DrinkKind>().unwrap(), DrinkKind::Cola);
        assert_eq!("CoFfEe".parse::<DrinkKind>().unwrap(), DrinkKind::Coffee);
        assert_eq!("Caesar".parse::<SaladKind>().unwrap(), SaladKind::Caesar);
        assert_eq!("small".parse::<HamburgerSize>().unwrap(), HamburgerSize::Small);
        assert_eq!("POTATO".parse::<StuffingKind>().unwrap(), StuffingKind::Potato);
    }

    #[test]
    fn unknown_key_is_unknown_menu_item() {
        let err = "Tea".parse::<DrinkKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownMenuItem("Tea".to_string()));

        // Keys never leak across families.
        assert!("Salad".parse::<SaladKind>().is_err());
        assert!("Cola".parse::<StuffingKind>().is_err());
        assert!("".parse::<HamburgerSize>().is_err());
    }

    #[test]
    fn entries_lists_every_row_once() {
        let rows = entries();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].family, Family::Drink);
        assert_eq!(rows[0].key, "COLA");
        assert_eq!(rows[8].family, Family::HamburgerStuffing);
        assert_eq!(rows[8].entry, entry("Potato", 15, 10));
    }

    #[test]
    fn keys_serialize_in_catalog_form() {
        assert_eq!(serde_json::to_string(&DrinkKind::Coffee).unwrap(), "\"COFFEE\"");
        let back: StuffingKind = serde_json::from_str("\"CHEESE\"").unwrap();
        assert_eq!(back, StuffingKind::Cheese);

        let row = serde_json::to_value(entries()[2]).unwrap();
        assert_eq!(row["family"], "salad");
        assert_eq!(row["title"], "Caesar");
        assert_eq!(row["price"], 100);
    }
}
