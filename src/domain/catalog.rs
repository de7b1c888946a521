use super::money::Money;
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a menu item.
///
/// Cart lines are matched on this key only, never on names or prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable dish as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            price: Money::new(price),
            description: description.into(),
        }
    }
}

/// The read-only, ordered list of everything that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order. Identities must be unique.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(OrderError::DuplicateItem(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The house menu served when no catalog file is supplied.
    pub fn house_menu() -> Self {
        Self {
            items: vec![
                MenuItem::new(
                    1,
                    "Nasi Goreng",
                    15000,
                    "Nasi goreng spesial dengan telur dan ayam.",
                ),
                MenuItem::new(2, "Mie Ayam", 12000, "Mie ayam gurih dengan topping melimpah."),
                MenuItem::new(
                    3,
                    "Ayam Geprek",
                    18000,
                    "Ayam crispy dengan sambal pedas mantap.",
                ),
            ],
        }
    }

    pub fn items_available(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
