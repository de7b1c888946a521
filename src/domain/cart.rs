use super::catalog::{ItemId, MenuItem};
use super::money::Money;
use super::summary::OrderSummary;
use crate::error::{OrderError, Result};
use serde::Serialize;
use std::num::NonZeroU32;

/// Number of portions on a cart line. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value).map(Self).ok_or_else(|| {
            OrderError::ValidationError("Quantity must be positive".to_string())
        })
    }

    pub fn value(&self) -> u32 {
        self.0.get()
    }

    fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// `None` once the quantity would drop to zero.
    fn decremented(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }
}

/// One distinct menu item in the cart.
///
/// Name and unit price are cached from the catalog when the line is created so the
/// cart can be rendered without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: Quantity,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: Quantity::ONE,
        }
    }

    /// Unit price times quantity, or [`OrderError::Overflow`] past the `u64` range.
    pub fn subtotal(&self) -> Result<Money> {
        self.unit_price
            .checked_mul(self.quantity.value())
            .ok_or(OrderError::Overflow)
    }
}

/// What a cart operation did, so callers can show feedback for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added from the menu; `quantity` is the line's new quantity.
    Added {
        id: ItemId,
        name: String,
        quantity: Quantity,
    },
    QuantityChanged {
        id: ItemId,
        quantity: Quantity,
    },
    Removed {
        id: ItemId,
    },
    Cleared,
    /// The targeted line does not exist.
    Unchanged,
}

impl CartEvent {
    /// Confirmation text for the visitor, only produced for additions.
    pub fn notification(&self) -> Option<String> {
        match self {
            CartEvent::Added { name, .. } => {
                Some(format!("{} berhasil ditambahkan ke keranjang ✅", name))
            }
            _ => None,
        }
    }
}

/// The order in progress.
///
/// Lines keep the order in which their items were first added. Totals are always
/// computed from the lines, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    /// Adds one portion of `item`, appending a new line the first time it is seen.
    pub fn add_item(&mut self, item: &MenuItem) -> CartEvent {
        let quantity = match self.position(item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.incremented();
                line.quantity
            }
            None => {
                self.lines.push(CartLine::from_item(item));
                Quantity::ONE
            }
        };
        CartEvent::Added {
            id: item.id,
            name: item.name.clone(),
            quantity,
        }
    }

    pub fn increase_quantity(&mut self, id: ItemId) -> CartEvent {
        match self.position(id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.incremented();
                CartEvent::QuantityChanged {
                    id,
                    quantity: line.quantity,
                }
            }
            None => CartEvent::Unchanged,
        }
    }

    /// Takes one portion off; the line disappears when its last portion goes.
    pub fn decrease_quantity(&mut self, id: ItemId) -> CartEvent {
        let Some(index) = self.position(id) else {
            return CartEvent::Unchanged;
        };
        match self.lines[index].quantity.decremented() {
            Some(quantity) => {
                self.lines[index].quantity = quantity;
                CartEvent::QuantityChanged { id, quantity }
            }
            None => {
                self.lines.remove(index);
                CartEvent::Removed { id }
            }
        }
    }

    pub fn remove_item(&mut self, id: ItemId) -> CartEvent {
        match self.position(id) {
            Some(index) => {
                self.lines.remove(index);
                CartEvent::Removed { id }
            }
            None => CartEvent::Unchanged,
        }
    }

    pub fn clear(&mut self) -> CartEvent {
        self.lines.clear();
        CartEvent::Cleared
    }

    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.value()))
            .sum()
    }

    pub fn total_price(&self) -> Result<Money> {
        self.lines.iter().try_fold(Money::ZERO, |total, line| {
            total
                .checked_add(line.subtotal()?)
                .ok_or(OrderError::Overflow)
        })
    }

    /// Renders the lines as `"<name> x<quantity>"` in cart order.
    ///
    /// An empty cart has no summary and yields [`OrderError::EmptyCart`].
    pub fn build_order_summary(&self) -> Result<OrderSummary> {
        if !self.has_lines() {
            return Err(OrderError::EmptyCart);
        }
        let product_list = self
            .lines
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity.value()))
            .collect::<Vec<_>>()
            .join(OrderSummary::SEPARATOR);
        Ok(OrderSummary::new(product_list, self.total_price()?))
    }

    pub fn snapshot(&self) -> Result<CartSnapshot> {
        Ok(CartSnapshot {
            lines: self.lines.clone(),
            total_items: self.total_item_count(),
            total_price: self.total_price()?,
        })
    }
}

/// Read-only view of the cart for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Money,
}
