use crate::domain::cart::Cart;
use crate::domain::catalog::{Catalog, ItemId};
use crate::domain::money::Money;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CartRow<'a> {
    id: ItemId,
    name: &'a str,
    unit_price: Money,
    quantity: u32,
    subtotal: Money,
}

/// Writes cart and menu listings as CSV.
pub struct CartWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CartWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One row per line in cart order: `id,name,unit_price,quantity,subtotal`.
    ///
    /// An empty cart still gets its header row.
    pub fn write_cart(&mut self, cart: &Cart) -> Result<()> {
        if !cart.has_lines() {
            self.writer
                .write_record(["id", "name", "unit_price", "quantity", "subtotal"])?;
        }
        for line in cart.lines() {
            self.writer.serialize(CartRow {
                id: line.id,
                name: &line.name,
                unit_price: line.unit_price,
                quantity: line.quantity.value(),
                subtotal: line.subtotal()?,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// The menu in catalog order: `id,name,price,description`.
    pub fn write_menu(&mut self, catalog: &Catalog) -> Result<()> {
        if catalog.is_empty() {
            self.writer
                .write_record(["id", "name", "price", "description"])?;
        }
        for item in catalog.items_available() {
            self.writer.serialize(item)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
