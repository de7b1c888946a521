use crate::domain::catalog::{Catalog, MenuItem};
use crate::error::Result;
use std::io::Read;

/// Loads a menu from CSV with the header `id,name,price,description`.
///
/// Unlike cart actions, one bad row fails the whole load.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every row in file order and builds the catalog.
    pub fn read_catalog(self) -> Result<Catalog> {
        let items = self
            .reader
            .into_deserialize()
            .collect::<std::result::Result<Vec<MenuItem>, csv::Error>>()?;
        Catalog::new(items)
    }
}
