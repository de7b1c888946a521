use std::io::{Error, Write};
use tempfile::NamedTempFile;
use warung::domain::catalog::{Catalog, ItemId, MenuItem};

/// Writes an actions CSV (`action,item`) with the given rows to a temp file.
pub fn actions_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "action,item")?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

/// A menu with prices that make accidental sums easy to spot.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        MenuItem::new(1, "Nasi Goreng", 15000, "Nasi goreng spesial."),
        MenuItem::new(2, "Mie Ayam", 12000, "Mie ayam gurih."),
        MenuItem::new(3, "Ayam Geprek", 18000, "Ayam crispy sambal."),
        MenuItem::new(4, "Es Teh", 3000, "Teh manis dingin."),
        MenuItem::new(5, "Kerupuk", 1000, "Kerupuk udang."),
    ])
    .expect("sample catalog ids are unique")
}

pub fn ids(catalog: &Catalog) -> Vec<ItemId> {
    catalog.items_available().iter().map(|item| item.id).collect()
}
