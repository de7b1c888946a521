//! CSV adapters: catalog and cart-action input, cart and menu output.

pub mod cart_writer;
pub mod catalog_reader;
pub mod command_reader;
