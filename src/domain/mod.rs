//! Domain layer: the menu, the cart state machine and the outgoing order request.

pub mod cart;
pub mod catalog;
pub mod command;
pub mod money;
pub mod ports;
pub mod request;
pub mod summary;
