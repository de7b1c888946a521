//! Channel implementations for handing orders to the messaging service.

pub mod in_memory;
pub mod launcher;
