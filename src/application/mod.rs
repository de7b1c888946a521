//! Application layer tying the menu, the cart and the messaging channel together.
//!
//! `OrderSession` is the entry point a front end drives: it turns visitor actions into
//! cart operations and a finished cart into a request for the messaging service.

pub mod session;
