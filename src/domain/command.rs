use super::catalog::ItemId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Add,
    Increase,
    Decrease,
    Remove,
    Clear,
}

/// One visitor action against the cart. `item` is empty only for `clear`.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct CartCommand {
    pub action: CartAction,
    pub item: Option<ItemId>,
}

impl CartCommand {
    pub fn new(action: CartAction, item: Option<ItemId>) -> Self {
        Self { action, item }
    }
}
