use crate::config::ShopConfig;
use crate::domain::cart::{Cart, CartEvent};
use crate::domain::catalog::{Catalog, ItemId};
use crate::domain::command::{CartAction, CartCommand};
use crate::domain::ports::OrderChannel;
use crate::domain::request::{Contact, ExternalRequest, MessagingChannel};
use crate::domain::summary::{MessageTemplate, OrderSummary};
use crate::error::{OrderError, Result};
use std::sync::Arc;

/// One visitor's ordering session.
///
/// `OrderSession` owns its cart outright; the catalog is shared read-only, so any number
/// of sessions can run side by side without seeing each other's orders. Every operation
/// runs to completion before the next one starts.
pub struct OrderSession {
    catalog: Arc<Catalog>,
    cart: Cart,
    template: MessageTemplate,
    channel: MessagingChannel,
    destination: Contact,
}

impl OrderSession {
    /// Creates a session with an empty cart.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The menu visitors order from.
    /// * `template` - Greeting wrapped around the order summary.
    /// * `channel` - The messaging service that receives orders.
    /// * `destination` - The shop's contact on that service.
    pub fn new(
        catalog: Arc<Catalog>,
        template: MessageTemplate,
        channel: MessagingChannel,
        destination: Contact,
    ) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            template,
            channel,
            destination,
        }
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &ShopConfig) -> Result<Self> {
        Ok(Self::new(
            catalog,
            config.message_template(),
            config.channel()?,
            config.contact()?,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one portion of the catalog item `id`.
    pub fn add_item(&mut self, id: ItemId) -> Result<CartEvent> {
        let item = self
            .catalog
            .find(id)
            .ok_or(OrderError::UnknownItem(id))?;
        let event = self.cart.add_item(item);
        tracing::debug!(?event, "item added");
        Ok(event)
    }

    pub fn increase_quantity(&mut self, id: ItemId) -> CartEvent {
        let event = self.cart.increase_quantity(id);
        tracing::debug!(?event, "quantity increased");
        event
    }

    pub fn decrease_quantity(&mut self, id: ItemId) -> CartEvent {
        let event = self.cart.decrease_quantity(id);
        tracing::debug!(?event, "quantity decreased");
        event
    }

    pub fn remove_item(&mut self, id: ItemId) -> CartEvent {
        let event = self.cart.remove_item(id);
        tracing::debug!(?event, "item removed");
        event
    }

    pub fn reset(&mut self) -> CartEvent {
        tracing::debug!("cart cleared");
        self.cart.clear()
    }

    /// Applies a single visitor action.
    pub fn apply(&mut self, command: CartCommand) -> Result<CartEvent> {
        let target = || {
            command.item.ok_or_else(|| {
                OrderError::ValidationError(format!("{:?} needs an item id", command.action))
            })
        };
        match command.action {
            CartAction::Add => self.add_item(target()?),
            CartAction::Increase => Ok(self.increase_quantity(target()?)),
            CartAction::Decrease => Ok(self.decrease_quantity(target()?)),
            CartAction::Remove => Ok(self.remove_item(target()?)),
            CartAction::Clear => Ok(self.reset()),
        }
    }

    pub fn order_summary(&self) -> Result<OrderSummary> {
        self.cart.build_order_summary()
    }

    /// Builds the message and request URI for the current cart.
    ///
    /// Refuses with [`OrderError::EmptyCart`] when there is nothing to order and with
    /// [`OrderError::Overflow`] when the total cannot be represented.
    pub fn checkout(&self) -> Result<ExternalRequest> {
        let summary = self.order_summary()?;
        let message = self.template.render(&summary);
        let request = ExternalRequest::new(&self.channel, self.destination.clone(), message)?;
        tracing::info!(
            items = self.cart.total_item_count(),
            total = %summary.total(),
            destination = %request.destination,
            "order ready"
        );
        Ok(request)
    }

    /// Checks out and hands the request to `channel` without waiting on delivery.
    pub async fn submit(&self, channel: &dyn OrderChannel) -> Result<ExternalRequest> {
        let request = self.checkout()?;
        channel.open(&request).await?;
        Ok(request)
    }
}
