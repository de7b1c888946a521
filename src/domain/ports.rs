use super::request::ExternalRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Hands a finished order to the outside messaging service.
///
/// Delivery is the service's business: implementations return once the request has
/// been handed off and never wait for, inspect or retry the outcome.
#[async_trait]
pub trait OrderChannel: Send + Sync {
    async fn open(&self, request: &ExternalRequest) -> Result<()>;
}

pub type OrderChannelBox = Box<dyn OrderChannel>;
