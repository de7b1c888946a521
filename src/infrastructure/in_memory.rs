use crate::domain::ports::OrderChannel;
use crate::domain::request::ExternalRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A channel that keeps every request it is asked to open.
///
/// Clones share the same log, so a test can hand one clone to the code under test and
/// inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryChannel {
    opened: Arc<RwLock<Vec<ExternalRequest>>>,
}

impl InMemoryChannel {
    /// Creates a new channel with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests opened so far, oldest first.
    pub async fn opened(&self) -> Vec<ExternalRequest> {
        self.opened.read().await.clone()
    }
}

#[async_trait]
impl OrderChannel for InMemoryChannel {
    async fn open(&self, request: &ExternalRequest) -> Result<()> {
        let mut opened = self.opened.write().await;
        opened.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::OrderChannelBox;
    use crate::domain::request::{Contact, MessagingChannel};

    fn request(message: &str) -> ExternalRequest {
        let channel = MessagingChannel::parse("https://wa.me").unwrap();
        let contact = Contact::new("6285607492894").unwrap();
        ExternalRequest::new(&channel, contact, message.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_channel_records_in_order() {
        let channel = InMemoryChannel::new();
        channel.open(&request("pertama")).await.unwrap();
        channel.open(&request("kedua")).await.unwrap();

        let opened = channel.opened().await;
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0].message, "pertama");
        assert_eq!(opened[1].message, "kedua");
    }

    #[tokio::test]
    async fn test_clones_share_log_across_tasks() {
        let channel = InMemoryChannel::new();
        let boxed: OrderChannelBox = Box::new(channel.clone());

        let handle = tokio::spawn(async move {
            boxed.open(&request("dari task")).await.unwrap();
        });
        handle.await.unwrap();

        assert_eq!(channel.opened().await[0].message, "dari task");
    }
}
