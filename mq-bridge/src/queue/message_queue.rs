use async_trait::async_trait;

use crate::queue::correlation_id::CorrelationId;
use crate::queue::error::QueueErrorType;
use crate::queue::message::QueueMessage;

#[async_trait]
pub trait MessageQueue: Send + Sync {
    async fn send(&self, destination: &str, message: QueueMessage) -> Result<(), QueueErrorType>;

    async fn receive_selective(&self, destination: &str, correlation_id: &CorrelationId) -> Result<Option<QueueMessage>, QueueErrorType>;
}
