use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::clock::clock::{Clock, SystemClock};
use crate::queue::correlation_id::CorrelationId;
use crate::queue::error::QueueErrorType;
use crate::queue::expired_message_remover::ExpiredMessageRemover;
use crate::queue::in_memory_message_queue_config::InMemoryMessageQueueConfig;
use crate::queue::message::{QueueMessage, TimestampedMessage};
use crate::queue::message_queue::MessageQueue;

pub struct InMemoryMessageQueue {
    messages_by_destination: Arc<DashMap<String, Vec<TimestampedMessage>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMessageQueue {
    pub fn new() -> Self {
        return Self::new_with_config(Arc::new(SystemClock::new()), InMemoryMessageQueueConfig::default());
    }

    pub fn new_with_config(clock: Arc<dyn Clock>, config: InMemoryMessageQueueConfig) -> Self {
        let messages_by_destination = Arc::new(DashMap::new());
        let message_queue = InMemoryMessageQueue {
            messages_by_destination,
            clock: clock.clone(),
        };

        message_queue.spin_expired_messages_remover(config);
        return message_queue;
    }

    fn spin_expired_messages_remover(&self, config: InMemoryMessageQueueConfig) {
        ExpiredMessageRemover::start(
            self.messages_by_destination.clone(),
            self.clock.clone(),
            config,
        );
    }
}

#[async_trait]
impl MessageQueue for InMemoryMessageQueue {
    async fn send(&self, destination: &str, message: QueueMessage) -> Result<(), QueueErrorType> {
        let timestamped_message = TimestampedMessage::new(message, self.clock.now());
        self.messages_by_destination
            .entry(destination.to_string())
            .or_insert_with(Vec::new)
            .push(timestamped_message);

        return Ok(());
    }

    async fn receive_selective(&self, destination: &str, correlation_id: &CorrelationId) -> Result<Option<QueueMessage>, QueueErrorType> {
        if let Some(mut messages) = self.messages_by_destination.get_mut(destination) {
            if let Some(index) = messages.iter().position(|message| message.matches(correlation_id)) {
                return Ok(Some(messages.remove(index).into_message()));
            }
        }
        return Ok(None);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::queue::in_memory_message_queue::InMemoryMessageQueue;
    use crate::queue::message::QueueMessage;
    use crate::queue::message_queue::MessageQueue;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn send_and_receive_selective() {
        let message_queue = Arc::new(InMemoryMessageQueue::new());

        message_queue.send("orders", QueueMessage::new("order placed".to_string(), "order-1".to_string())).await.unwrap();
        let message = message_queue.receive_selective("orders", &"order-1".to_string()).await.unwrap();

        assert_eq!(Some(QueueMessage::new("order placed".to_string(), "order-1".to_string())), message);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn receive_selective_without_a_matching_message() {
        let message_queue = Arc::new(InMemoryMessageQueue::new());

        message_queue.send("orders", QueueMessage::new("order placed".to_string(), "order-1".to_string())).await.unwrap();
        let message = message_queue.receive_selective("orders", &"order-2".to_string()).await.unwrap();

        assert_eq!(None, message);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn receive_selective_on_an_unknown_destination() {
        let message_queue = Arc::new(InMemoryMessageQueue::new());

        let message = message_queue.receive_selective("orders", &"order-1".to_string()).await.unwrap();

        assert_eq!(None, message);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn receive_selective_consumes_the_matching_message() {
        let message_queue = Arc::new(InMemoryMessageQueue::new());

        message_queue.send("orders", QueueMessage::new("order placed".to_string(), "order-1".to_string())).await.unwrap();

        let message = message_queue.receive_selective("orders", &"order-1".to_string()).await.unwrap();
        assert_eq!(Some(QueueMessage::new("order placed".to_string(), "order-1".to_string())), message);

        let message = message_queue.receive_selective("orders", &"order-1".to_string()).await.unwrap();
        assert_eq!(None, message);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn receive_selective_in_an_order_different_from_send() {
        let message_queue = Arc::new(InMemoryMessageQueue::new());

        message_queue.send("orders", QueueMessage::new("first order".to_string(), "order-1".to_string())).await.unwrap();
        message_queue.send("orders", QueueMessage::new("second order".to_string(), "order-2".to_string())).await.unwrap();
        message_queue.send("orders", QueueMessage::new("third order".to_string(), "order-3".to_string())).await.unwrap();

        let message = message_queue.receive_selective("orders", &"order-2".to_string()).await.unwrap();
        assert_eq!("second order", message.unwrap().into_payload());

        let message = message_queue.receive_selective("orders", &"order-3".to_string()).await.unwrap();
        assert_eq!("third order", message.unwrap().into_payload());

        let message = message_queue.receive_selective("orders", &"order-1".to_string()).await.unwrap();
        assert_eq!("first order", message.unwrap().into_payload());
    }
}
