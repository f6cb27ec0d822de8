use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::warn;

use crate::bridge::error::{BridgeError, ConsumeFailure, PublishFailure};
use crate::bridge::reply::Reply;
use crate::queue::correlation_id::{CorrelationId, CorrelationIdGenerator};
use crate::queue::message::{Payload, QueueMessage};
use crate::queue::message_queue::MessageQueue;
use crate::queue::random_correlation_id_generator::RandomCorrelationIdGenerator;

pub struct RequestReplyBridge {
    message_queue: Arc<dyn MessageQueue>,
    destination: String,
    correlation_id_generator: Arc<dyn CorrelationIdGenerator>,
}

impl RequestReplyBridge {
    pub fn new(message_queue: Arc<dyn MessageQueue>, destination: String) -> Self {
        return Self::new_with_correlation_id_generator(
            message_queue,
            destination,
            Arc::new(RandomCorrelationIdGenerator::new()),
        );
    }

    pub fn new_with_correlation_id_generator(message_queue: Arc<dyn MessageQueue>,
                                             destination: String,
                                             correlation_id_generator: Arc<dyn CorrelationIdGenerator>) -> Self {

        return RequestReplyBridge {
            message_queue,
            destination,
            correlation_id_generator,
        };
    }

    pub async fn publish(&self, payload: Payload, correlation_id: CorrelationId) -> Result<CorrelationId, BridgeError> {
        return Self::publish_message(&self.message_queue, &self.destination, payload, correlation_id).await;
    }

    pub async fn consume(&self, correlation_id: &CorrelationId) -> Result<Option<Payload>, BridgeError> {
        return Self::consume_message(&self.message_queue, &self.destination, correlation_id).await;
    }

    pub async fn send_and_receive(&self, payload: Payload) -> Result<Option<Payload>, BridgeError> {
        let correlation_id = self.correlation_id_generator.generate();
        let correlation_id = self.publish(payload, correlation_id).await?;
        return self.consume(&correlation_id).await;
    }

    pub async fn send_and_receive_many(&self, payloads: Vec<Payload>) -> Result<Vec<Reply>, BridgeError> {
        let mut exchanges: JoinSet<Result<Reply, BridgeError>> = JoinSet::new();
        for payload in payloads {
            let message_queue = self.message_queue.clone();
            let destination = self.destination.clone();
            let correlation_id = self.correlation_id_generator.generate();

            exchanges.spawn(async move {
                let correlation_id = Self::publish_message(&message_queue, &destination, payload, correlation_id).await?;
                let reply = Self::consume_message(&message_queue, &destination, &correlation_id).await?;
                return Ok(Reply::new(reply));
            });
        }

        let mut replies = Vec::new();
        while let Some(exchange_result) = exchanges.join_next().await {
            match exchange_result.unwrap() {
                Ok(reply) => replies.push(reply),
                Err(error) => {
                    exchanges.abort_all();
                    return Err(error);
                }
            }
        }
        return Ok(replies);
    }

    async fn publish_message(message_queue: &Arc<dyn MessageQueue>,
                             destination: &str,
                             payload: Payload,
                             correlation_id: CorrelationId) -> Result<CorrelationId, BridgeError> {

        let message = QueueMessage::new(payload.clone(), correlation_id.clone());
        return match message_queue.send(destination, message).await {
            Ok(_) => Ok(correlation_id),
            Err(cause) => {
                warn!(correlation_id = %correlation_id, error = %cause, "failed to send the message");
                Err(Box::new(PublishFailure {
                    correlation_id,
                    payload,
                    cause,
                }))
            }
        };
    }

    async fn consume_message(message_queue: &Arc<dyn MessageQueue>,
                             destination: &str,
                             correlation_id: &CorrelationId) -> Result<Option<Payload>, BridgeError> {

        return match message_queue.receive_selective(destination, correlation_id).await {
            Ok(Some(message)) => Ok(Some(message.into_payload())),
            Ok(None) => Ok(None),
            Err(cause) => {
                warn!(correlation_id = %correlation_id, error = %cause, "failed to receive the message");
                Err(Box::new(ConsumeFailure {
                    correlation_id: correlation_id.clone(),
                    cause,
                }))
            }
        };
    }
}
