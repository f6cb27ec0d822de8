use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::clock::clock::Clock;
use crate::queue::correlation_id::CorrelationId;

pub type Payload = String;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueMessage {
    payload: Payload,
    correlation_id: CorrelationId,
}

impl QueueMessage {
    pub fn new(payload: Payload, correlation_id: CorrelationId) -> Self {
        return QueueMessage {
            payload,
            correlation_id,
        };
    }

    pub fn get_payload(&self) -> &Payload {
        return &self.payload;
    }

    pub fn into_payload(self) -> Payload {
        return self.payload;
    }

    pub fn get_correlation_id(&self) -> &CorrelationId {
        return &self.correlation_id;
    }
}

pub(crate) struct TimestampedMessage {
    message: QueueMessage,
    creation_time: SystemTime,
}

impl TimestampedMessage {
    pub(crate) fn new(message: QueueMessage, creation_time: SystemTime) -> Self {
        return TimestampedMessage {
            message,
            creation_time,
        };
    }

    pub(crate) fn matches(&self, correlation_id: &CorrelationId) -> bool {
        return self.message.get_correlation_id() == correlation_id;
    }

    pub(crate) fn get_correlation_id(&self) -> &CorrelationId {
        return self.message.get_correlation_id();
    }

    pub(crate) fn into_message(self) -> QueueMessage {
        return self.message;
    }

    pub(crate) fn has_expired(&self, clock: &Arc<dyn Clock>, expiry_after: &Duration) -> bool {
        return clock.duration_since(self.creation_time).ge(expiry_after);
    }
}
