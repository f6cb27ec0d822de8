use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::queue::correlation_id::CorrelationId;
use crate::queue::error::QueueErrorType;
use crate::queue::message::Payload;

pub type BridgeError = Box<dyn Error + Send + Sync + 'static>;

pub struct PublishFailure {
    pub correlation_id: CorrelationId,
    pub payload: Payload,
    pub cause: QueueErrorType,
}

impl Display for PublishFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Failed to publish the message with the correlation id {}: {}", self.correlation_id, self.cause)
    }
}

impl Debug for PublishFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Failed to publish the message with the correlation id {}: {}", self.correlation_id, self.cause)
    }
}

impl Error for PublishFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause.as_ref();
        return Some(cause);
    }
}

pub struct ConsumeFailure {
    pub correlation_id: CorrelationId,
    pub cause: QueueErrorType,
}

impl Display for ConsumeFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Failed to consume the message with the correlation id {}: {}", self.correlation_id, self.cause)
    }
}

impl Debug for ConsumeFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Failed to consume the message with the correlation id {}: {}", self.correlation_id, self.cause)
    }
}

impl Error for ConsumeFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause.as_ref();
        return Some(cause);
    }
}
