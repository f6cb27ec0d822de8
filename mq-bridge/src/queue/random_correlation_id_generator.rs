use uuid::Uuid;

use crate::queue::correlation_id::{CorrelationId, CorrelationIdGenerator};

pub struct RandomCorrelationIdGenerator {}

impl CorrelationIdGenerator for RandomCorrelationIdGenerator {
    fn generate(&self) -> CorrelationId {
        return Uuid::new_v4().to_string();
    }
}

impl RandomCorrelationIdGenerator {
    pub fn new() -> Self {
        return RandomCorrelationIdGenerator {};
    }
}
