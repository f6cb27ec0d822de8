pub mod message_queue;
pub mod message;
pub mod correlation_id;
pub mod random_correlation_id_generator;
pub mod in_memory_message_queue;
pub mod in_memory_message_queue_config;
pub mod error;
pub(crate) mod expired_message_remover;
