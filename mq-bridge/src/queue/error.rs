use std::error::Error;

pub type QueueErrorType = Box<dyn Error + Send + Sync + 'static>;
