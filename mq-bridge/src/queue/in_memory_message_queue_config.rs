use std::time::Duration;

pub struct InMemoryMessageQueueConfig {
    message_expiry_after: Duration,
    pause_message_expiry_checker: Duration,
}

impl InMemoryMessageQueueConfig {
    pub fn new(message_expiry_after: Duration,
               pause_message_expiry_checker: Duration) -> Self {

        return InMemoryMessageQueueConfig {
            message_expiry_after,
            pause_message_expiry_checker,
        };
    }

    pub fn default() -> Self {
        return Self::new(
            Duration::from_secs(60),
            Duration::from_secs(30)
        );
    }

    pub fn get_message_expiry_after(&self) -> Duration {
        return self.message_expiry_after;
    }

    pub fn get_pause_message_expiry_checker(&self) -> Duration {
        return self.pause_message_expiry_checker;
    }
}
