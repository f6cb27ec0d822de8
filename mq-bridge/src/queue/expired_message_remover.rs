use std::sync::Arc;
use std::thread;
use std::time::Duration;

use dashmap::DashMap;
use tracing::debug;

use crate::clock::clock::Clock;
use crate::queue::in_memory_message_queue_config::InMemoryMessageQueueConfig;
use crate::queue::message::TimestampedMessage;

pub(crate) struct ExpiredMessageRemover {
    messages_by_destination: Arc<DashMap<String, Vec<TimestampedMessage>>>,
    expiry_after: Duration,
    clock: Arc<dyn Clock>,
}

impl ExpiredMessageRemover {
    pub(crate) fn start(messages_by_destination: Arc<DashMap<String, Vec<TimestampedMessage>>>,
                        clock: Arc<dyn Clock>,
                        config: InMemoryMessageQueueConfig) {

        let remover = ExpiredMessageRemover {
            messages_by_destination,
            expiry_after: config.get_message_expiry_after(),
            clock,
        };
        let pause_message_expiry_checker = config.get_pause_message_expiry_checker();

        thread::spawn(move || {
            loop {
                remover.remove();
                thread::sleep(pause_message_expiry_checker);
            }
        });
    }

    fn remove(&self) {
        for mut messages in self.messages_by_destination.iter_mut() {
            messages.value_mut().retain(|message| {
                let has_expired = message.has_expired(&self.clock, &self.expiry_after);
                if has_expired {
                    debug!(correlation_id = %message.get_correlation_id(), "dropping the expired message");
                    return false;
                }
                return true;
            });
        }
    }
}
