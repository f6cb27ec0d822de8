use serde::{Deserialize, Serialize};

use crate::queue::message::Payload;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Payload>,
}

impl Reply {
    pub fn new(message: Option<Payload>) -> Self {
        return Reply { message };
    }
}
