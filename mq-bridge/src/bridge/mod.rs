pub mod request_reply_bridge;
pub mod reply;
pub mod error;
