mod message_service;

pub use message_service::{MessageReply, MessageService, HELP_TEXT};
