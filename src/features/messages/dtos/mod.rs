pub mod message_dto;

pub use message_dto::{MessageReplyDto, MessageReplyKind, SendMessageDto};
