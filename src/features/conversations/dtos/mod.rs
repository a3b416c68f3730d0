pub mod conversation_dto;

pub use conversation_dto::{ChooseCodDto, ChooseCourierDto, DialogueReplyDto, LabelDto};
