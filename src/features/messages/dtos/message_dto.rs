use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::addresses::dtos::AddressPageDto;
use crate::features::conversations::dtos::DialogueReplyDto;
use crate::features::messages::services::{MessageReply, HELP_TEXT};
use crate::shared::constants::{DIRECTORY_UNAVAILABLE_MESSAGE, ITEMS_PER_PAGE};
use crate::shared::pagination::paginate;

/// Request DTO for an inbound chat message
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SendMessageDto {
    /// Search text, command (`/start`, `/help`, `/resi`, `/batal`) or dialogue answer
    #[validate(length(
        min = 1,
        max = 500,
        message = "Message must be between 1 and 500 characters"
    ))]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageReplyKind {
    Help,
    Dialogue,
    Cancelled,
    NoResults,
    Results,
}

/// Reply to an inbound message
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageReplyDto {
    pub kind: MessageReplyKind,
    pub text: String,
    /// First page of results, for `results` replies
    pub results: Option<AddressPageDto>,
    /// Dialogue progress, for `dialogue` replies
    pub dialogue: Option<DialogueReplyDto>,
}

impl MessageReplyDto {
    fn text(kind: MessageReplyKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            results: None,
            dialogue: None,
        }
    }
}

impl From<MessageReply> for MessageReplyDto {
    fn from(reply: MessageReply) -> Self {
        match reply {
            MessageReply::Help => Self::text(MessageReplyKind::Help, HELP_TEXT),
            MessageReply::Cancelled { was_active: true } => {
                Self::text(MessageReplyKind::Cancelled, "Pembuatan resi dibatalkan")
            }
            MessageReply::Cancelled { was_active: false } => Self::text(
                MessageReplyKind::Cancelled,
                "Tidak ada pembuatan resi yang sedang berjalan",
            ),
            MessageReply::NoResults {
                directory_unavailable: false,
            } => Self::text(MessageReplyKind::NoResults, "Tidak ditemukan hasil"),
            MessageReply::NoResults {
                directory_unavailable: true,
            } => Self::text(MessageReplyKind::NoResults, DIRECTORY_UNAVAILABLE_MESSAGE),
            MessageReply::Results(results) => {
                let page = AddressPageDto::from(paginate(&results, 1, ITEMS_PER_PAGE));
                Self {
                    kind: MessageReplyKind::Results,
                    text: format!("Ditemukan {} hasil", results.len()),
                    results: Some(page),
                    dialogue: None,
                }
            }
            MessageReply::Dialogue(outcome) => {
                let dialogue = DialogueReplyDto::from(outcome);
                Self {
                    kind: MessageReplyKind::Dialogue,
                    text: dialogue.prompt.clone(),
                    results: None,
                    dialogue: Some(dialogue),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_text() {
        let missing = MessageReplyDto::from(MessageReply::NoResults {
            directory_unavailable: false,
        });
        assert_eq!(missing.kind, MessageReplyKind::NoResults);
        assert_eq!(missing.text, "Tidak ditemukan hasil");

        let unavailable = MessageReplyDto::from(MessageReply::NoResults {
            directory_unavailable: true,
        });
        assert_eq!(unavailable.kind, MessageReplyKind::NoResults);
        assert_eq!(unavailable.text, "Data kodepos tidak tersedia");
        assert!(unavailable.results.is_none());
    }
}
