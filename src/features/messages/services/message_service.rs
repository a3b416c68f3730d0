use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::addresses::services::DirectoryService;
use crate::features::conversations::services::{ConversationService, DialogueOutcome};
use crate::features::sessions::models::ResultSet;
use crate::features::sessions::services::SessionStore;
use crate::shared::constants::{COMMAND_CANCEL, COMMAND_HELP, COMMAND_LABEL, COMMAND_START};

pub const HELP_TEXT: &str = "BOT PENCARIAN ALAMAT INDONESIA\n\
Ketik nama wilayah yang ingin dicari:\n\
Contoh: Bakongan atau kode_pos:23773\n\
Gunakan filter spesifik:\n\
kelurahan:Bakongan provinsi:Aceh\n\
Atau kombinasi teks bebas dan filter:\n\
Bakongan provinsi:Aceh\n\
Pilih salah satu hasil, lalu ketik /resi untuk membuat resi pengiriman";

/// What an inbound message resolved to
#[derive(Debug, Clone)]
pub enum MessageReply {
    Help,
    /// The dialogue consumed the message (or was started by it)
    Dialogue(DialogueOutcome),
    Cancelled { was_active: bool },
    /// Nothing matched; `directory_unavailable` is set when the dataset failed to load
    NoResults { directory_unavailable: bool },
    /// Search results, already cached in the user's session
    Results(ResultSet),
}

/// Routes chat messages to commands, the label dialogue or the directory
pub struct MessageService {
    directory: Arc<DirectoryService>,
    sessions: Arc<SessionStore>,
    conversations: Arc<ConversationService>,
}

impl MessageService {
    pub fn new(
        directory: Arc<DirectoryService>,
        sessions: Arc<SessionStore>,
        conversations: Arc<ConversationService>,
    ) -> Self {
        Self {
            directory,
            sessions,
            conversations,
        }
    }

    pub async fn handle(&self, user_id: &str, text: &str) -> Result<MessageReply> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Pesan tidak boleh kosong".to_string()));
        }

        match text {
            COMMAND_START | COMMAND_HELP => return Ok(MessageReply::Help),
            COMMAND_LABEL => {
                let step = self.conversations.start(user_id).await?;
                return Ok(MessageReply::Dialogue(DialogueOutcome::Prompt(step)));
            }
            COMMAND_CANCEL => {
                let was_active = self.conversations.cancel(user_id).await;
                return Ok(MessageReply::Cancelled { was_active });
            }
            _ => {}
        }

        if let Some(outcome) = self.conversations.handle_text(user_id, text).await? {
            return Ok(MessageReply::Dialogue(outcome));
        }

        let results = self.directory.search(text);
        if results.is_empty() {
            let load_error = self.directory.load_error();
            if let Some(err) = load_error {
                tracing::warn!("Search on unavailable directory: {}", err);
            }
            return Ok(MessageReply::NoResults {
                directory_unavailable: load_error.is_some(),
            });
        }

        let results = self.sessions.save_results(user_id, results).await;
        Ok(MessageReply::Results(results))
    }
}
