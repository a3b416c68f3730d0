use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::conversations::models::{
    ConversationForm, ConversationState, DialogueInput, DialogueStep, ShipmentRequest, Transition,
};
use crate::features::sessions::services::SessionStore;
use crate::modules::labels::{GeneratedLabel, LabelGenerator};
use crate::shared::constants::SESSION_ENDED_MESSAGE;

/// Result of feeding one answer into the dialogue
#[derive(Debug, Clone)]
pub enum DialogueOutcome {
    /// Answer accepted; the dialogue now waits for this step
    Prompt(DialogueStep),
    /// Last answer accepted and the label was generated
    Completed {
        request: ShipmentRequest,
        label: GeneratedLabel,
    },
}

/// Per-user shipment-label dialogues.
///
/// A user without an entry is idle. Each answer is validated and applied
/// while holding the state lock, so two concurrent answers from one user are
/// applied one after the other against fresh state. Finalization removes the
/// entry under the lock and runs the label generator after releasing it.
pub struct ConversationService {
    states: Mutex<HashMap<String, ConversationState>>,
    sessions: Arc<SessionStore>,
    labels: Arc<dyn LabelGenerator>,
}

impl ConversationService {
    pub fn new(sessions: Arc<SessionStore>, labels: Arc<dyn LabelGenerator>) -> Self {
        Self {
            states: Mutex::new(HashMap::new()),
            sessions,
            labels,
        }
    }

    /// Start (or restart) the dialogue for a user.
    ///
    /// The user must have a selected address in a live session; it is read
    /// again at finalization since it may expire while answering.
    pub async fn start(&self, user_id: &str) -> Result<DialogueStep> {
        if self.sessions.get_selected_address(user_id).await.is_none() {
            return Err(session_ended());
        }

        let mut states = self.states.lock().await;
        let previous = states.insert(user_id.to_string(), ConversationState::CollectingName);
        if previous.is_some() {
            tracing::debug!("Restarting label dialogue for user {}", user_id);
        }
        Ok(DialogueStep::Name)
    }

    /// Abandon the dialogue. Returns whether one was in progress.
    pub async fn cancel(&self, user_id: &str) -> bool {
        self.states.lock().await.remove(user_id).is_some()
    }

    pub async fn current_step(&self, user_id: &str) -> DialogueStep {
        self.states
            .lock()
            .await
            .get(user_id)
            .map(ConversationState::step)
            .unwrap_or(DialogueStep::Idle)
    }

    /// Feed a typed message into the dialogue.
    ///
    /// Returns `Ok(None)` when the user is idle, leaving the message to the
    /// caller.
    pub async fn handle_text(&self, user_id: &str, text: &str) -> Result<Option<DialogueOutcome>> {
        self.apply(user_id, DialogueInput::Text(text)).await
    }

    pub async fn choose_courier(&self, user_id: &str, courier: &str) -> Result<DialogueOutcome> {
        self.apply(user_id, DialogueInput::Courier(courier))
            .await?
            .ok_or_else(session_ended)
    }

    pub async fn choose_cod(&self, user_id: &str, cod: bool) -> Result<DialogueOutcome> {
        self.apply(user_id, DialogueInput::Cod(cod))
            .await?
            .ok_or_else(session_ended)
    }

    async fn apply(
        &self,
        user_id: &str,
        input: DialogueInput<'_>,
    ) -> Result<Option<DialogueOutcome>> {
        let form = {
            let mut states = self.states.lock().await;
            let Some(state) = states.get(user_id) else {
                return Ok(None);
            };

            match state.advance(input)? {
                Transition::Advanced(next) => {
                    let step = next.step();
                    states.insert(user_id.to_string(), next);
                    return Ok(Some(DialogueOutcome::Prompt(step)));
                }
                Transition::Completed(form) => {
                    states.remove(user_id);
                    form
                }
            }
        };

        self.finalize(user_id, form).await.map(Some)
    }

    /// Combine the finished form with the selected address and render the
    /// label. The user is already idle when this runs.
    async fn finalize(&self, user_id: &str, form: ConversationForm) -> Result<DialogueOutcome> {
        let record = self
            .sessions
            .get_selected_address(user_id)
            .await
            .ok_or_else(session_ended)?;

        let request = ShipmentRequest::new(form, &record);
        let label = self.labels.generate(&request).await.map_err(|e| {
            tracing::error!("Label generation failed for user {}: {}", user_id, e);
            AppError::from(e)
        })?;

        tracing::info!(
            "Label {} generated for user {} ({}, postal code {})",
            label.file_name,
            user_id,
            request.courier,
            request.postal_code
        );

        Ok(DialogueOutcome::Completed { request, label })
    }
}

fn session_ended() -> AppError {
    AppError::SessionExpired(SESSION_ENDED_MESSAGE.to_string())
}
