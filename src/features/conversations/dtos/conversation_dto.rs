use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::conversations::models::{Courier, DialogueStep, ShipmentRequest};
use crate::features::conversations::services::DialogueOutcome;
use crate::modules::labels::GeneratedLabel;

/// Request DTO for choosing the courier
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChooseCourierDto {
    /// One of `JNE`, `J&T`, `SiCepat`, `Lion Parcel`
    #[validate(length(min = 1, message = "Courier is required"))]
    pub courier: String,
}

/// Request DTO for the cash-on-delivery choice
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChooseCodDto {
    pub cod: bool,
}

/// A generated shipping label
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LabelDto {
    pub file_name: String,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

impl From<GeneratedLabel> for LabelDto {
    fn from(label: GeneratedLabel) -> Self {
        Self {
            file_name: label.file_name,
            content: label.content,
            generated_at: label.generated_at,
        }
    }
}

/// Where the dialogue stands after a request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DialogueReplyDto {
    pub step: DialogueStep,
    pub prompt: String,
    /// Answers offered for choice steps (courier, COD)
    pub choices: Vec<String>,
    /// Present once the dialogue completed
    pub shipment: Option<ShipmentRequest>,
    pub label: Option<LabelDto>,
}

impl DialogueReplyDto {
    pub fn at(step: DialogueStep) -> Self {
        let choices = match step {
            DialogueStep::Courier => Courier::ALL
                .iter()
                .map(|courier| courier.to_string())
                .collect(),
            DialogueStep::Cod => vec!["Ya".to_string(), "Tidak".to_string()],
            _ => Vec::new(),
        };

        Self {
            step,
            prompt: step.prompt().to_string(),
            choices,
            shipment: None,
            label: None,
        }
    }
}

impl From<DialogueOutcome> for DialogueReplyDto {
    fn from(outcome: DialogueOutcome) -> Self {
        match outcome {
            DialogueOutcome::Prompt(step) => Self::at(step),
            DialogueOutcome::Completed { request, label } => Self {
                step: DialogueStep::Idle,
                prompt: "Resi berhasil dibuat".to_string(),
                choices: Vec::new(),
                shipment: Some(request),
                label: Some(label.into()),
            },
        }
    }
}
