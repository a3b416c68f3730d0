//! Shipping label (resi) generation
//!
//! The dialogue hands a finished [`ShipmentRequest`] to a [`LabelGenerator`]
//! and returns the produced document to the user.

mod template_label_generator;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::features::conversations::models::ShipmentRequest;

pub use template_label_generator::TemplateLabelGenerator;

/// A rendered shipping label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLabel {
    pub file_name: String,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("Template resi tidak ditemukan: {0}")]
    TemplateNotFound(String),

    #[error("Failed to read label template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render label: {0}")]
    Render(String),
}

/// Document-generation collaborator for finished shipment requests
#[async_trait]
pub trait LabelGenerator: Send + Sync {
    async fn generate(&self, request: &ShipmentRequest) -> Result<GeneratedLabel, LabelError>;
}
