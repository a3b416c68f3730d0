use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use minijinja::{context, Environment};

use super::{GeneratedLabel, LabelError, LabelGenerator};
use crate::features::conversations::models::ShipmentRequest;
use crate::shared::validation::sanitize_filename;

/// Renders labels from a Jinja template file.
///
/// The template is read on every request so it can be edited without a
/// restart. Available variables: `name`, `phone`, `full_address`,
/// `postal_code`, `courier`, `cod`.
pub struct TemplateLabelGenerator {
    template_path: PathBuf,
    extension: String,
}

impl TemplateLabelGenerator {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        let template_path = template_path.into();
        let extension = output_extension(&template_path);
        Self {
            template_path,
            extension,
        }
    }

    fn file_name(&self, request: &ShipmentRequest, timestamp: i64) -> String {
        format!(
            "resi_{}_{}.{}",
            sanitize_filename(&request.name),
            timestamp,
            self.extension
        )
    }
}

/// `label.html.jinja` renders to `.html`; anything without an inner
/// extension falls back to `.txt`
fn output_extension(template_path: &Path) -> String {
    let file_name = template_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let rendered_name = file_name.strip_suffix(".jinja").unwrap_or(&file_name);

    Path::new(rendered_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_else(|| "txt".to_string())
}

#[async_trait]
impl LabelGenerator for TemplateLabelGenerator {
    async fn generate(&self, request: &ShipmentRequest) -> Result<GeneratedLabel, LabelError> {
        let source = match tokio::fs::read_to_string(&self.template_path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LabelError::TemplateNotFound(
                    self.template_path.display().to_string(),
                ));
            }
            Err(e) => return Err(LabelError::Io(e)),
        };

        let content = Environment::new()
            .render_str(
                &source,
                context! {
                    name => &request.name,
                    phone => &request.phone,
                    full_address => &request.full_address,
                    postal_code => &request.postal_code,
                    courier => request.courier.display_name(),
                    cod => request.cod_label(),
                },
            )
            .map_err(|e| LabelError::Render(e.to_string()))?;

        let generated_at = Utc::now();
        let file_name = self.file_name(request, generated_at.timestamp());
        tracing::debug!("Rendered shipping label {}", file_name);

        Ok(GeneratedLabel {
            file_name,
            content,
            generated_at,
        })
    }
}
