use std::sync::Arc;

use tracing::{debug, info};

use crate::application::use_cases::response_projector::{project_array_field, MODELS_FIELD};
use crate::application::CompletionTransport;
use crate::domain::{record_str, DomainError, ResultRecord};

/// Use case for listing the models the provider exposes.
pub struct ListModelsUseCase {
    transport: Arc<dyn CompletionTransport>,
}

impl ListModelsUseCase {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self { transport }
    }

    pub async fn execute(&self) -> Result<Vec<ResultRecord>, DomainError> {
        info!("Listing models from {}", self.transport.provider_name());

        let body = self.transport.list_models().await?;
        let models = project_array_field(&body, MODELS_FIELD)?;

        for model in &models {
            debug!(
                "Model id={} object={} created={} owned_by={}",
                record_str(model, "id").unwrap_or("-"),
                record_str(model, "object").unwrap_or("-"),
                model.get("created").and_then(|v| v.as_i64()).unwrap_or_default(),
                record_str(model, "owned_by").unwrap_or("-"),
            );
        }

        Ok(models)
    }
}
