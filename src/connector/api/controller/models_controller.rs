use anyhow::Result;

use crate::domain::{record_str, ResultRecord};

use super::super::Container;
use super::format_records_json;

pub struct ModelsController<'a> {
    container: &'a Container,
}

impl<'a> ModelsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, json: bool) -> Result<String> {
        let use_case = self.container.list_models_use_case();
        let models = use_case.execute().await?;

        if json {
            return format_records_json(&models);
        }
        Ok(self.format_model_list(&models))
    }

    fn format_model_list(&self, models: &[ResultRecord]) -> String {
        if models.is_empty() {
            return "No models available.".to_string();
        }

        let mut output = format!("Available models ({}):\n\n", models.len());
        for model in models {
            output.push_str(&format!(
                "  {} (owned by {})\n",
                record_str(model, "id").unwrap_or("<unknown>"),
                record_str(model, "owned_by").unwrap_or("-")
            ));
        }

        output
    }
}
