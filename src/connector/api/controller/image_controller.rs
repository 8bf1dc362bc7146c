use std::path::Path;

use anyhow::{Context, Result};

use super::super::Container;
use super::{format_choices, format_records_json};

pub struct ImageController<'a> {
    container: &'a Container,
}

impl<'a> ImageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn prompt(
        &self,
        text: String,
        url: Option<String>,
        file: Option<String>,
        json: bool,
    ) -> Result<String> {
        let use_case = self.container.prompt_image_use_case();

        let choices = match (url, file) {
            (Some(url), _) => use_case.execute(&text, &url).await?,
            (None, Some(path)) => {
                let (bytes, filename) = read_image(&path).await?;
                use_case.execute_with_upload(&text, bytes, &filename).await?
            }
            (None, None) => anyhow::bail!("either --url or --file is required"),
        };

        if json {
            return format_records_json(&choices);
        }
        Ok(format_choices(&choices))
    }

    pub async fn upload(&self, path: String) -> Result<String> {
        let (bytes, filename) = read_image(&path).await?;
        let use_case = self.container.upload_image_use_case()?;
        Ok(use_case.execute(bytes, &filename).await?)
    }
}

async fn read_image(path: &str) -> Result<(Vec<u8>, String)> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path))?;
    let filename = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Ok((bytes, filename))
}
