use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ImageController, ModelsController, PromptController};

pub struct Router<'a> {
    models_controller: ModelsController<'a>,
    prompt_controller: PromptController<'a>,
    image_controller: ImageController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            models_controller: ModelsController::new(container),
            prompt_controller: PromptController::new(container),
            image_controller: ImageController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Models { json } => self.models_controller.list(json).await,
            Commands::Prompt { turns, json } => self.prompt_controller.prompt(turns, json).await,
            Commands::Image {
                text,
                url,
                file,
                json,
            } => self.image_controller.prompt(text, url, file, json).await,
            Commands::Upload { path } => self.image_controller.upload(path).await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            mock: true,
            ..ContainerConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_routes_models() {
        let container = mock_container();
        let output = Router::new(&container)
            .route(Commands::Models { json: false })
            .await
            .unwrap();
        assert!(output.contains("gpt-4o-mini"));
    }

    #[tokio::test]
    async fn test_routes_prompt() {
        let container = mock_container();
        let output = Router::new(&container)
            .route(Commands::Prompt {
                turns: vec!["system:be nice".to_string(), "hello there".to_string()],
                json: false,
            })
            .await
            .unwrap();
        assert_eq!(output, "echo: hello there");
    }

    #[tokio::test]
    async fn test_routes_image_by_url_as_json() {
        let container = mock_container();
        let output = Router::new(&container)
            .route(Commands::Image {
                text: "what colour?".to_string(),
                url: Some("https://i.example.com/p.png".to_string()),
                file: None,
                json: true,
            })
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["message"]["content"], "echo: what colour?");
    }

    #[tokio::test]
    async fn test_routes_upload_of_missing_file_fails() {
        let container = mock_container();
        let result = Router::new(&container)
            .route(Commands::Upload {
                path: "/definitely/not/here.png".to_string(),
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_routes_upload_of_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, [0x89u8, b'P', b'N', b'G']).unwrap();

        let container = mock_container();
        let output = Router::new(&container)
            .route(Commands::Upload {
                path: path.to_string_lossy().to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output, "https://images.mock.local/shot.png");
    }

    #[tokio::test]
    async fn test_routes_image_with_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.jpg");
        std::fs::write(&path, [0xffu8, 0xd8, 0xff]).unwrap();

        let container = mock_container();
        let output = Router::new(&container)
            .route(Commands::Image {
                text: "total amount?".to_string(),
                url: None,
                file: Some(path.to_string_lossy().to_string()),
                json: false,
            })
            .await
            .unwrap();
        assert_eq!(output, "echo: total amount?");
    }
}
