pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    build_image_request, build_text_request, project_array_field, CompletionTransport, ImageHost,
    ListModelsUseCase, PromptImageUseCase, PromptTextUseCase, UploadImageUseCase, CHOICES_FIELD,
    MODELS_FIELD,
};

pub use connector::{
    ImgurClient, MockCompletionTransport, MockImageHost, OpenAiClient, ProviderConfig,
};

pub use domain::{
    ChatMessage, CompletionPayload, CompletionRequest, ContentPart, DomainError, ImageMessage,
    ImageMessageRequest, ImageUrl, MessageContent, ResultRecord, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
