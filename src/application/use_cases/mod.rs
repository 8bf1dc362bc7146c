pub mod message_builder;
pub mod response_projector;

mod list_models;
mod prompt_image;
mod prompt_text;
mod upload_image;

pub use list_models::*;
pub use message_builder::*;
pub use prompt_image::*;
pub use prompt_text::*;
pub use response_projector::*;
pub use upload_image::*;
