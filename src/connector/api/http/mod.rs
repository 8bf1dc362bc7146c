//! REST surface over the use cases, mounted under `/api/v1/chatGpt`.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{create_router, run_server, AppState, API_PREFIX};
