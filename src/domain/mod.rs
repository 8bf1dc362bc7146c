//! # Domain Layer
//!
//! Request and response value objects exchanged with the completion provider.
//! This layer is independent of transport and framework concerns.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
