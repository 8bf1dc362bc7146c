//! # Connector Layer
//!
//! External integrations implementing application ports, and the surfaces
//! callers use to reach the use cases:
//! - Completion provider (OpenAI-compatible HTTP API, plus an offline mock)
//! - Image hosting (Imgur, plus an offline mock)
//! - CLI routing and the REST API

pub mod adapter;
pub mod api;

pub use adapter::*;
