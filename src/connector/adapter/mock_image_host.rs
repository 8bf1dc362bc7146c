use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ImageHost;
use crate::domain::DomainError;

pub const MOCK_IMAGE_BASE_URL: &str = "https://images.mock.local";

/// Offline [`ImageHost`] that pretends every upload lands at a predictable URL.
pub struct MockImageHost {
    uploads: AtomicUsize,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self {
            uploads: AtomicUsize::new(0),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

impl Default for MockImageHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, _bytes: Vec<u8>, filename: &str) -> Result<String, DomainError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
        Ok(format!("{MOCK_IMAGE_BASE_URL}/{name}"))
    }
}
