// ABOUTME: In-memory multipart stash recording how many segments each message was split into
// ABOUTME: Read back by delivery receipt correlation, which lives outside this crate

use crate::service::error::SmppResult;
use crate::service::traits::MultipartStash;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// [`MultipartStash`] that keeps entries in a map for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryMultipartStash {
    entries: Mutex<HashMap<String, u32>>,
}

impl InMemoryMultipartStash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment count recorded for `message_id`, if any.
    pub async fn get_multipart_info(&self, message_id: &str) -> Option<u32> {
        self.entries.lock().await.get(message_id).copied()
    }

    /// Remove and return the entry for `message_id` once all its receipts are in.
    pub async fn remove_multipart_info(&self, message_id: &str) -> Option<u32> {
        self.entries.lock().await.remove(message_id)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

impl MultipartStash for InMemoryMultipartStash {
    async fn init_multipart_info(&self, message_id: &str, total: u32) -> SmppResult<()> {
        debug!(message_id, total, "Recording multipart info");
        self.entries
            .lock()
            .await
            .insert(message_id.to_string(), total);
        Ok(())
    }
}
