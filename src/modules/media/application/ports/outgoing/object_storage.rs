use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub cache_control_secs: u32,
    /// Overwrite-allowed semantics; keys are already collision-resistant,
    /// so this only matters for deliberate re-uploads.
    pub upsert: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            cache_control_secs: 3600,
            upsert: true,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("storage denied the request: {0}")]
    Denied(String),

    #[error("storage request failed: {0}")]
    RequestFailed(String),
}

/// The site's single object bucket, keyed by prefix-namespaced paths.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        options: UploadOptions,
    ) -> Result<(), StorageError>;

    /// Public, unauthenticated URL for a stored object.
    fn public_url(&self, key: &str) -> String;

    /// Inverse of `public_url`; None when the URL does not point into this
    /// bucket.
    fn key_for_public_url(&self, url: &str) -> Option<String>;

    /// Object keys under a prefix (e.g. everything in `projects/{slug}/`).
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError>;
}
