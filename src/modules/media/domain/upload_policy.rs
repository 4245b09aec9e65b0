/// Server-side check on uploaded media. The browser's file picker already
/// filters on MIME type, but nothing stops a crafted request, so the same
/// rule is enforced here before any bytes reach storage.
const ALLOWED_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp", "image/gif"];

const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImagePolicyError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

#[derive(Debug, Clone)]
pub struct ImagePolicy {
    max_bytes: usize,
}

impl ImagePolicy {
    pub fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn check(&self, content_type: &str, size: usize) -> Result<(), ImagePolicyError> {
        // "image/png; charset=..." style parameters are not part of the type
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if !ALLOWED_CONTENT_TYPES.contains(&essence.as_str()) {
            return Err(ImagePolicyError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        if size > self.max_bytes {
            return Err(ImagePolicyError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        Ok(())
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new()
    }
}
