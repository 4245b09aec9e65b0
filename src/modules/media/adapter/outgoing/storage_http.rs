use async_trait::async_trait;
use serde_json::json;

use crate::media::application::ports::outgoing::{ObjectStorage, StorageError, UploadOptions};

/// Internal seam so the adapter is testable without a live storage service.
#[async_trait]
trait StorageTransport: Send + Sync {
    async fn put(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> Result<u16, String>;

    async fn delete_with_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> Result<u16, String>;

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> Result<(u16, serde_json::Value), String>;
}

struct ReqwestTransport {
    http: reqwest::Client,
}

#[async_trait]
impl StorageTransport for ReqwestTransport {
    async fn put(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> Result<u16, String> {
        let mut request = self.http.put(url).body(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(response.status().as_u16())
    }

    async fn delete_with_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> Result<u16, String> {
        let mut request = self.http.delete(url).json(&body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        Ok(response.status().as_u16())
    }

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> Result<(u16, serde_json::Value), String> {
        let mut request = self.http.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let payload = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok((status, payload))
    }
}

/// Storage adapter speaking the hosted bucket's REST dialect:
/// objects live under `{base}/storage/v1/object/{bucket}/{key}` and their
/// public URLs under `.../object/public/{bucket}/{key}`.
pub struct HttpObjectStorage {
    base_url: String,
    api_key: String,
    bucket: String,
    transport: Box<dyn StorageTransport>,
}

impl HttpObjectStorage {
    pub fn new(base_url: &str, api_key: &str, bucket: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
            transport: Box::new(ReqwestTransport {
                http: reqwest::Client::new(),
            }),
        }
    }

    #[cfg(test)]
    fn with_transport(
        base_url: &str,
        api_key: &str,
        bucket: &str,
        transport: Box<dyn StorageTransport>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
            transport,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, key
        )
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
            ("apikey".to_string(), self.api_key.clone()),
        ]
    }

    fn map_status(status: u16, action: &str) -> Result<(), StorageError> {
        match status {
            200..=299 => Ok(()),
            401 | 403 => Err(StorageError::Denied(format!(
                "{} rejected with status {}",
                action, status
            ))),
            _ => Err(StorageError::RequestFailed(format!(
                "{} failed with status {}",
                action, status
            ))),
        }
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        options: UploadOptions,
    ) -> Result<(), StorageError> {
        let mut headers = self.auth_headers();
        headers.push(("Content-Type".to_string(), content_type.to_string()));
        headers.push((
            "Cache-Control".to_string(),
            format!("max-age={}", options.cache_control_secs),
        ));
        headers.push(("x-upsert".to_string(), options.upsert.to_string()));

        let status = self
            .transport
            .put(&self.object_url(key), headers, bytes)
            .await
            .map_err(StorageError::RequestFailed)?;

        Self::map_status(status, "upload")
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }

    fn key_for_public_url(&self, url: &str) -> Option<String> {
        let prefix = format!(
            "{}/storage/v1/object/public/{}/",
            self.base_url, self.bucket
        );

        url.strip_prefix(&prefix)
            .filter(|key| !key.is_empty())
            .map(|key| key.to_string())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let url = format!(
            "{}/storage/v1/object/list/{}",
            self.base_url, self.bucket
        );

        let (status, payload) = self
            .transport
            .post_json(&url, self.auth_headers(), json!({ "prefix": prefix }))
            .await
            .map_err(StorageError::RequestFailed)?;

        Self::map_status(status, "list")?;

        // Entries come back named relative to the prefix folder
        let folder = prefix.trim_end_matches('/');
        let keys = payload
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("name").and_then(|n| n.as_str()))
                    .map(|name| {
                        if folder.is_empty() {
                            name.to_string()
                        } else {
                            format!("{}/{}", folder, name)
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(keys)
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError> {
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);

        let status = self
            .transport
            .delete_with_json(&url, self.auth_headers(), json!({ "prefixes": keys }))
            .await
            .map_err(StorageError::RequestFailed)?;

        Self::map_status(status, "remove")
    }
}
