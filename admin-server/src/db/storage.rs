//! Object storage client
//!
//! Uploads go to a bucket on the hosted storage service and are addressed by
//! a fresh UUID per attempt, so a retried failed upload can never collide
//! with a partial prior attempt. Deletes resolve the object path back out of
//! the public URL and treat an already-absent object as success.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use uuid::Uuid;

use super::{RepoError, RepoResult};

/// Client for the hosted object storage API
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl StorageClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bucket: bucket.into(),
        }
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(reqwest::header::AUTHORIZATION, bearer);
        }
        headers
    }

    /// Public URL for an object path within the bucket
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Extract the object path from a public URL produced by this bucket.
    /// Returns `None` for URLs that do not point into public storage.
    pub fn object_path_from_url(url: &str) -> Option<&str> {
        let (_, rest) = url.split_once("/storage/v1/object/public/")?;
        let (_bucket, path) = rest.split_once('/')?;
        if path.is_empty() { None } else { Some(path) }
    }

    /// Upload one file into `folder`, returning the public URL.
    /// Each attempt writes a new unique object name.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
        extension: &str,
    ) -> RepoResult<String> {
        let path = format!("{}/{}.{}", folder, Uuid::new_v4(), extension);
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path);

        let mut headers = self.auth_headers();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type)
                .unwrap_or(HeaderValue::from_static("application/octet-stream")),
        );

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepoError::Backend(format!(
                "Upload to {} failed ({}): {}",
                path, status, body
            )));
        }

        Ok(self.public_url(&path))
    }

    /// Delete an object by its public URL. Deleting an object that is
    /// already gone is not an error.
    pub async fn delete(&self, url: &str) -> RepoResult<()> {
        let path = Self::object_path_from_url(url)
            .ok_or_else(|| RepoError::Validation(format!("Invalid storage URL: {}", url)))?;

        let delete_url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path);
        let response = self
            .http
            .delete(&delete_url)
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "Storage object already absent, treating delete as success");
            return Ok(());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepoError::Backend(format!(
                "Delete {} failed ({}): {}",
                path, status, body
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_path_from_public_url() {
        let url = "https://abc.supabase.co/storage/v1/object/public/tisorah/products/a1b2.jpg";
        assert_eq!(
            StorageClient::object_path_from_url(url),
            Some("products/a1b2.jpg")
        );
    }

    #[test]
    fn rejects_urls_outside_public_storage() {
        assert_eq!(
            StorageClient::object_path_from_url("https://example.com/images/a.jpg"),
            None
        );
        assert_eq!(
            StorageClient::object_path_from_url(
                "https://abc.supabase.co/storage/v1/object/public/bucketonly"
            ),
            None
        );
    }

    #[test]
    fn public_url_round_trips_through_extraction() {
        let client = StorageClient::new("https://abc.supabase.co", "key", "tisorah");
        let url = client.public_url("products/x.jpg");
        assert_eq!(
            StorageClient::object_path_from_url(&url),
            Some("products/x.jpg")
        );
    }
}
