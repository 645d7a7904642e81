use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::urls::UrlResolver;

/// Remote source of version information. The server's JSON payloads are
/// opaque tokens: a version string, a list of version strings, or a list of
/// asset URLs.
pub trait UpdateServer {
    fn latest_version(&self) -> impl Future<Output = Result<String, String>>;
    fn all_versions(&self) -> impl Future<Output = Result<Vec<String>, String>>;
    fn file_manifest(&self, version: &str) -> impl Future<Output = Result<Vec<String>, String>>;
}

/// Moves one remote file to a local destination.
pub trait FileTransfer {
    fn transfer(&self, url: &str, dest: &Path) -> impl Future<Output = Result<(), String>>;
}

fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|err| {
            warn!("network client: falling back to default HTTP client configuration ({err})");
            Client::new()
        })
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("request to {url} failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("{url} returned error status: {e}"))?;
    response
        .json()
        .await
        .map_err(|e| format!("failed to parse response from {url}: {e}"))
}

/// `UpdateServer` backed by the cordwood HTTP endpoints.
#[derive(Clone)]
pub struct HttpUpdateServer {
    client: Client,
    urls: UrlResolver,
}

impl HttpUpdateServer {
    pub fn new(urls: UrlResolver) -> Self {
        Self {
            client: build_client(),
            urls,
        }
    }
}

impl UpdateServer for HttpUpdateServer {
    async fn latest_version(&self) -> Result<String, String> {
        get_json(&self.client, &self.urls.latest_version()).await
    }

    async fn all_versions(&self) -> Result<Vec<String>, String> {
        get_json(&self.client, &self.urls.all_versions()).await
    }

    async fn file_manifest(&self, version: &str) -> Result<Vec<String>, String> {
        get_json(&self.client, &self.urls.files(version)).await
    }
}

/// `FileTransfer` that streams a response body to disk.
#[derive(Clone)]
pub struct HttpTransfer {
    client: Client,
}

impl HttpTransfer {
    pub fn new() -> Self {
        Self {
            client: build_client(),
        }
    }
}

impl Default for HttpTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTransfer for HttpTransfer {
    async fn transfer(&self, url: &str, dest: &Path) -> Result<(), String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("download request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("download status error: {e}"))?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("failed to create download dir: {e}"))?;
        }
        let mut file = File::create(dest)
            .await
            .map_err(|e| format!("failed to create file: {e}"))?;

        let total = response.content_length();
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| format!("stream error: {e}"))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| format!("write error: {e}"))?;
            downloaded += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| format!("flush error: {e}"))?;

        if let Some(total) = total
            && downloaded < total
        {
            return Err(format!(
                "download incomplete: received {} of {} bytes",
                downloaded, total
            ));
        }

        debug!("transferred {url} ({downloaded} bytes) to {}", dest.display());
        Ok(())
    }
}
