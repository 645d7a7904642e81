use log::debug;

use crate::networking::UpdateServer;
use crate::storage::VersionFileStore;

/// Owns the persisted current/updated version pair and the remote source the
/// update flow queries. The server is injected so the store holds no ambient
/// network state of its own.
pub struct VersionStore<S: UpdateServer> {
    files: VersionFileStore,
    server: S,
}

impl<S: UpdateServer> VersionStore<S> {
    pub fn new(files: VersionFileStore, server: S) -> Self {
        Self { files, server }
    }

    /// The installed version, or `None` on a first launch.
    pub async fn current(&self) -> Option<String> {
        self.files.read_current().await
    }

    pub async fn set_current(&self, version: &str) -> Result<(), String> {
        debug!("current version set to {version}");
        self.files.write_current(version).await
    }

    pub async fn updated(&self) -> Option<String> {
        self.files.read_updated().await
    }

    /// Ask the server for the latest version token and persist it as
    /// "updated". A transport failure is an explicit error for the caller
    /// to degrade on.
    pub async fn fetch_latest(&self) -> Result<String, String> {
        let version = self.server.latest_version().await?;
        self.files.write_updated(&version).await?;
        Ok(version)
    }

    /// Retrieve the catalog of available versions. No retries; the caller
    /// owns the single latest-version fallback.
    pub async fn fetch_all(&self) -> Result<Vec<String>, String> {
        self.server.all_versions().await
    }

    /// Persist an externally chosen version (picker selection) as "updated".
    pub async fn record_updated(&self, version: &str) -> Result<(), String> {
        self.files.write_updated(version).await
    }

    /// Asset URL list for one version.
    pub async fn fetch_file_manifest(&self, version: &str) -> Result<Vec<String>, String> {
        self.server.file_manifest(version).await
    }

    /// True iff a fetched "updated" version exists and differs from current.
    pub async fn did_update(&self) -> bool {
        match (self.files.read_current().await, self.files.read_updated().await) {
            (current, Some(updated)) => current.as_deref() != Some(updated.as_str()),
            (_, None) => false,
        }
    }
}
