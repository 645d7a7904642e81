use std::path::{Path, PathBuf};

use tokio::fs;

/// Knows where each version's downloaded bundle lives on disk. Configured
/// once at startup with the directory names the bundle is split into
/// (for example `["css", "js"]`) and the host-provided storage root.
#[derive(Clone)]
pub struct AssetService {
    directories: Vec<String>,
    base_storage_path: PathBuf,
}

impl AssetService {
    pub fn new(directories: Vec<String>, base_storage_path: impl Into<PathBuf>) -> Self {
        Self {
            directories,
            base_storage_path: base_storage_path.into(),
        }
    }

    /// Root directory holding one version's assets.
    #[must_use]
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.base_storage_path.join("versions").join(version)
    }

    /// Local destination for a downloaded asset URL. The file is routed into
    /// the first configured directory that appears as a path segment of the
    /// URL, or into the version root when none matches.
    pub fn target_path(&self, version: &str, url: &str) -> Result<PathBuf, String> {
        let filename = url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| format!("cannot derive a filename from url: {url}"))?;

        let version_dir = self.version_dir(version);
        let routed = self
            .directories
            .iter()
            .find(|dir| url.split('/').any(|segment| segment == dir.as_str()));

        Ok(match routed {
            Some(dir) => version_dir.join(dir).join(filename),
            None => version_dir.join(filename),
        })
    }

    /// All asset files installed for a version, in bootstrap order:
    /// configured directories first (in configured order, filenames sorted
    /// within each), then any files sitting in the version root.
    pub async fn list_assets(&self, version: &str) -> Result<Vec<PathBuf>, String> {
        let version_dir = self.version_dir(version);
        let mut assets = Vec::new();

        for dir in &self.directories {
            let mut files = read_files(&version_dir.join(dir)).await?;
            files.sort();
            assets.append(&mut files);
        }

        let mut root_files = read_files(&version_dir).await?;
        root_files.sort();
        assets.append(&mut root_files);

        Ok(assets)
    }
}

async fn read_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    if fs::metadata(dir).await.is_err() {
        return Ok(Vec::new());
    }
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| format!("failed to read asset dir {}: {e}", dir.display()))?;
    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| format!("failed to read asset dir {}: {e}", dir.display()))?
    {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
