use std::path::PathBuf;

use tokio::fs;

const CURRENT_VERSION_FILE: &str = "current_version.txt";
const UPDATED_VERSION_FILE: &str = "updated_version.txt";

/// Persists the two version tokens the update flow cares about: the version
/// the app is running ("current") and the version most recently discovered on
/// the server ("updated"). Each lives in its own small text file so the
/// values survive app restarts.
#[derive(Clone)]
pub struct VersionFileStore {
    base_dir: PathBuf,
}

impl VersionFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub async fn read_current(&self) -> Option<String> {
        self.read_entry(CURRENT_VERSION_FILE).await
    }

    pub async fn write_current(&self, version: &str) -> Result<(), String> {
        self.write_entry(CURRENT_VERSION_FILE, version).await
    }

    pub async fn read_updated(&self) -> Option<String> {
        self.read_entry(UPDATED_VERSION_FILE).await
    }

    pub async fn write_updated(&self, version: &str) -> Result<(), String> {
        self.write_entry(UPDATED_VERSION_FILE, version).await
    }

    async fn read_entry(&self, filename: &str) -> Option<String> {
        let path = self.base_dir.join(filename);
        fs::read(&path).await.ok().and_then(|bytes| {
            let version = String::from_utf8_lossy(&bytes).trim().to_owned();
            (!version.is_empty()).then_some(version)
        })
    }

    async fn write_entry(&self, filename: &str, version: &str) -> Result<(), String> {
        let path = self.base_dir.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("unable to create state dir: {e}"))?;
        }
        fs::write(&path, version.as_bytes())
            .await
            .map_err(|e| format!("unable to persist version: {e}"))
    }
}
