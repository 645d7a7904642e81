use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_multiple_versions() -> bool {
    false
}

/// Startup configuration, supplied once by the embedding host and immutable
/// afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the update server.
    pub base_url: String,
    /// Version seeded as "current" when no version is persisted yet.
    pub current_version: String,
    /// Offer the full remote catalog to the version picker instead of
    /// always adopting the latest version.
    #[serde(default = "default_multiple_versions")]
    pub multiple_versions: bool,
    /// Directory names the bundle is split into, e.g. `["css", "js"]`.
    pub asset_directories: Vec<String>,
    /// Host-provided storage root for persisted state and downloaded assets.
    pub storage_dir: PathBuf,
}

/// Which terminal branch of the update flow ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// The server's version matched the installed one; nothing downloaded.
    AlreadyCurrent,
    /// A new version was downloaded, adopted and bootstrapped.
    Updated,
    /// The update failed part-way; the previously installed version was
    /// bootstrapped instead.
    RolledBack,
}

/// Result of one full update run. Exactly one bootstrap happened, for
/// `version`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub version: String,
    pub action: Action,
}
