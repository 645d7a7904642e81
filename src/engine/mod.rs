use log::{error, info, warn};

use crate::assets::AssetService;
use crate::bootstrap::{Bootstrap, FailureCallback, ReadyCallback, Shell};
use crate::download::DownloadService;
use crate::networking::{FileTransfer, HttpTransfer, HttpUpdateServer, UpdateServer};
use crate::storage::VersionFileStore;
use crate::ui::{LatestVersionPicker, VersionPicker};
use crate::urls::UrlResolver;
use crate::version::VersionStore;

pub mod models;

use crate::engine::models::{Action, Config, Outcome};

/// The update orchestrator. One `run` per app launch: resolve the target
/// version, download it if it differs from the installed one, and hand off
/// to the bootstrap. Every branch, including every failure branch, ends in
/// exactly one bootstrap.
pub struct Cordwood<S, T, P, H>
where
    S: UpdateServer,
    T: FileTransfer,
    P: VersionPicker,
    H: Shell,
{
    config: Config,
    store: VersionStore<S>,
    downloads: DownloadService<T>,
    picker: P,
    bootstrap: Bootstrap<H>,
}

impl<H: Shell> Cordwood<HttpUpdateServer, HttpTransfer, LatestVersionPicker, H> {
    /// Wire up the full HTTP stack with the default picker.
    pub fn new(
        config: Config,
        shell: H,
        on_ready: ReadyCallback,
        on_failure: FailureCallback,
    ) -> Self {
        let urls = UrlResolver::new(&config.base_url);
        let assets = AssetService::new(config.asset_directories.clone(), &config.storage_dir);
        let store = VersionStore::new(
            VersionFileStore::new(&config.storage_dir),
            HttpUpdateServer::new(urls),
        );
        let downloads = DownloadService::new(HttpTransfer::new(), assets.clone());
        let bootstrap = Bootstrap::new(shell, assets, on_ready, on_failure);
        Self::with_parts(config, store, downloads, LatestVersionPicker, bootstrap)
    }
}

impl<S, T, P, H> Cordwood<S, T, P, H>
where
    S: UpdateServer,
    T: FileTransfer,
    P: VersionPicker,
    H: Shell,
{
    /// Assemble from explicit collaborators (custom picker, custom server,
    /// test doubles).
    pub fn with_parts(
        config: Config,
        store: VersionStore<S>,
        downloads: DownloadService<T>,
        picker: P,
        bootstrap: Bootstrap<H>,
    ) -> Self {
        Self {
            config,
            store,
            downloads,
            picker,
            bootstrap,
        }
    }

    /// Run the whole update flow once.
    pub async fn run(mut self) -> Result<Outcome, String> {
        if self.store.current().await.is_none() {
            info!(
                "no installed version recorded; seeding {}",
                self.config.current_version
            );
            if let Err(err) = self.store.set_current(&self.config.current_version).await {
                warn!("failed to persist seed version ({err}); loading it unpersisted");
                let version = self.config.current_version.clone();
                self.bootstrap.init(&version).await?;
                return Ok(Outcome {
                    version,
                    action: Action::AlreadyCurrent,
                });
            }
        }

        let target = match self.resolve_target().await {
            Ok(version) => version,
            Err(err) => {
                warn!("version check failed ({err}); keeping installed version");
                return self.finish_with_current(Action::AlreadyCurrent).await;
            }
        };

        if !self.store.did_update().await {
            info!("version did not change; loading {target}");
            return self.finish_with_current(Action::AlreadyCurrent).await;
        }

        info!("version changed; downloading files for {target}");
        match self.try_update(&target).await {
            Ok(()) => {
                self.bootstrap.init(&target).await?;
                Ok(Outcome {
                    version: target,
                    action: Action::Updated,
                })
            }
            Err(err) => {
                error!("update to {target} failed: {err}");
                self.finish_with_current(Action::RolledBack).await
            }
        }
    }

    /// Decide which version this launch should be running. In multi-version
    /// mode the remote catalog is offered to the picker; a failed catalog
    /// fetch or a declined pick falls back once to the plain latest-version
    /// lookup.
    async fn resolve_target(&self) -> Result<String, String> {
        if self.config.multiple_versions {
            match self.store.fetch_all().await {
                Ok(versions) => match self.picker.pick(&versions) {
                    Some(version) => {
                        self.store.record_updated(&version).await?;
                        return Ok(version);
                    }
                    None => warn!("no version picked from catalog; falling back to latest"),
                },
                Err(err) => warn!("catalog fetch failed ({err}); falling back to latest"),
            }
        }
        self.store.fetch_latest().await
    }

    /// Fetch the manifest, download everything, then adopt the version.
    /// Current only advances after the full set has landed.
    async fn try_update(&mut self, version: &str) -> Result<(), String> {
        let manifest = self.store.fetch_file_manifest(version).await?;
        self.downloads.download(version, &manifest).await?;
        self.store.set_current(version).await
    }

    async fn finish_with_current(mut self, action: Action) -> Result<Outcome, String> {
        let version = self
            .store
            .current()
            .await
            .ok_or_else(|| "no installed version to fall back to".to_owned())?;
        self.bootstrap.init(&version).await?;
        Ok(Outcome { version, action })
    }
}
