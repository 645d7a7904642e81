use std::path::Path;

use log::info;

use crate::assets::AssetService;

/// Host-provided shell the bundle is loaded into. The embedder's
/// implementation feeds each asset file into the running application
/// (DOM injection in a WebView host).
pub trait Shell {
    fn inject(&mut self, asset: &Path) -> Result<(), String>;
}

pub type ReadyCallback = Box<dyn FnOnce() + Send>;
pub type FailureCallback = Box<dyn FnOnce(String) + Send>;

/// Terminal step of every update flow branch: loads one version's assets
/// into the shell and fires the app-ready handshake. The callbacks are
/// consumed on first use, so they fire at most once per launch no matter
/// how the flow reached this point.
pub struct Bootstrap<H: Shell> {
    shell: H,
    assets: AssetService,
    on_ready: Option<ReadyCallback>,
    on_failure: Option<FailureCallback>,
}

impl<H: Shell> Bootstrap<H> {
    pub fn new(
        shell: H,
        assets: AssetService,
        on_ready: ReadyCallback,
        on_failure: FailureCallback,
    ) -> Self {
        Self {
            shell,
            assets,
            on_ready: Some(on_ready),
            on_failure: Some(on_failure),
        }
    }

    /// Load `version`'s assets into the shell and signal readiness.
    pub async fn init(&mut self, version: &str) -> Result<(), String> {
        let result = self.load(version).await;
        match &result {
            Ok(()) => {
                if let Some(ready) = self.on_ready.take() {
                    ready();
                }
            }
            Err(err) => {
                if let Some(failure) = self.on_failure.take() {
                    failure(err.clone());
                }
            }
        }
        result
    }

    async fn load(&mut self, version: &str) -> Result<(), String> {
        let files = self.assets.list_assets(version).await?;
        if files.is_empty() {
            return Err(format!("no assets installed for version {version}"));
        }
        for file in &files {
            self.shell
                .inject(file)
                .map_err(|e| format!("failed to load {}: {e}", file.display()))?;
        }
        info!("bootstrapped version {version} ({} assets)", files.len());
        Ok(())
    }
}
