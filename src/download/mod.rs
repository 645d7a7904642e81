use log::{debug, info};

use crate::assets::AssetService;
use crate::networking::FileTransfer;

/// Downloads every asset of one version into that version's directory.
/// All-or-nothing: the first failed transfer aborts the set and the whole
/// download is reported as failed, so callers never see partial state.
pub struct DownloadService<T: FileTransfer> {
    transfer: T,
    assets: AssetService,
}

impl<T: FileTransfer> DownloadService<T> {
    pub fn new(transfer: T, assets: AssetService) -> Self {
        Self { transfer, assets }
    }

    pub async fn download(&self, version: &str, urls: &[String]) -> Result<(), String> {
        for url in urls {
            let dest = self.assets.target_path(version, url)?;
            self.transfer
                .transfer(url, &dest)
                .await
                .map_err(|e| format!("download of {url} failed: {e}"))?;
            debug!("downloaded {url}");
        }
        info!("downloaded {} files for version {version}", urls.len());
        Ok(())
    }
}
