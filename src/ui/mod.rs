/// Selection seam for multi-version deployments. The engine hands the
/// remote catalog to the picker and adopts whatever it returns; an
/// interactive embedder implements this with its own chooser UI.
pub trait VersionPicker {
    /// Pick a version from the catalog, or `None` to decline (the engine
    /// then falls back to the plain latest-version flow).
    fn pick(&self, versions: &[String]) -> Option<String>;
}

/// Default picker: catalogs are ordered oldest to newest, so take the last.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatestVersionPicker;

impl VersionPicker for LatestVersionPicker {
    fn pick(&self, versions: &[String]) -> Option<String> {
        versions.last().cloned()
    }
}
