/// Builds absolute endpoint URLs for the update server from a configured base.
#[derive(Clone, Debug)]
pub struct UrlResolver {
    base: String,
}

impl UrlResolver {
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Endpoint returning the latest available version token.
    #[must_use]
    pub fn latest_version(&self) -> String {
        format!("{}/api/latest_version", self.base)
    }

    /// Endpoint returning the catalog of all available version tokens.
    #[must_use]
    pub fn all_versions(&self) -> String {
        format!("{}/api/versions", self.base)
    }

    /// Endpoint returning the asset URL list for one version.
    #[must_use]
    pub fn files(&self, version: &str) -> String {
        format!("{}/api/versions/{version}/files", self.base)
    }
}
