use std::path::PathBuf;

use serde::Deserialize;

/// How the set of sites to harvest is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RunMode {
    /// Resolve sites and their base URLs from the site directory service.
    Production,
    /// Treat each configured site ID as a subsite path under `base_url`.
    Local,
}

/// Static run configuration, loaded once at startup and passed into the
/// pipeline. Nothing here mutates during a run.
#[derive(Debug, Clone, Deserialize)]
pub struct HarvestConfig {
    /// Platform base URL used for local-mode subsite addressing.
    pub base_url: String,
    /// Site IDs to include in the run.
    pub site_ids: Vec<u64>,
    /// Root directory for the output corpus.
    pub output_root: PathBuf,
    /// Site resolution mode.
    pub mode: RunMode,
    /// URL of the site directory service, queried in production mode.
    pub directory_url: String,
}

impl HarvestConfig {
    /// Base URL addressing one site in local mode. Site 1 is the main
    /// site and lives at the platform root; every other site is a
    /// `site-{id}` path segment below it.
    pub fn local_site_base(&self, site_id: u64) -> String {
        let base = self.base_url.trim_end_matches('/');
        if site_id == 1 {
            base.to_string()
        } else {
            format!("{base}/site-{site_id}")
        }
    }

    /// Whether a site ID was selected for this run.
    pub fn includes_site(&self, site_id: u64) -> bool {
        self.site_ids.contains(&site_id)
    }
}
