use harvest_core::{HarvestConfig, RunMode, Site};
use harvest_logging::{harvest_error, harvest_info};
use serde::Deserialize;

use crate::fetch::Fetcher;

#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    #[serde(rename = "blogID")]
    blog_id: u64,
    url: String,
}

/// Resolve the sites for this run.
///
/// In production mode the site directory service is queried once; entries
/// are filtered to the configured IDs in directory order, and a configured
/// ID missing from the directory is silently excluded. Any directory
/// failure yields an empty list so the run proceeds with zero sites. In
/// local mode each configured ID is addressed as a subsite path under the
/// configured base URL.
pub async fn resolve_sites(fetcher: &dyn Fetcher, config: &HarvestConfig) -> Vec<Site> {
    match config.mode {
        RunMode::Local => config
            .site_ids
            .iter()
            .map(|&id| Site {
                id,
                base_url: config.local_site_base(id),
            })
            .collect(),
        RunMode::Production => {
            let output = match fetcher.fetch(&config.directory_url).await {
                Ok(output) => output,
                Err(err) => {
                    harvest_error!("Site directory fetch failed: {err}");
                    return Vec::new();
                }
            };
            let entries: Vec<DirectoryEntry> = match serde_json::from_slice(&output.bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    harvest_error!("Site directory response is not valid JSON: {err}");
                    return Vec::new();
                }
            };
            let sites: Vec<Site> = entries
                .into_iter()
                .filter(|entry| config.includes_site(entry.blog_id))
                .map(|entry| Site {
                    id: entry.blog_id,
                    base_url: entry.url,
                })
                .collect();
            harvest_info!(
                "Resolved {} of {} configured sites from the directory",
                sites.len(),
                config.site_ids.len()
            );
            sites
        }
    }
}
