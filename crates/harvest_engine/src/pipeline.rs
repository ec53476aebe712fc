use harvest_core::{
    ContentType, HarvestConfig, HarvestSummary, Site, SiteSummary, Taxonomy, TypeCount,
};
use harvest_logging::{harvest_debug, harvest_error, harvest_info, harvest_warn};

use crate::discover::{discover_content_types, discover_taxonomies};
use crate::fetch::Fetcher;
use crate::harvest::harvest;
use crate::item::ContentItem;
use crate::persist::{ArtifactWriter, PersistError, Variant};
use crate::record::{compose_clean_record, compose_raw_record, slug_stem};
use crate::sites::resolve_sites;

/// Drives one whole run: resolve sites, then per site discover schema,
/// harvest each content type, and write both artifacts per item.
///
/// Every error is contained at its call site and degrades the current
/// unit of work; nothing propagates to the caller. This is the only
/// component that emits run-level progress.
pub struct Pipeline<'a> {
    fetcher: &'a dyn Fetcher,
    config: &'a HarvestConfig,
    writer: ArtifactWriter,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: &'a HarvestConfig) -> Self {
        let writer = ArtifactWriter::new(config.output_root.clone());
        Self {
            fetcher,
            config,
            writer,
        }
    }

    pub async fn run(&self) -> HarvestSummary {
        let mut summary = HarvestSummary::default();
        let sites = resolve_sites(self.fetcher, self.config).await;
        for site in &sites {
            harvest_info!("{}", "=".repeat(60));
            harvest_info!("Processing site {} ({})", site.id, site.base_url);
            summary.push(self.process_site(site).await);
        }
        summary
    }

    async fn process_site(&self, site: &Site) -> SiteSummary {
        let content_types = match discover_content_types(self.fetcher, site).await {
            Ok(types) => types,
            Err(err) => {
                harvest_error!("Site {}: content type discovery failed: {err}", site.id);
                Vec::new()
            }
        };
        let taxonomies = match discover_taxonomies(self.fetcher, site).await {
            Ok(taxonomies) => taxonomies,
            Err(err) => {
                harvest_warn!("Site {}: taxonomy discovery failed: {err}", site.id);
                Vec::new()
            }
        };

        let mut counts = Vec::with_capacity(content_types.len());
        for content_type in &content_types {
            let items = harvest(self.fetcher, site, content_type).await;
            let written = self.write_items(site, content_type, &taxonomies, &items);
            if written < items.len() {
                harvest_warn!(
                    "Site {}: wrote {written} of {} {} items",
                    site.id,
                    items.len(),
                    content_type.slug
                );
            }
            counts.push(TypeCount {
                content_type: content_type.name.clone(),
                items: items.len(),
            });
        }
        SiteSummary {
            site_id: site.id,
            counts,
        }
    }

    fn write_items(
        &self,
        site: &Site,
        content_type: &ContentType,
        taxonomies: &[Taxonomy],
        items: &[ContentItem],
    ) -> usize {
        let mut written = 0;
        for item in items {
            match self.write_item(site, content_type, taxonomies, item) {
                Ok(()) => written += 1,
                // A failed write skips this item only; the run continues.
                Err(err) => {
                    harvest_error!("Site {}: failed to write item {}: {err}", site.id, item.id)
                }
            }
        }
        written
    }

    fn write_item(
        &self,
        site: &Site,
        content_type: &ContentType,
        taxonomies: &[Taxonomy],
        item: &ContentItem,
    ) -> Result<(), PersistError> {
        let stem = slug_stem(item, &content_type.slug);

        let raw = compose_raw_record(item);
        let path = self
            .writer
            .write(site.id, Variant::Raw, &content_type.slug, &stem, &raw)?;
        harvest_debug!("Saved: {}", path.display());

        let clean = compose_clean_record(item, content_type, site.id, taxonomies);
        let path = self
            .writer
            .write(site.id, Variant::Clean, &content_type.slug, &stem, &clean)?;
        harvest_debug!("Saved: {}", path.display());
        Ok(())
    }
}
