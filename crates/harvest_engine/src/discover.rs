use std::collections::HashMap;

use harvest_core::{ContentType, Site, Taxonomy, TermId};
use harvest_logging::harvest_warn;
use serde::Deserialize;
use thiserror::Error;

use crate::endpoint;
use crate::fetch::Fetcher;
use crate::types::FetchError;

/// Content types internal to the platform, never harvested.
const TYPE_DENYLIST: &[&str] = &[
    "attachment",
    "nav_menu_item",
    "wp_template",
    "wp_template_part",
    "wp_global_styles",
    "wp_font_family",
    "wp_font_face",
];

/// Taxonomies whose term enumeration requires elevated privilege.
const TAXONOMY_DENYLIST: &[&str] = &["nav_menu", "wp_pattern_category"];

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("schema fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("malformed schema response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct TypeRecord {
    name: String,
    slug: String,
    rest_base: String,
}

#[derive(Debug, Deserialize)]
struct TaxonomyRecord {
    name: String,
    slug: String,
    rest_base: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TermRecord {
    id: TermId,
    name: String,
}

/// The harvestable content types of one site, in server order.
pub async fn discover_content_types(
    fetcher: &dyn Fetcher,
    site: &Site,
) -> Result<Vec<ContentType>, DiscoverError> {
    let url = endpoint::schema_url(&site.base_url, "types");
    let output = fetcher.fetch(&url).await?;
    let records: Vec<TypeRecord> = serde_json::from_slice(&output.bytes)?;
    Ok(records
        .into_iter()
        .filter(|record| !TYPE_DENYLIST.contains(&record.slug.as_str()))
        .map(|record| ContentType {
            name: record.name,
            slug: record.slug,
            rest_base: record.rest_base,
        })
        .collect())
}

/// The taxonomies applicable to one site's content types, with their full
/// term vocabularies. A taxonomy whose term fetch fails is kept with an
/// empty vocabulary rather than dropped.
pub async fn discover_taxonomies(
    fetcher: &dyn Fetcher,
    site: &Site,
) -> Result<Vec<Taxonomy>, DiscoverError> {
    let url = endpoint::schema_url(&site.base_url, "taxonomies");
    let output = fetcher.fetch(&url).await?;
    let records: Vec<TaxonomyRecord> = serde_json::from_slice(&output.bytes)?;

    let mut taxonomies = Vec::with_capacity(records.len());
    for record in records {
        if TAXONOMY_DENYLIST.contains(&record.slug.as_str()) {
            continue;
        }
        let terms = fetch_terms(fetcher, site, &record).await;
        taxonomies.push(Taxonomy {
            name: record.name,
            slug: record.slug,
            rest_base: record.rest_base,
            types: record.types,
            terms,
        });
    }
    Ok(taxonomies)
}

/// One unpaginated term fetch per taxonomy.
async fn fetch_terms(
    fetcher: &dyn Fetcher,
    site: &Site,
    record: &TaxonomyRecord,
) -> HashMap<TermId, String> {
    let url = endpoint::terms_url(&site.base_url, &record.rest_base);
    let output = match fetcher.fetch(&url).await {
        Ok(output) => output,
        Err(err) => {
            harvest_warn!(
                "Site {}: term fetch for taxonomy '{}' failed: {err}",
                site.id,
                record.slug
            );
            return HashMap::new();
        }
    };
    let terms: Vec<TermRecord> = match serde_json::from_slice(&output.bytes) {
        Ok(terms) => terms,
        Err(err) => {
            harvest_warn!(
                "Site {}: term response for taxonomy '{}' is not valid JSON: {err}",
                site.id,
                record.slug
            );
            return HashMap::new();
        }
    };
    terms.into_iter().map(|term| (term.id, term.name)).collect()
}
