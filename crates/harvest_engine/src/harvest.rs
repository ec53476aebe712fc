use harvest_core::{ContentType, Site};
use harvest_logging::{harvest_info, harvest_warn};

use crate::endpoint;
use crate::fetch::Fetcher;
use crate::item::ContentItem;
use crate::types::FetchOutput;

/// Response header carrying the server-declared total page count.
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Declared page count, or exactly 1 when the header is absent or not a
/// positive number.
pub fn total_pages(output: &FetchOutput) -> u32 {
    output
        .header(TOTAL_PAGES_HEADER)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&pages| pages >= 1)
        .unwrap_or(1)
}

/// Walk every page of one site's collection, in page order.
///
/// Any page failure (fetch or parse) stops pagination for this content
/// type and returns the items accumulated so far; it never aborts the
/// run. An empty body ends the collection immediately.
pub async fn harvest(
    fetcher: &dyn Fetcher,
    site: &Site,
    content_type: &ContentType,
) -> Vec<ContentItem> {
    let mut items = Vec::new();

    harvest_info!(
        "Fetching {} page 1 from site {}...",
        content_type.rest_base,
        site.id
    );
    let url = endpoint::collection_url(&site.base_url, &content_type.rest_base, 1);
    let first = match fetcher.fetch(&url).await {
        Ok(output) => output,
        Err(err) if err.is_not_found() => {
            harvest_warn!(
                "Site {}: no {} collection exposed (404)",
                site.id,
                content_type.rest_base
            );
            return items;
        }
        Err(err) => {
            harvest_warn!(
                "Site {}: {} page 1 fetch failed: {err}",
                site.id,
                content_type.rest_base
            );
            return items;
        }
    };

    let pages = total_pages(&first);
    match parse_page(&first.bytes) {
        Ok(Some(page_items)) => items.extend(page_items),
        Ok(None) => return items,
        Err(err) => {
            harvest_warn!(
                "Site {}: {} page 1 is not valid JSON: {err}",
                site.id,
                content_type.rest_base
            );
            return items;
        }
    }
    harvest_info!(
        "Fetched {} {} (page 1 of {pages})",
        items.len(),
        content_type.rest_base
    );

    for page in 2..=pages {
        harvest_info!(
            "Fetching {} page {page} from site {}...",
            content_type.rest_base,
            site.id
        );
        let url = endpoint::collection_url(&site.base_url, &content_type.rest_base, page);
        let output = match fetcher.fetch(&url).await {
            Ok(output) => output,
            Err(err) => {
                harvest_warn!(
                    "Site {}: {} page {page} fetch failed, keeping {} items: {err}",
                    site.id,
                    content_type.rest_base,
                    items.len()
                );
                break;
            }
        };
        match parse_page(&output.bytes) {
            Ok(Some(page_items)) => {
                harvest_info!(
                    "Fetched {} {} (page {page} of {pages})",
                    page_items.len(),
                    content_type.rest_base
                );
                items.extend(page_items);
            }
            Ok(None) => break,
            Err(err) => {
                harvest_warn!(
                    "Site {}: {} page {page} is not valid JSON, keeping {} items: {err}",
                    site.id,
                    content_type.rest_base,
                    items.len()
                );
                break;
            }
        }
    }

    items
}

/// `Ok(None)` means an empty body or empty list: the collection is
/// exhausted.
fn parse_page(bytes: &[u8]) -> Result<Option<Vec<ContentItem>>, serde_json::Error> {
    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        return Ok(None);
    }
    let items: Vec<ContentItem> = serde_json::from_str(text.as_ref())?;
    if items.is_empty() {
        Ok(None)
    } else {
        Ok(Some(items))
    }
}
