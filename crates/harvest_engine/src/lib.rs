//! Harvest engine: HTTP collection client, schema discovery, pagination,
//! enrichment, and artifact persistence.
mod discover;
mod endpoint;
mod fetch;
mod harvest;
mod item;
mod normalize;
mod persist;
mod pipeline;
mod record;
mod sites;
mod types;

pub use discover::{discover_content_types, discover_taxonomies, DiscoverError};
pub use endpoint::{collection_url, schema_url, terms_url, PER_PAGE};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use harvest::{harvest, total_pages, TOTAL_PAGES_HEADER};
pub use item::{ContentItem, Rendered};
pub use normalize::normalize_html;
pub use persist::{ensure_output_dir, ArtifactWriter, PersistError, Variant};
pub use pipeline::Pipeline;
pub use record::{compose_clean_record, compose_raw_record, slug_stem, UNTITLED};
pub use sites::resolve_sites;
pub use types::{FailureKind, FetchError, FetchOutput};
