//! URL composition for the platform's collection API.

/// Fixed collection page size. Pagination must honor this to avoid false
/// termination on an exact multiple.
pub const PER_PAGE: u32 = 100;

const API_PREFIX: &str = "api/v2";

/// One page of a content collection.
pub fn collection_url(site_base: &str, rest_base: &str, page: u32) -> String {
    format!(
        "{}/{API_PREFIX}/{rest_base}?per_page={PER_PAGE}&page={page}",
        site_base.trim_end_matches('/')
    )
}

/// An unpaginated schema resource (`types`, `taxonomies`).
pub fn schema_url(site_base: &str, resource: &str) -> String {
    format!("{}/{API_PREFIX}/{resource}", site_base.trim_end_matches('/'))
}

/// A taxonomy's full term collection, consumed in one call.
pub fn terms_url(site_base: &str, rest_base: &str) -> String {
    format!(
        "{}/{API_PREFIX}/{rest_base}?per_page={PER_PAGE}",
        site_base.trim_end_matches('/')
    )
}
