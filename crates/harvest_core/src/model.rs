use std::collections::HashMap;

/// Unique numeric identifier of one taxonomy term.
pub type TermId = u64;

/// One tenant within the platform deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: u64,
    pub base_url: String,
}

/// One harvestable collection of items (e.g. articles, pages).
///
/// `rest_base` is the path segment addressing the collection; `slug` names
/// the output directory. They are often equal in value but play different
/// roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub name: String,
    pub slug: String,
    pub rest_base: String,
}

/// A classification scheme scoped to one or more content types, with its
/// full term vocabulary resolved at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    pub name: String,
    pub slug: String,
    pub rest_base: String,
    /// Content-type slugs this taxonomy applies to.
    pub types: Vec<String>,
    /// Term vocabulary keyed by term ID. May be empty when the term fetch
    /// failed; the taxonomy stays applicable, its names just never resolve.
    pub terms: HashMap<TermId, String>,
}

impl Taxonomy {
    /// Whether this taxonomy applies to the given content type.
    pub fn applies_to(&self, content_type_slug: &str) -> bool {
        self.types.iter().any(|t| t == content_type_slug)
    }
}
