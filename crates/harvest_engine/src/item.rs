use harvest_core::TermId;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A field carrying server-rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PostMeta {
    #[serde(default)]
    summary: Option<String>,
}

/// One raw item from a content collection. Held in memory only while its
/// page is processed and its artifacts composed.
///
/// Taxonomy-slug-keyed term-ID lists arrive as ad-hoc top-level fields, so
/// they are captured through the flattened map rather than named fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<Rendered>,
    #[serde(default)]
    pub content: Option<Rendered>,
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    #[serde(default)]
    post_meta: Option<PostMeta>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ContentItem {
    pub fn title_raw(&self) -> Option<&str> {
        self.title.as_ref().map(|r| r.rendered.as_str())
    }

    pub fn content_raw(&self) -> Option<&str> {
        self.content.as_ref().map(|r| r.rendered.as_str())
    }

    pub fn excerpt_raw(&self) -> Option<&str> {
        self.excerpt.as_ref().map(|r| r.rendered.as_str())
    }

    /// The already-plain-text summary, when present and non-empty.
    pub fn summary(&self) -> Option<&str> {
        self.post_meta
            .as_ref()
            .and_then(|meta| meta.summary.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Term IDs the item carries under a taxonomy slug, in the item's own
    /// order. Missing or non-list fields yield an empty list.
    pub fn term_ids(&self, taxonomy_slug: &str) -> Vec<TermId> {
        match self.extra.get(taxonomy_slug) {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_u64).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> ContentItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn term_ids_come_from_flattened_fields_in_order() {
        let item = item(json!({
            "id": 9,
            "topic": [3, 1, 2],
            "region": "not-a-list"
        }));
        assert_eq!(item.term_ids("topic"), vec![3, 1, 2]);
        assert_eq!(item.term_ids("region"), Vec::<TermId>::new());
        assert_eq!(item.term_ids("absent"), Vec::<TermId>::new());
    }

    #[test]
    fn summary_requires_non_blank_text() {
        let with = item(json!({ "id": 1, "post_meta": { "summary": "short" } }));
        let blank = item(json!({ "id": 2, "post_meta": { "summary": "  " } }));
        let none = item(json!({ "id": 3 }));
        assert_eq!(with.summary(), Some("short"));
        assert_eq!(blank.summary(), None);
        assert_eq!(none.summary(), None);
    }
}
