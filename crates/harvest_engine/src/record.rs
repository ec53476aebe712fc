use std::fmt::Write;

use harvest_core::{ContentType, Taxonomy};

use crate::item::ContentItem;
use crate::normalize::normalize_html;

/// Title used when an item has no title field at all.
pub const UNTITLED: &str = "Untitled";

/// Filesystem-safe stem for one item: the item's slug when present,
/// otherwise `{type_slug}-{id}`; lower-cased and stripped to `[a-z0-9-_]`.
/// An empty result after stripping falls back to the sanitized
/// `{type_slug}-{id}`.
pub fn slug_stem(item: &ContentItem, type_slug: &str) -> String {
    let fallback = format!("{type_slug}-{}", item.id);
    let raw = match item.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug,
        _ => fallback.as_str(),
    };
    let stem = sanitize_slug(raw);
    if stem.is_empty() {
        sanitize_slug(&fallback)
    } else {
        stem
    }
}

fn sanitize_slug(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_'))
        .collect()
}

/// The normalized plain-text record, sections in fixed order: site ID,
/// title, taxonomy labels (discovery order), excerpt, summary, content.
pub fn compose_clean_record(
    item: &ContentItem,
    content_type: &ContentType,
    site_id: u64,
    taxonomies: &[Taxonomy],
) -> String {
    let title = match item.title_raw() {
        Some(raw) => normalize_html(raw),
        None => UNTITLED.to_string(),
    };
    let content = item.content_raw().map(normalize_html).unwrap_or_default();
    let excerpt = item.excerpt_raw().map(normalize_html).unwrap_or_default();

    let mut record = String::new();
    let _ = writeln!(record, "Site ID: {site_id}");
    let _ = writeln!(record, "Title: {title}");
    record.push('\n');

    for taxonomy in taxonomies {
        if !taxonomy.applies_to(&content_type.slug) {
            continue;
        }
        let ids = item.term_ids(&taxonomy.slug);
        if ids.is_empty() {
            continue;
        }
        // IDs with no vocabulary match are skipped, not substituted.
        let names: Vec<&str> = ids
            .iter()
            .filter_map(|id| taxonomy.terms.get(id).map(String::as_str))
            .collect();
        let _ = writeln!(record, "{}: {}", section_label(&taxonomy.name), names.join(", "));
        record.push('\n');
    }

    if !excerpt.is_empty() {
        let _ = writeln!(record, "Excerpt: {excerpt}");
        record.push('\n');
    }
    if let Some(summary) = item.summary() {
        let _ = writeln!(record, "Summary: {summary}");
        record.push('\n');
    }

    let _ = writeln!(record, "Content:\n{content}");
    record
}

/// The raw HTML fragment record: unnormalized title as a heading, then the
/// unnormalized content markup.
pub fn compose_raw_record(item: &ContentItem) -> String {
    let title = item.title_raw().unwrap_or(UNTITLED);
    let content = item.content_raw().unwrap_or("");
    format!("<h1>{title}</h1>\n{content}\n")
}

fn section_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
