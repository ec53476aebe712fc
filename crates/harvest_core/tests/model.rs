use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Once;

use harvest_core::{HarvestConfig, HarvestSummary, RunMode, SiteSummary, Taxonomy, TypeCount};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(harvest_logging::initialize_for_tests);
}

fn local_config(base_url: &str, site_ids: Vec<u64>) -> HarvestConfig {
    HarvestConfig {
        base_url: base_url.to_string(),
        site_ids,
        output_root: PathBuf::from("corpus"),
        mode: RunMode::Local,
        directory_url: String::new(),
    }
}

#[test]
fn local_site_base_treats_site_one_as_main_site() {
    init_logging();
    let config = local_config("https://platform.test/", vec![1, 5]);

    assert_eq!(config.local_site_base(1), "https://platform.test");
    assert_eq!(config.local_site_base(5), "https://platform.test/site-5");
}

#[test]
fn includes_site_only_for_configured_ids() {
    init_logging();
    let config = local_config("https://platform.test", vec![5, 47]);

    assert!(config.includes_site(5));
    assert!(config.includes_site(47));
    assert!(!config.includes_site(14));
}

#[test]
fn taxonomy_applies_only_to_declared_types() {
    init_logging();
    let taxonomy = Taxonomy {
        name: "topic".to_string(),
        slug: "topic".to_string(),
        rest_base: "topics".to_string(),
        types: vec!["articles".to_string()],
        terms: HashMap::new(),
    };

    assert!(taxonomy.applies_to("articles"));
    assert!(!taxonomy.applies_to("pages"));
}

#[test]
fn summary_renders_per_site_lines_and_totals() {
    init_logging();
    let mut summary = HarvestSummary::default();
    summary.push(SiteSummary {
        site_id: 5,
        counts: vec![
            TypeCount {
                content_type: "pages".to_string(),
                items: 12,
            },
            TypeCount {
                content_type: "articles".to_string(),
                items: 3,
            },
        ],
    });
    summary.push(SiteSummary {
        site_id: 47,
        counts: Vec::new(),
    });

    let text = summary.render(Path::new("corpus"));
    assert!(text.contains("Site 5: 12 pages, 3 articles"));
    assert!(text.contains("Site 47: no content types"));
    assert!(text.contains("Total: 15 items across 2 sites"));
    assert!(text.contains("Saved to: corpus"));
}

#[test]
fn summary_with_no_sites_has_no_site_lines() {
    init_logging();
    let summary = HarvestSummary::default();
    let text = summary.render(Path::new("corpus"));

    assert!(!text.contains("Site "));
    assert!(text.contains("Total: 0 items across 0 sites"));
}
