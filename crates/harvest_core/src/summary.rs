use std::fmt::Write;
use std::path::Path;

/// Item count for one content type within one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub content_type: String,
    pub items: usize,
}

/// Per-type counts for one processed site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub site_id: u64,
    pub counts: Vec<TypeCount>,
}

impl SiteSummary {
    pub fn total_items(&self) -> usize {
        self.counts.iter().map(|c| c.items).sum()
    }
}

/// Aggregated end-of-run summary, printed once and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub sites: Vec<SiteSummary>,
}

impl HarvestSummary {
    pub fn push(&mut self, site: SiteSummary) {
        self.sites.push(site);
    }

    pub fn total_items(&self) -> usize {
        self.sites.iter().map(|s| s.total_items()).sum()
    }

    /// Renders the summary block: one line per processed site, then the
    /// grand total and the output root.
    pub fn render(&self, output_root: &Path) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "HARVEST COMPLETE - SUMMARY");
        let _ = writeln!(out, "{rule}");
        for site in &self.sites {
            let counts = if site.counts.is_empty() {
                "no content types".to_string()
            } else {
                site.counts
                    .iter()
                    .map(|c| format!("{} {}", c.items, c.content_type))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "Site {}: {}", site.site_id, counts);
        }
        let _ = writeln!(
            out,
            "\nTotal: {} items across {} sites",
            self.total_items(),
            self.sites.len()
        );
        let _ = writeln!(out, "Saved to: {}", output_root.display());
        out
    }
}
