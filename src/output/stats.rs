//! Statistics for a finished harvest

use crate::harvest::LabeledLinkMap;
use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Category pages found on the root page
    pub category_pages: usize,

    /// Distinct labels in the written map
    pub labels: usize,

    /// Total number of leaf links across all labels
    pub total_links: usize,

    /// Labels whose page had no matching links
    pub empty_labels: Vec<String>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlStatistics {
    /// Summarizes a harvested map
    pub fn from_map(
        links: &LabeledLinkMap,
        category_pages: usize,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let empty_labels = links
            .iter()
            .filter(|(_, urls)| urls.is_empty())
            .map(|(label, _)| label.to_string())
            .collect();

        Self {
            category_pages,
            labels: links.len(),
            total_links: links.total_links(),
            empty_labels,
            started_at,
            finished_at,
        }
    }

    /// Category pages whose label was replaced by a later page with the same label
    pub fn label_collisions(&self) -> usize {
        self.category_pages.saturating_sub(self.labels)
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  Category pages: {}", stats.category_pages);
    println!("  Labels written: {}", stats.labels);
    println!("  Total links: {}", stats.total_links);
    println!("  Duration: {}s", stats.duration_seconds());
    println!();

    if stats.label_collisions() > 0 {
        println!(
            "Label collisions: {} page(s) overwrote an earlier label",
            stats.label_collisions()
        );
        println!();
    }

    if !stats.empty_labels.is_empty() {
        println!("Labels without links ({}):", stats.empty_labels.len());
        for label in &stats.empty_labels {
            println!("  - {}", label);
        }
        println!();
    }
}
