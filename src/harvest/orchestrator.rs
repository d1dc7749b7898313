//! The two-stage genre crawl
//!
//! Stage one scrapes the catalog root for category pages, stage two scrapes
//! every category page for leaf links. The map is written to disk only after
//! both stages have succeeded.

use crate::config::Config;
use crate::harvest::harvester::{CrawlRequest, Harvester};
use crate::harvest::label::slug_label;
use crate::output::{write_link_map, CrawlStatistics};
use crate::Result;
use chrono::Utc;
use std::path::Path;

/// Runs the genre crawl described by `config` and writes the result to
/// `config.output.path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - The file was written
/// * `Err(HarvestError)` - A stage failed; no file was written
pub async fn run_genre_crawl(config: &Config) -> Result<CrawlStatistics> {
    let harvester = Harvester::from_config(config)?;
    run_genre_crawl_with(&harvester, config).await
}

/// Same as [`run_genre_crawl`] but with a caller-supplied harvester
pub async fn run_genre_crawl_with(harvester: &Harvester, config: &Config) -> Result<CrawlStatistics> {
    let started_at = Utc::now();
    let site = &config.site;

    let root = CrawlRequest::new(&site.domain, &site.root_path, &site.category_pattern);
    tracing::info!("Scraping genres from {}", root.page_url(harvester.scheme()));
    let category_urls = harvester.extract_links(&root).await?;
    tracing::info!("Found {} genres", category_urls.len());

    tracing::info!("Scraping links matching '{}' from each genre page", site.leaf_pattern);
    let delimiter = site.label_delimiter.as_str();
    let links = harvester
        .collect_from_pages(&category_urls, &site.leaf_pattern, |url| {
            slug_label(url, delimiter)
        })
        .await?;

    let output_path = Path::new(&config.output.path);
    write_link_map(&links, output_path)?;
    tracing::info!("Wrote {} labels to {}", links.len(), output_path.display());

    Ok(CrawlStatistics::from_map(
        &links,
        category_urls.len(),
        started_at,
        Utc::now(),
    ))
}
