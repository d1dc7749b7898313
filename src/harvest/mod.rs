//! Harvest module: fetching pages and collecting links
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching
//! - Anchor href extraction with regex filters
//! - Single-page link extraction and multi-page collection
//! - The two-stage genre crawl

mod fetcher;
mod harvester;
mod label;
mod link_map;
mod orchestrator;
mod parser;

pub use fetcher::{build_http_client, fetch_page, PageFetchResult};
pub use harvester::{CrawlRequest, Harvester};
pub use label::slug_label;
pub use link_map::{LabeledLinkMap, LinkSet};
pub use orchestrator::{run_genre_crawl, run_genre_crawl_with};
pub use parser::matching_hrefs;
