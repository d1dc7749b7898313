//! Output module for persisting harvest results
//!
//! This module handles:
//! - Writing the label -> links map as a JSON file
//! - Summarizing a finished crawl

mod json;
pub mod stats;

pub use json::write_link_map;
pub use stats::{print_statistics, CrawlStatistics};
