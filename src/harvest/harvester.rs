//! Link extractor and multi-page link collector
//!
//! Both operations fetch pages one at a time in the order given and stop at
//! the first failure. Nothing partial is ever returned: a failed collection
//! drops whatever it had gathered so far.

use crate::config::Config;
use crate::harvest::fetcher::{build_http_client, fetch_page};
use crate::harvest::link_map::{LabeledLinkMap, LinkSet};
use crate::harvest::parser::matching_hrefs;
use crate::Result;
use regex::Regex;
use reqwest::Client;

/// One page to fetch and the pattern used to filter its links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub domain: String,
    pub path: String,
    pub pattern: String,
}

impl CrawlRequest {
    pub fn new(domain: impl Into<String>, path: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
            pattern: pattern.into(),
        }
    }

    /// URL of the page itself
    pub fn page_url(&self, scheme: &str) -> String {
        self.resolve(scheme, &self.path)
    }

    /// Joins a raw href onto the request's domain without any normalization
    pub fn resolve(&self, scheme: &str, href: &str) -> String {
        format!("{}://{}/{}", scheme, self.domain, href)
    }
}

/// Fetches catalog pages and pulls matching links out of them
pub struct Harvester {
    client: Client,
    scheme: String,
}

impl Harvester {
    /// Creates a harvester from an existing client
    ///
    /// `scheme` is used to build page URLs and resolve extracted links in
    /// [`Harvester::extract_links`].
    pub fn new(client: Client, scheme: impl Into<String>) -> Self {
        Self {
            client,
            scheme: scheme.into(),
        }
    }

    /// Creates a harvester whose client is built from `config.http`
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        Ok(Self::new(client, config.site.scheme.clone()))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Fetches `scheme://domain/path` and returns every matching href resolved
    /// to `scheme://domain/<href>`
    ///
    /// # Returns
    ///
    /// * `Ok(LinkSet)` - Matching links in document order (possibly empty)
    /// * `Err(HarvestError::Fetch)` - The page returned a non-success status
    /// * `Err(HarvestError::Pattern)` - The pattern is not a valid regex
    pub async fn extract_links(&self, request: &CrawlRequest) -> Result<LinkSet> {
        let pattern = Regex::new(&request.pattern)?;
        let page_url = request.page_url(&self.scheme);

        let page = fetch_page(&self.client, &page_url).await?;
        let links: LinkSet = matching_hrefs(&page.body, &pattern)
            .iter()
            .map(|href| request.resolve(&self.scheme, href))
            .collect();

        tracing::debug!("{} links matching '{}' on {}", links.len(), request.pattern, page_url);
        Ok(links)
    }

    /// Fetches each URL in order and maps `label_fn(url)` to the raw hrefs
    /// matching `pattern` on that page
    ///
    /// A later page whose label collides with an earlier one replaces the
    /// earlier links. The first failing URL aborts the whole collection and
    /// the URLs after it are never requested.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use genre_harvest::{slug_label, Config, Harvester};
    ///
    /// # async fn demo() -> genre_harvest::Result<()> {
    /// let harvester = Harvester::from_config(&Config::default())?;
    /// let urls = vec!["http://everynoise.com/engenremap-rock.html".to_string()];
    /// let map = harvester
    ///     .collect_from_pages(&urls, "open.spotify.com", |url| slug_label(url, "-"))
    ///     .await?;
    /// println!("{:?}", map.get("rock"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collect_from_pages<F>(
        &self,
        urls: &[String],
        pattern: &str,
        label_fn: F,
    ) -> Result<LabeledLinkMap>
    where
        F: Fn(&str) -> String,
    {
        let pattern = Regex::new(pattern)?;
        let mut links = LabeledLinkMap::new();

        for (index, url) in urls.iter().enumerate() {
            let page = fetch_page(&self.client, url).await?;
            let label = label_fn(url);
            let matches = matching_hrefs(&page.body, &pattern);

            tracing::debug!(
                "[{}/{}] {} -> '{}' ({} links)",
                index + 1,
                urls.len(),
                url,
                label,
                matches.len()
            );

            if links.insert(label.clone(), matches).is_some() {
                tracing::warn!("Label '{}' from {} replaced an earlier page", label, url);
            }
        }

        Ok(links)
    }
}
