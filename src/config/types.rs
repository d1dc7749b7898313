use serde::Deserialize;

/// Main configuration structure for Genre-Harvest
///
/// Every section and field has a default, so an empty file (or no file at
/// all) describes the Every Noise At Once genre crawl.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The catalog site and the two link patterns used to crawl it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Scheme used to build page URLs and resolve stage-one links
    pub scheme: String,

    /// Catalog host (may include a port, e.g. "127.0.0.1:8080")
    pub domain: String,

    /// Path of the root page listing the category pages
    pub root_path: String,

    /// Regex matched against root page hrefs to find category pages
    pub category_pattern: String,

    /// Regex matched against category page hrefs to find leaf links
    pub leaf_pattern: String,

    /// Delimiter preceding the genre slug in a category page filename
    pub label_delimiter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            domain: "everynoise.com".to_string(),
            root_path: "engenremap.html".to_string(),
            category_pattern: "engenremap-[a-z]*".to_string(),
            leaf_pattern: "open.spotify.com".to_string(),
            label_delimiter: "-".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HttpConfig {
    /// User agent sent with every request
    pub user_agent: String,

    /// Total request timeout (seconds)
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("GenreHarvest/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Path of the JSON file receiving the label -> links map
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "everynoise_genre_playlists.json".to_string(),
        }
    }
}
