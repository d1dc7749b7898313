//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and run the
//! extractor, the collector and the full two-stage crawl end-to-end.

use genre_harvest::config::{Config, HttpConfig, OutputConfig, SiteConfig};
use genre_harvest::harvest::run_genre_crawl;
use genre_harvest::{slug_label, CrawlRequest, HarvestError, Harvester};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Host and port of the mock server, usable as a catalog domain
fn domain_of(server: &MockServer) -> String {
    server.address().to_string()
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Creates a test configuration pointing the crawl at the mock server
fn create_test_config(server: &MockServer, output_path: &Path) -> Config {
    Config {
        site: SiteConfig {
            scheme: "http".to_string(),
            domain: domain_of(server),
            root_path: "index.html".to_string(),
            category_pattern: "prefix-[a-z]*".to_string(),
            leaf_pattern: "media.example".to_string(),
            label_delimiter: "-".to_string(),
        },
        http: HttpConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        output: OutputConfig {
            path: output_path.to_string_lossy().into_owned(),
        },
    }
}

fn harvester() -> Harvester {
    Harvester::new(reqwest::Client::new(), "http")
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("Output file missing");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

#[tokio::test]
async fn test_extract_links_filters_and_resolves() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/list.html",
        r#"<a href="a-1.html">One</a>
           <a href="other.html">Other</a>
           <a>No href</a>
           <a href="a-2.html">Two</a>
           <a href="a-1.html">One again</a>"#,
    )
    .await;

    let domain = domain_of(&server);
    let request = CrawlRequest::new(domain.as_str(), "list.html", "a-[0-9]");
    let links = harvester().extract_links(&request).await.expect("Extraction failed");

    assert_eq!(
        links,
        vec![
            format!("http://{}/a-1.html", domain),
            format!("http://{}/a-2.html", domain),
            format!("http://{}/a-1.html", domain),
        ]
    );
}

#[tokio::test]
async fn test_extract_links_no_matches_is_empty() {
    let server = MockServer::start().await;
    mount_page(&server, "/list.html", r#"<a href="other.html">Other</a>"#).await;

    let request = CrawlRequest::new(domain_of(&server), "list.html", "a-[0-9]");
    let links = harvester().extract_links(&request).await.expect("Extraction failed");

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_extract_links_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let domain = domain_of(&server);
    let request = CrawlRequest::new(domain.as_str(), "list.html", "a-[0-9]");
    let result = harvester().extract_links(&request).await;

    match result {
        Err(HarvestError::Fetch { url, status }) => {
            assert_eq!(url, format!("http://{}/list.html", domain));
            assert_eq!(status, 404);
        }
        other => panic!("Expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_collect_from_pages_aggregation_shape() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/prefix-rock.html",
        r#"<a href="http://media.example/1">1</a>
           <a href="http://elsewhere.example/x">x</a>
           <a href="http://media.example/2">2</a>
           <a href="http://media.example/3">3</a>"#,
    )
    .await;
    mount_page(
        &server,
        "/prefix-pop.html",
        r#"<a href="http://media.example/4">4</a>"#,
    )
    .await;

    let urls = vec![
        format!("{}/prefix-rock.html", base),
        format!("{}/prefix-pop.html", base),
    ];
    let map = harvester()
        .collect_from_pages(&urls, "media.example", |url| slug_label(url, "-"))
        .await
        .expect("Collection failed");

    assert_eq!(map.len(), 2);
    assert_eq!(map.labels().collect::<Vec<_>>(), vec!["rock", "pop"]);
    assert_eq!(map.get("rock").map(Vec::len), Some(3));
    assert_eq!(map.get("pop").map(Vec::len), Some(1));
    // Stage-two links are kept raw, not resolved against the page
    assert_eq!(
        map.get("rock").unwrap()[0],
        "http://media.example/1".to_string()
    );
}

#[tokio::test]
async fn test_collect_from_pages_label_collision_overwrites() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/a/prefix-hop.html", r#"<a href="http://media.example/old">o</a>"#).await;
    mount_page(&server, "/b/prefix-hip-hop.html", r#"<a href="http://media.example/new">n</a>"#).await;

    let urls = vec![
        format!("{}/a/prefix-hop.html", base),
        format!("{}/b/prefix-hip-hop.html", base),
    ];
    let map = harvester()
        .collect_from_pages(&urls, "media.example", |url| slug_label(url, "-"))
        .await
        .expect("Collection failed");

    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get("hop"),
        Some(&vec!["http://media.example/new".to_string()])
    );
}

#[tokio::test]
async fn test_collect_from_pages_fails_fast() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/one.html", r#"<a href="http://media.example/1">1</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/two.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/three.html"))
        .respond_with(html_page(r#"<a href="http://media.example/3">3</a>"#))
        .expect(0)
        .mount(&server)
        .await;

    let urls = vec![
        format!("{}/one.html", base),
        format!("{}/two.html", base),
        format!("{}/three.html", base),
    ];
    let result = harvester()
        .collect_from_pages(&urls, "media.example", |url| url.to_string())
        .await;

    match result {
        Err(HarvestError::Fetch { url, status }) => {
            assert_eq!(url, format!("{}/two.html", base));
            assert_eq!(status, 500);
        }
        other => panic!("Expected fetch error, got {:?}", other),
    }

    server.verify().await;
}

/// Mounts a catalog with two genre pages, each holding one media link
async fn mount_catalog(server: &MockServer, rock_track: &str, pop_track: &str) {
    mount_page(
        server,
        "/index.html",
        r#"<a href="prefix-rock.html">Rock</a>
           <a href="about.html">About</a>
           <a href="prefix-pop.html">Pop</a>"#,
    )
    .await;
    mount_page(
        server,
        "/prefix-rock.html",
        &format!(
            r#"<a href="http://media.example/{}">play</a><a href="/index.html">back</a>"#,
            rock_track
        ),
    )
    .await;
    mount_page(
        server,
        "/prefix-pop.html",
        &format!(
            r#"<a href="http://media.example/{}">play</a><a href="https://unrelated.example/">ad</a>"#,
            pop_track
        ),
    )
    .await;
}

#[tokio::test]
async fn test_full_genre_crawl() {
    let server = MockServer::start().await;
    mount_catalog(&server, "trackA", "trackB").await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("genres.json");
    let config = create_test_config(&server, &output_path);

    let stats = run_genre_crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        read_json(&output_path),
        json!({
            "rock": ["http://media.example/trackA"],
            "pop": ["http://media.example/trackB"],
        })
    );
    // Labels appear in the order their pages were listed on the root page
    let raw = std::fs::read_to_string(&output_path).unwrap();
    assert!(raw.find("\"rock\"").unwrap() < raw.find("\"pop\"").unwrap());

    assert_eq!(stats.category_pages, 2);
    assert_eq!(stats.labels, 2);
    assert_eq!(stats.total_links, 2);
    assert!(stats.empty_labels.is_empty());
}

#[tokio::test]
async fn test_second_run_overwrites_output() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("genres.json");
    std::fs::write(&output_path, "stale content that is not JSON at all").unwrap();

    let first = MockServer::start().await;
    mount_catalog(&first, "trackA", "trackB").await;
    run_genre_crawl(&create_test_config(&first, &output_path))
        .await
        .expect("First crawl failed");

    let second = MockServer::start().await;
    mount_page(&second, "/index.html", r#"<a href="prefix-jazz.html">Jazz</a>"#).await;
    mount_page(&second, "/prefix-jazz.html", r#"<a href="http://media.example/trackC">c</a>"#).await;
    run_genre_crawl(&create_test_config(&second, &output_path))
        .await
        .expect("Second crawl failed");

    assert_eq!(
        read_json(&output_path),
        json!({ "jazz": ["http://media.example/trackC"] })
    );
}

#[tokio::test]
async fn test_failed_root_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.html"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("genres.json");

    let result = run_genre_crawl(&create_test_config(&server, &output_path)).await;

    assert!(matches!(result, Err(HarvestError::Fetch { status: 503, .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_failed_genre_page_writes_nothing() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/index.html",
        r#"<a href="prefix-rock.html">Rock</a><a href="prefix-pop.html">Pop</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/prefix-rock.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prefix-pop.html"))
        .respond_with(html_page(r#"<a href="http://media.example/trackB">b</a>"#))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("genres.json");

    let result = run_genre_crawl(&create_test_config(&server, &output_path)).await;

    match result {
        Err(HarvestError::Fetch { url, status }) => {
            assert!(url.ends_with("/prefix-rock.html"));
            assert_eq!(status, 404);
        }
        other => panic!("Expected fetch error, got {:?}", other),
    }
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_empty_catalog_writes_empty_object() {
    let server = MockServer::start().await;
    mount_page(&server, "/index.html", r#"<a href="about.html">About</a>"#).await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("genres.json");

    let stats = run_genre_crawl(&create_test_config(&server, &output_path))
        .await
        .expect("Crawl failed");

    assert_eq!(read_json(&output_path), json!({}));
    assert_eq!(stats.category_pages, 0);
}
