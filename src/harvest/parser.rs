//! HTML parser for pulling matching anchor hrefs out of a page

use regex::Regex;
use scraper::{Html, Selector};

/// Returns the raw `href` of every `<a>` whose href matches `pattern`
///
/// The pattern is searched for anywhere in the attribute value (it is not
/// anchored). Results are in document order and duplicates are kept;
/// anchors without an href are skipped.
///
/// # Example
///
/// ```
/// use genre_harvest::harvest::matching_hrefs;
/// use regex::Regex;
///
/// let html = r#"<a href="a-1.html">one</a><a href="other.html">other</a>"#;
/// let pattern = Regex::new("a-[0-9]").unwrap();
/// assert_eq!(matching_hrefs(html, &pattern), vec!["a-1.html"]);
/// ```
pub fn matching_hrefs(html: &str, pattern: &Regex) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if pattern.is_match(href) {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}
