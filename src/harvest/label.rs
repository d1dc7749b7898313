/// Derives a genre slug from a category page URL
///
/// Takes the last `/` segment, then the last `delimiter`-separated token of
/// that segment, then everything before the first `.`. Only the final token
/// survives, so a multi-part slug is truncated to its last part.
///
/// # Examples
///
/// ```
/// use genre_harvest::slug_label;
///
/// assert_eq!(slug_label("http://x.com/prefix-rock.html", "-"), "rock");
/// assert_eq!(slug_label("http://x.com/path/prefix-hip-hop.html", "-"), "hop");
/// ```
pub fn slug_label(url: &str, delimiter: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let token = segment.rsplit(delimiter).next().unwrap_or(segment);
    token.split('.').next().unwrap_or(token).to_string()
}
