use url::Url;

/// Maps a URL to the canonical path used for gap comparisons
///
/// The path component is taken (`/` when empty). When the last segment has no
/// `.` and the path does not already end in `/`, a trailing slash is appended,
/// matching the trailing-slash form of generated ideal paths. Segments with a
/// dot are treated as files, so `/v1.2` and `/st.louis` keep no slash.
///
/// Bare paths are accepted as well as absolute URLs, which makes the function
/// idempotent on its own output.
///
/// # Examples
///
/// ```
/// use sitegap::url::to_path;
///
/// assert_eq!(to_path("https://example.com"), "/");
/// assert_eq!(to_path("https://example.com/plumbing/carmel"), "/plumbing/carmel/");
/// assert_eq!(to_path("https://example.com/brochure.pdf"), "/brochure.pdf");
/// assert_eq!(to_path("/plumbing/carmel"), "/plumbing/carmel/");
/// ```
pub fn to_path(url: &str) -> String {
    let path = extract_path(url);
    let path = if path.is_empty() { "/".to_string() } else { path };

    let last_segment = path.rsplit('/').next().unwrap_or("");
    if !path.ends_with('/') && !last_segment.contains('.') {
        format!("{}/", path)
    } else {
        path
    }
}

fn extract_path(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed.path().to_string();
    }

    // Relative input: strip query and fragment, keep the path as written
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
