use crate::UrlError;
use url::Url;

/// Normalizes user-supplied website input into a base URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Default the scheme to `https://` when the input has none; an explicit
///    non-HTTP scheme (`ftp://...`) is kept so it can be rejected
/// 3. Parse the URL; reject if malformed, non-HTTP(S), or hostless
/// 4. Keep only `scheme://host[:port]`, discarding credentials, path,
///    query and fragment
///
/// # Examples
///
/// ```
/// use sitegap::url::normalize_base_url;
///
/// let url = normalize_base_url("example.com/services/?ref=x").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// let url = normalize_base_url("http://localhost:8080/home").unwrap();
/// assert_eq!(url.as_str(), "http://localhost:8080/");
/// ```
pub fn normalize_base_url(input: &str) -> Result<Url, UrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Parse("empty website URL".to_string()));
    }

    let with_scheme = if has_explicit_scheme(input) {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    // Setting credentials only fails for cannot-be-a-base URLs, ruled out above
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn has_explicit_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
