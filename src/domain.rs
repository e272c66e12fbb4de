/// URL field extraction for Copy Link As
use url::Url;

/// Fields derived from a tab URL for template rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub domain: String,
    pub domain_path: String,
}

/// Extract the hostname from a URL
///
/// The hostname is returned exactly as the URL parser normalizes it:
/// lowercased, IDNs converted to punycode, port dropped.
///
/// Examples:
/// - https://example.com/path → example.com
/// - http://localhost:3000/path → localhost
/// - not-a-url → "" (never an error)
pub fn extract_domain(url: &str) -> String {
    parse_absolute(url)
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Extract hostname followed by the path, without query or fragment
///
/// A bare root path ("" or "/") yields the hostname alone, so
/// https://example.com and https://example.com/ both give "example.com".
///
/// Examples:
/// - https://github.com/user/repo?tab=readme → github.com/user/repo
/// - http://localhost:3000/api/users → localhost/api/users
pub fn extract_domain_path(url: &str) -> String {
    let Some(parsed) = parse_absolute(url) else {
        return String::new();
    };

    let hostname = parsed.host_str().unwrap_or_default();
    match parsed.path() {
        "" | "/" => hostname.to_string(),
        path => format!("{hostname}{path}"),
    }
}

/// Compute both derived fields for one URL
pub fn derive_fields(url: &str) -> DerivedFields {
    DerivedFields {
        domain: extract_domain(url),
        domain_path: extract_domain_path(url),
    }
}

fn parse_absolute(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::debug!("not an absolute URL {url:?}: {e}");
            None
        }
    }
}
