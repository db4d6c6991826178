/// Site identity helpers for Site Scrubber
use url::Url;

use crate::tab_data::CookieInfo;

/// Extract the host component of a tab URL.
///
/// The host is the filter key for the cookie lookup and the label shown in
/// logs. Returns `None` for anything the `url` crate cannot parse (including
/// relative strings like `not a valid url`) and for URLs without a host
/// (`about:blank`, `data:` URLs) — the clear cycle aborts in both cases.
pub fn host_for_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    Url::parse(url)
        .ok()?
        .host_str()
        .map(|host| host.to_string())
}

/// Reconstruct the URL that scopes a cookie removal.
///
/// The cookie store removes by (url, name), so the URL is rebuilt from the
/// cookie's own attributes: `https` when the cookie is secure, `http`
/// otherwise, then the cookie's domain and path verbatim. Domains that carry
/// a leading dot (host-wide cookies) are passed through unchanged.
pub fn cookie_removal_url(cookie: &CookieInfo) -> String {
    let scheme = if cookie.secure { "https" } else { "http" };
    format!("{}://{}{}", scheme, cookie.domain, cookie.path)
}
