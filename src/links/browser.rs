use super::Endpoints;
use crate::error::LinkError;
use crate::types::GeneratedLink;

/// Removes a leading `http://` or `https://`, then a leading `www.`.
pub fn strip_protocol(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Opens `url` in the wallet's in-app browser.
///
/// The remainder after stripping is embedded as-is; it is up to the wallet to
/// resolve it. Nothing is percent-encoded, so a space in `url` stays a raw
/// space, and a `?` or `#` in `url` becomes the query or fragment of the
/// deeplink itself rather than part of the dapp path.
pub fn format_browser_link(endpoints: &Endpoints, url: &str) -> Result<GeneratedLink, LinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LinkError::missing("url"));
    }

    let target = strip_protocol(url);
    Ok(GeneratedLink::new(
        endpoints.on_app_link(&format!("dapp/{}", target)),
    ))
}
