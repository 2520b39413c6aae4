//! Deeplink formatters, one per wallet action.
//!
//! Every formatter is a pure function of its input. Optional fields that are
//! absent (or blank) never show up in the query string.

mod browser;
mod ramp;
mod send;
mod swap;

pub use browser::{format_browser_link, strip_protocol};
pub use ramp::{format_buy_link, format_sell_link};
pub use send::format_send_native_link;
pub use swap::format_swap_link;

use tracing::debug;
use url::form_urlencoded;

use crate::error::LinkError;
use crate::types::{GeneratedLink, LinkRequest};

pub const DEFAULT_APP_LINK_BASE: &str = "https://metamask.app.link";
pub const DEFAULT_UNIVERSAL_LINK_BASE: &str = "https://link.metamask.io";

/// Base URLs of the two hosts the wallet answers on.
///
/// `dapp`, `buy` and `send` live on the app-link host; `sell`, `swap` and
/// `home` on the universal-link host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    app_link: String,
    universal_link: String,
}

impl Endpoints {
    pub fn new(app_link: impl Into<String>, universal_link: impl Into<String>) -> Self {
        let app_link = app_link.into().trim_end_matches('/').to_string();
        let universal_link = universal_link.into().trim_end_matches('/').to_string();
        Self {
            app_link,
            universal_link,
        }
    }

    pub fn app_link(&self) -> &str {
        &self.app_link
    }

    pub fn universal_link(&self) -> &str {
        &self.universal_link
    }

    pub(crate) fn on_app_link(&self, path: &str) -> String {
        format!("{}/{}", self.app_link, path)
    }

    pub(crate) fn on_universal_link(&self, path: &str) -> String {
        format!("{}/{}", self.universal_link, path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_APP_LINK_BASE, DEFAULT_UNIVERSAL_LINK_BASE)
    }
}

/// Query string in insertion order, encoded like a browser's
/// `URLSearchParams`.
pub(crate) struct QueryBuilder {
    serializer: form_urlencoded::Serializer<'static, String>,
    len: usize,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
            len: 0,
        }
    }

    pub(crate) fn append(&mut self, key: &str, value: &str) -> &mut Self {
        self.serializer.append_pair(key, value);
        self.len += 1;
        self
    }

    /// Joins the query onto `base`. No `?` is added when the query is empty.
    pub(crate) fn finish(mut self, base: String) -> GeneratedLink {
        if self.len == 0 {
            return GeneratedLink::new(base);
        }
        let query = self.serializer.finish();
        GeneratedLink::new(format!("{}?{}", base, query))
    }
}

/// Link to the wallet's home screen.
pub fn format_home_link(endpoints: &Endpoints) -> GeneratedLink {
    GeneratedLink::new(endpoints.on_universal_link("home"))
}

/// Builds the deeplink for any action.
pub fn format(endpoints: &Endpoints, request: &LinkRequest) -> Result<GeneratedLink, LinkError> {
    let link = match request {
        LinkRequest::Home => format_home_link(endpoints),
        LinkRequest::Browser(fields) => {
            format_browser_link(endpoints, fields.url.as_deref().unwrap_or_default())?
        }
        LinkRequest::Buy(fields) => format_buy_link(endpoints, fields)?,
        LinkRequest::Sell(fields) => format_sell_link(endpoints, fields)?,
        LinkRequest::SendNative(fields) => format_send_native_link(endpoints, fields)?,
        LinkRequest::Swap(fields) => format_swap_link(endpoints, fields),
    };

    debug!(action = request.action(), url = %link, "generated deeplink");
    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrowserFields, RampFields};

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let endpoints = Endpoints::new("https://example.app.link/", "https://link.example.io//");
        assert_eq!(endpoints.app_link(), "https://example.app.link");
        assert_eq!(endpoints.on_universal_link("home"), "https://link.example.io/home");
    }

    #[test]
    fn test_query_builder_encoding() {
        let mut query = QueryBuilder::new();
        query
            .append("from", "eip155:1/slip44:60")
            .append("note", "a b&c");
        let link = query.finish("https://link.metamask.io/swap".into());
        assert_eq!(
            link.as_str(),
            "https://link.metamask.io/swap?from=eip155%3A1%2Fslip44%3A60&note=a+b%26c"
        );

        let empty = QueryBuilder::new().finish("https://link.metamask.io/swap".into());
        assert_eq!(empty.as_str(), "https://link.metamask.io/swap");
    }

    #[test]
    fn test_home_link() {
        let link = format(&Endpoints::default(), &LinkRequest::Home).unwrap();
        assert_eq!(link.as_str(), "https://link.metamask.io/home");
    }

    #[test]
    fn test_dispatch() {
        let endpoints = Endpoints::default();

        let browser = LinkRequest::Browser(BrowserFields {
            url: Some("https://www.app.uniswap.org".into()),
        });
        assert_eq!(
            format(&endpoints, &browser).unwrap().as_str(),
            "https://metamask.app.link/dapp/app.uniswap.org"
        );

        let missing = LinkRequest::Browser(BrowserFields::default());
        assert_eq!(format(&endpoints, &missing).unwrap_err(), LinkError::missing("url"));

        let sell = LinkRequest::Sell(RampFields::default());
        assert_eq!(format(&endpoints, &sell).unwrap().as_str(), "https://link.metamask.io/sell");
    }
}
