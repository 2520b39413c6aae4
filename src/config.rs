use anyhow::{anyhow, Result};
use url::Url;

use crate::links::{Endpoints, DEFAULT_APP_LINK_BASE, DEFAULT_UNIVERSAL_LINK_BASE};

#[derive(Debug, Clone)]
pub struct Config {
    pub app_link_base: String,
    pub universal_link_base: String,
    pub http_host: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_link_base = lookup("DEEPLINK_APP_LINK_BASE")
            .unwrap_or_else(|| DEFAULT_APP_LINK_BASE.to_string());
        validate_base("DEEPLINK_APP_LINK_BASE", &app_link_base)?;

        let universal_link_base = lookup("DEEPLINK_UNIVERSAL_LINK_BASE")
            .unwrap_or_else(|| DEFAULT_UNIVERSAL_LINK_BASE.to_string());
        validate_base("DEEPLINK_UNIVERSAL_LINK_BASE", &universal_link_base)?;

        Ok(Config {
            app_link_base,
            universal_link_base,
            http_host: lookup("HTTP_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            http_port: lookup("HTTP_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|e| anyhow!("Invalid HTTP_PORT: {}", e))?,
        })
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.app_link_base, &self.universal_link_base)
    }
}

/// Link bases must be absolute http(s) URLs without a query or fragment.
pub fn validate_base(name: &str, base: &str) -> Result<()> {
    let url = Url::parse(base).map_err(|e| anyhow!("Invalid {}: {}", name, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("Invalid {}: scheme must be http or https", name));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(anyhow!("Invalid {}: must not carry a query or fragment", name));
    }
    Ok(())
}
