use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One deeplink to build, tagged by the action the wallet should perform.
///
/// JSON form: `{"action": "buy", "chainId": "59144", "amount": "25"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum LinkRequest {
    Home,
    Browser(BrowserFields),
    Buy(RampFields),
    Sell(RampFields),
    SendNative(SendNativeFields),
    Swap(SwapFields),
}

impl LinkRequest {
    pub fn action(&self) -> &'static str {
        match self {
            LinkRequest::Home => "home",
            LinkRequest::Browser(_) => "browser",
            LinkRequest::Buy(_) => "buy",
            LinkRequest::Sell(_) => "sell",
            LinkRequest::SendNative(_) => "send-native",
            LinkRequest::Swap(_) => "swap",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserFields {
    #[serde(default)]
    pub url: Option<String>,
}

/// Fields shared by the buy and sell (on/off-ramp) links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampFields {
    #[serde(default, deserialize_with = "loose_string")]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNativeFields {
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub chain_id: Option<String>,
    /// Whole native units, e.g. "1" for 1 ETH.
    #[serde(default, deserialize_with = "loose_string")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapFields {
    #[serde(default)]
    pub from: Option<Asset>,
    #[serde(default)]
    pub to: Option<Asset>,
    /// Human units of the `from` token.
    #[serde(default, deserialize_with = "loose_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub decimals: Option<String>,
}

/// One side of a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(default, deserialize_with = "loose_string")]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Asset {
    pub fn new(token_type: TokenType) -> Self {
        Self {
            token_type,
            chain_id: None,
            address: None,
        }
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    EvmNative,
    Erc20,
    Solana,
    Spl,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::EvmNative => "evm-native",
            TokenType::Erc20 => "erc20",
            TokenType::Solana => "solana",
            TokenType::Spl => "spl",
        }
    }

    pub fn is_evm(&self) -> bool {
        matches!(self, TokenType::EvmNative | TokenType::Erc20)
    }

    pub fn takes_address(&self) -> bool {
        matches!(self, TokenType::Erc20 | TokenType::Spl)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evm-native" => Ok(TokenType::EvmNative),
            "erc20" => Ok(TokenType::Erc20),
            "solana" => Ok(TokenType::Solana),
            "spl" => Ok(TokenType::Spl),
            other => Err(format!(
                "unknown token type {:?} (expected evm-native, erc20, solana or spl)",
                other
            )),
        }
    }
}

/// A generated deeplink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedLink(String);

impl GeneratedLink {
    pub(crate) fn new(url: String) -> Self {
        GeneratedLink(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trims `field` and treats an empty result as absent.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// Form hosts send numbers as strings, JSON clients often send real numbers.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Str(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
        Loose::Str(s) => s,
        Loose::Unsigned(n) => n.to_string(),
        Loose::Signed(n) => n.to_string(),
        Loose::Float(n) => n.to_string(),
    }))
}
