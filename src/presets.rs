use crate::chain::SOLANA_MAINNET;
use crate::types::{Asset, BrowserFields, LinkRequest, RampFields, SwapFields, TokenType};

/// A ready-made request, handy for demos and smoke tests.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub request: LinkRequest,
}

pub const USDC_ETHEREUM: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const USDT_ETHEREUM: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const USDC_LINEA: &str = "0x176211869cA2b568f2A7D4EE941E073a821EE1ff";
pub const USDT_LINEA: &str = "0xA219439258ca9da29E9Cc4cE5596924745e12B93";

const LINEA: &str = "59144";

fn ramp(chain_id: &str, address: Option<&str>, amount: &str) -> RampFields {
    RampFields {
        chain_id: Some(chain_id.to_string()),
        address: address.map(String::from),
        amount: Some(amount.to_string()),
    }
}

fn stable_swap(chain_id: &str, from: &str, to: &str) -> LinkRequest {
    LinkRequest::Swap(SwapFields {
        from: Some(Asset::new(TokenType::Erc20).with_chain_id(chain_id).with_address(from)),
        to: Some(Asset::new(TokenType::Erc20).with_chain_id(chain_id).with_address(to)),
        amount: Some("1".to_string()),
        decimals: Some("6".to_string()),
    })
}

pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            name: "browse-uniswap",
            description: "Open Uniswap in the in-app browser",
            request: LinkRequest::Browser(BrowserFields {
                url: Some("https://app.uniswap.org".to_string()),
            }),
        },
        Preset {
            name: "buy-usdc-linea",
            description: "Buy USDC on Linea",
            request: LinkRequest::Buy(RampFields {
                chain_id: Some(LINEA.to_string()),
                address: Some(USDC_LINEA.to_string()),
                amount: None,
            }),
        },
        Preset {
            name: "sell-eth",
            description: "Sell 0.1 ETH on Ethereum",
            request: LinkRequest::Sell(ramp("1", None, "0.1")),
        },
        Preset {
            name: "sell-sol",
            description: "Sell 0.5 SOL on Solana",
            request: LinkRequest::Sell(ramp(SOLANA_MAINNET, None, "0.5")),
        },
        Preset {
            name: "sell-usdc-linea",
            description: "Sell 25 USDC on Linea",
            request: LinkRequest::Sell(ramp(LINEA, Some(USDC_LINEA), "25")),
        },
        Preset {
            name: "swap-usdc-usdt",
            description: "Swap 1 USDC to USDT",
            request: stable_swap("1", USDC_ETHEREUM, USDT_ETHEREUM),
        },
        Preset {
            name: "swap-usdc-usdt-linea",
            description: "Swap 1 USDC to USDT on Linea",
            request: stable_swap(LINEA, USDC_LINEA, USDT_LINEA),
        },
    ]
}

pub fn find(name: &str) -> Option<Preset> {
    all().into_iter().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{format, Endpoints};

    #[test]
    fn test_every_preset_formats() {
        let endpoints = Endpoints::default();
        for preset in all() {
            let link = format(&endpoints, &preset.request)
                .unwrap_or_else(|e| panic!("preset {} failed: {}", preset.name, e));
            assert!(link.as_str().starts_with("https://"), "{}", preset.name);
        }
    }

    #[test]
    fn test_find() {
        let preset = find("sell-usdc-linea").unwrap();
        let link = format(&Endpoints::default(), &preset.request).unwrap();
        assert_eq!(
            link.as_str(),
            "https://link.metamask.io/sell?chainId=59144&address=0x176211869cA2b568f2A7D4EE941E073a821EE1ff&amount=25"
        );
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_swap_preset_amount() {
        let preset = find("swap-usdc-usdt").unwrap();
        let link = format(&Endpoints::default(), &preset.request).unwrap();
        assert!(link.as_str().ends_with("&amount=1000000"));
    }
}
