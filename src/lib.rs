//! Deeplinks for the MetaMask mobile app.
//!
//! Turns a [`LinkRequest`] (open a dapp, buy, sell, send, swap, or just open
//! the app) into a universal link the wallet understands, and optionally a QR
//! code for it.
//!
//! ```
//! use deeplinks::{format, Endpoints, LinkRequest, RampFields};
//!
//! let request = LinkRequest::Buy(RampFields {
//!     chain_id: Some("59144".into()),
//!     amount: Some("25".into()),
//!     ..Default::default()
//! });
//! let link = format(&Endpoints::default(), &request).unwrap();
//! assert_eq!(link.as_str(), "https://metamask.app.link/buy?chainId=59144&amount=25");
//! ```

pub mod address;
pub mod amount;
pub mod chain;
pub mod config;
pub mod error;
pub mod http;
pub mod links;
pub mod presets;
pub mod qr;
pub mod types;

pub use error::LinkError;
pub use links::{
    format, format_browser_link, format_buy_link, format_home_link, format_sell_link,
    format_send_native_link, format_swap_link, Endpoints,
};
pub use types::{
    Asset, BrowserFields, GeneratedLink, LinkRequest, RampFields, SendNativeFields, SwapFields,
    TokenType,
};
