use bigdecimal::Zero;
use tracing::{debug, warn};

use super::{Endpoints, QueryBuilder};
use crate::address::EvmAddress;
use crate::amount::{parse_amount, to_smallest_unit};
use crate::chain::{parse_evm_chain_id, AssetId};
use crate::types::{present, Asset, GeneratedLink, SwapFields, TokenType};

/// Opens the swap screen, optionally prefilled.
///
/// Never fails: a side that cannot be turned into an asset identifier, or an
/// amount that cannot be scaled (or scales below one smallest unit), is left
/// out of the link. With nothing usable
/// the result is the bare swap endpoint.
pub fn format_swap_link(endpoints: &Endpoints, fields: &SwapFields) -> GeneratedLink {
    let mut query = QueryBuilder::new();

    if let Some(from) = fields.from.as_ref().and_then(|asset| asset_id("from", asset)) {
        query.append("from", &from.to_string());
    }
    if let Some(to) = fields.to.as_ref().and_then(|asset| asset_id("to", asset)) {
        query.append("to", &to.to_string());
    }
    if let Some(amount) = smallest_unit_amount(fields) {
        query.append("amount", &amount);
    }

    query.finish(endpoints.on_universal_link("swap"))
}

/// Builds the CAIP-19 identifier for one side, ignoring fields that do not
/// apply to its token type.
fn asset_id(side: &'static str, asset: &Asset) -> Option<AssetId> {
    let token_type = asset.token_type;
    let chain_id = present(&asset.chain_id).filter(|_| token_type.is_evm());
    let address = present(&asset.address).filter(|_| token_type.takes_address());

    if present(&asset.chain_id).is_some() && chain_id.is_none() {
        debug!(side, %token_type, "ignoring chain id");
    }
    if present(&asset.address).is_some() && address.is_none() {
        debug!(side, %token_type, "ignoring token address");
    }

    match token_type {
        TokenType::EvmNative => {
            let chain_id = evm_chain_id(side, chain_id)?;
            Some(AssetId::EvmNative { chain_id })
        }
        TokenType::Erc20 => {
            let chain_id = evm_chain_id(side, chain_id)?;
            let Some(address) = address else {
                warn!(side, "erc20 asset without a token address, leaving it out");
                return None;
            };
            match EvmAddress::parse("tokenAddress", address) {
                Ok(address) => Some(AssetId::Erc20 { chain_id, address }),
                Err(e) => {
                    warn!(side, "{}, leaving it out", e);
                    None
                }
            }
        }
        TokenType::Solana => Some(AssetId::SolanaNative),
        TokenType::Spl => match address {
            Some(mint) => Some(AssetId::Spl {
                mint: mint.to_string(),
            }),
            None => {
                warn!(side, "spl asset without a token address, leaving it out");
                None
            }
        },
    }
}

fn evm_chain_id(side: &'static str, chain_id: Option<&str>) -> Option<u64> {
    let Some(raw) = chain_id else {
        warn!(side, "evm asset without a chain id, leaving it out");
        return None;
    };
    match parse_evm_chain_id("chainId", raw) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(side, "{}, leaving it out", e);
            None
        }
    }
}

fn smallest_unit_amount(fields: &SwapFields) -> Option<String> {
    let (amount, decimals) = match (present(&fields.amount), present(&fields.decimals)) {
        (Some(amount), Some(decimals)) => (amount, decimals),
        (Some(_), None) => {
            debug!("swap amount given without decimals, leaving it out");
            return None;
        }
        _ => return None,
    };

    let amount = match parse_amount("amount", amount) {
        Ok(amount) => amount,
        Err(e) => {
            warn!("{}, leaving swap amount out", e);
            return None;
        }
    };
    let decimals = match decimals.parse::<u8>() {
        Ok(decimals) => decimals,
        Err(_) => {
            warn!(decimals, "decimals must be an integer between 0 and 255, leaving swap amount out");
            return None;
        }
    };

    let scaled = to_smallest_unit(&amount, decimals);
    if scaled == "0" && !amount.is_zero() {
        warn!(decimals, "swap amount is below one smallest unit, leaving it out");
        return None;
    }
    Some(scaled)
}
