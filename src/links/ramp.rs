use super::{Endpoints, QueryBuilder};
use crate::address::EvmAddress;
use crate::chain::ChainId;
use crate::error::LinkError;
use crate::types::{present, GeneratedLink, RampFields};

/// Buy crypto with fiat. Parameters are optional and appear in the order
/// `chainId`, `address`, `amount`.
pub fn format_buy_link(endpoints: &Endpoints, fields: &RampFields) -> Result<GeneratedLink, LinkError> {
    let query = ramp_query(fields)?;
    Ok(query.finish(endpoints.on_app_link("buy")))
}

/// Sell crypto for fiat. Same parameters as [`format_buy_link`].
pub fn format_sell_link(endpoints: &Endpoints, fields: &RampFields) -> Result<GeneratedLink, LinkError> {
    let query = ramp_query(fields)?;
    Ok(query.finish(endpoints.on_universal_link("sell")))
}

// The amount goes out untouched: the wallet decides how to interpret units.
fn ramp_query(fields: &RampFields) -> Result<QueryBuilder, LinkError> {
    let chain_id = present(&fields.chain_id)
        .map(|raw| ChainId::parse("chainId", raw))
        .transpose()?;
    let address = present(&fields.address)
        .map(|raw| EvmAddress::parse("address", raw))
        .transpose()?;

    let mut query = QueryBuilder::new();
    if let Some(chain_id) = chain_id {
        query.append("chainId", &chain_id.to_string());
    }
    if let Some(address) = address {
        query.append("address", address.as_str());
    }
    if let Some(amount) = present(&fields.amount) {
        query.append("amount", amount);
    }
    Ok(query)
}
