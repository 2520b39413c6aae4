use super::{Endpoints, QueryBuilder};
use crate::address::EvmAddress;
use crate::amount::{parse_amount, to_wei_exponential};
use crate::chain::parse_evm_chain_id;
use crate::error::LinkError;
use crate::types::{present, GeneratedLink, SendNativeFields};

/// Sends the chain's native asset to `recipient`.
///
/// `value` is in whole units and always converted with 18 decimals, which is
/// only right for 18-decimal native assets.
pub fn format_send_native_link(
    endpoints: &Endpoints,
    fields: &SendNativeFields,
) -> Result<GeneratedLink, LinkError> {
    let recipient = present(&fields.recipient).ok_or_else(|| LinkError::missing("recipient"))?;
    let recipient = EvmAddress::parse("recipient", recipient)?;

    let chain_id = present(&fields.chain_id).ok_or_else(|| LinkError::missing("chainId"))?;
    let chain_id = parse_evm_chain_id("chainId", chain_id)?;

    let wei = present(&fields.value)
        .map(|raw| parse_amount("value", raw))
        .transpose()?
        .map(|value| to_wei_exponential(&value));

    let mut query = QueryBuilder::new();
    if let Some(wei) = wei {
        query.append("value", &wei);
    }

    Ok(query.finish(endpoints.on_app_link(&format!("send/{}@{}", recipient, chain_id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0x176211869cA2b568f2A7D4EE941E073a821EE1ff";

    fn fields(recipient: Option<&str>, chain_id: Option<&str>, value: Option<&str>) -> SendNativeFields {
        SendNativeFields {
            recipient: recipient.map(String::from),
            chain_id: chain_id.map(String::from),
            value: value.map(String::from),
        }
    }

    #[test]
    fn test_send_with_value() {
        let link = format_send_native_link(
            &Endpoints::default(),
            &fields(Some(RECIPIENT), Some("1"), Some("1")),
        )
        .unwrap();
        assert_eq!(
            link.as_str(),
            "https://metamask.app.link/send/0x176211869cA2b568f2A7D4EE941E073a821EE1ff@1?value=1e18"
        );

        let link = format_send_native_link(
            &Endpoints::default(),
            &fields(Some(RECIPIENT), Some("59144"), Some("0.01")),
        )
        .unwrap();
        assert!(link.as_str().ends_with("@59144?value=1e16"));
    }

    #[test]
    fn test_send_without_value() {
        let link =
            format_send_native_link(&Endpoints::default(), &fields(Some(RECIPIENT), Some("1"), None))
                .unwrap();
        assert_eq!(
            link.as_str(),
            "https://metamask.app.link/send/0x176211869cA2b568f2A7D4EE941E073a821EE1ff@1"
        );
    }

    #[test]
    fn test_send_required_fields() {
        let endpoints = Endpoints::default();
        assert_eq!(
            format_send_native_link(&endpoints, &fields(None, Some("1"), None)).unwrap_err(),
            LinkError::missing("recipient")
        );
        assert_eq!(
            format_send_native_link(&endpoints, &fields(Some(RECIPIENT), Some(" "), None)).unwrap_err(),
            LinkError::missing("chainId")
        );
    }

    #[test]
    fn test_send_malformed_fields() {
        let endpoints = Endpoints::default();
        let cases = [
            (fields(Some("0xabc"), Some("1"), None), "recipient"),
            (fields(Some(RECIPIENT), Some("0"), None), "chainId"),
            (fields(Some(RECIPIENT), Some("-5"), None), "chainId"),
            (fields(Some(RECIPIENT), Some("1"), Some("one")), "value"),
            (fields(Some(RECIPIENT), Some("1"), Some("-1")), "value"),
        ];
        for (input, expected) in cases {
            match format_send_native_link(&endpoints, &input) {
                Err(LinkError::MalformedField { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected malformed {}, got {:?}", expected, other),
            }
        }
    }
}
