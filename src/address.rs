use std::fmt;

use crate::error::LinkError;

const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte EVM account or contract address.
///
/// The original spelling is kept so checksummed (mixed-case) input ends up in
/// the link exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmAddress {
    raw: String,
    bytes: [u8; 20],
}

impl EvmAddress {
    /// Parses `input` as `0x` followed by exactly 40 hex digits. `field` is
    /// the name reported if the value is rejected.
    pub fn parse(field: &'static str, input: &str) -> Result<Self, LinkError> {
        let digits = input
            .strip_prefix("0x")
            .ok_or_else(|| LinkError::malformed(field, "address must start with 0x"))?;

        if digits.len() != ADDRESS_HEX_LEN {
            return Err(LinkError::malformed(
                field,
                format!(
                    "address must have {} hex digits after 0x, got {}",
                    ADDRESS_HEX_LEN,
                    digits.len()
                ),
            ));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| LinkError::malformed(field, format!("address is not hex: {}", e)))?;

        Ok(Self {
            raw: input.to_string(),
            bytes,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_LINEA: &str = "0x176211869cA2b568f2A7D4EE941E073a821EE1ff";

    #[test]
    fn test_parse_keeps_checksum_case() {
        let address = EvmAddress::parse("address", USDC_LINEA).unwrap();
        assert_eq!(address.as_str(), USDC_LINEA);
        assert_eq!(address.as_bytes()[0], 0x17);
        assert_eq!(address.as_bytes()[19], 0xff);
    }

    #[test]
    fn test_rejects_bad_addresses() {
        for bad in [
            "",
            "176211869cA2b568f2A7D4EE941E073a821EE1ff",
            "0X176211869cA2b568f2A7D4EE941E073a821EE1ff",
            "0x176211869cA2b568f2A7D4EE941E073a821EE1f",
            "0x176211869cA2b568f2A7D4EE941E073a821EE1ff0",
            "0x176211869cA2b568f2A7D4EE941E073a821EE1fg",
        ] {
            let err = EvmAddress::parse("recipient", bad).unwrap_err();
            assert!(
                matches!(err, LinkError::MalformedField { field: "recipient", .. }),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
