//! Chain references and CAIP-style asset identifiers.
//!
//! EVM chains are addressed by their EIP-155 id (`eip155:<id>`), Solana by its
//! mainnet genesis hash. Asset identifiers follow the CAIP-19 shape
//! `<chain>/<namespace>:<reference>`.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::address::EvmAddress;
use crate::error::LinkError;

/// CAIP-2 reference of Solana mainnet (genesis hash).
pub const SOLANA_MAINNET: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d";

/// SLIP-44 coin type of SOL.
pub const SOLANA_SLIP44: u32 = 501;

/// SLIP-44 coin type of ETH, used for every EVM chain not listed in the table.
pub const DEFAULT_EVM_SLIP44: u32 = 60;

lazy_static! {
    static ref NATIVE_SLIP44: HashMap<u64, u32> = {
        let mut m = HashMap::new();
        m.insert(137, 966);          // Polygon (POL)
        m.insert(56, 714);           // BNB Chain (BNB)
        m.insert(43114, 9000);       // Avalanche C-Chain (AVAX)
        m.insert(1329, 19000118);    // Sei (SEI)
        m
    };
}

/// SLIP-44 coin type of the native asset on an EVM chain.
pub fn native_slip44(chain_id: u64) -> u32 {
    NATIVE_SLIP44
        .get(&chain_id)
        .copied()
        .unwrap_or(DEFAULT_EVM_SLIP44)
}

/// Formats an EIP-155 chain id as a CAIP-2 identifier, e.g. `eip155:59144`.
pub fn caip2(chain_id: u64) -> String {
    format!("eip155:{}", chain_id)
}

/// Parses a positive EIP-155 chain id.
pub fn parse_evm_chain_id(field: &'static str, input: &str) -> Result<u64, LinkError> {
    match input.parse::<u64>() {
        Ok(0) => Err(LinkError::malformed(field, "chain id must be a positive integer")),
        Ok(id) => Ok(id),
        Err(_) => Err(LinkError::malformed(
            field,
            format!("chain id must be a positive integer, got {:?}", input),
        )),
    }
}

/// Chain reference accepted by the buy and sell endpoints: either a bare EVM
/// chain id or a full CAIP-2 reference such as [`SOLANA_MAINNET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainId {
    Evm(u64),
    Caip2(String),
}

impl ChainId {
    pub fn parse(field: &'static str, input: &str) -> Result<Self, LinkError> {
        if let Some((namespace, reference)) = input.split_once(':') {
            if is_caip2_namespace(namespace) && is_caip2_reference(reference) {
                return Ok(ChainId::Caip2(input.to_string()));
            }
            return Err(LinkError::malformed(
                field,
                format!("{:?} is not a CAIP-2 chain reference", input),
            ));
        }
        parse_evm_chain_id(field, input).map(ChainId::Evm)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Evm(id) => write!(f, "{}", id),
            ChainId::Caip2(reference) => f.write_str(reference),
        }
    }
}

fn is_caip2_namespace(s: &str) -> bool {
    (3..=8).contains(&s.len())
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// Solana's reference is the full 44-character genesis hash, longer than the
// 32 characters CAIP-2 allows, so the length bound is relaxed.
fn is_caip2_reference(s: &str) -> bool {
    (1..=64).contains(&s.len())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A CAIP-19-like asset identifier as understood by the swap endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetId {
    EvmNative { chain_id: u64 },
    Erc20 { chain_id: u64, address: EvmAddress },
    SolanaNative,
    Spl { mint: String },
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::EvmNative { chain_id } => {
                write!(f, "{}/slip44:{}", caip2(*chain_id), native_slip44(*chain_id))
            }
            AssetId::Erc20 { chain_id, address } => {
                write!(f, "{}/erc20:{}", caip2(*chain_id), address)
            }
            AssetId::SolanaNative => write!(f, "{}/slip44:{}", SOLANA_MAINNET, SOLANA_SLIP44),
            AssetId::Spl { mint } => write!(f, "{}/token:{}", SOLANA_MAINNET, mint),
        }
    }
}
