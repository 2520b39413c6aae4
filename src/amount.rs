use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

use crate::error::LinkError;

/// Decimals of every native asset sent through the send endpoint. The wallet
/// expects wei, so this is not chain-aware.
pub const NATIVE_DECIMALS: u8 = 18;

// Inputs like "1e-999999999" would make the integer conversion allocate
// absurd amounts of memory.
const MAX_DECIMAL_EXPONENT: i64 = 256;

/// Parses a non-negative decimal amount in human units ("1", "0.01", "2.5e3").
pub fn parse_amount(field: &'static str, input: &str) -> Result<BigDecimal, LinkError> {
    let value = BigDecimal::from_str(input)
        .map_err(|_| LinkError::malformed(field, format!("{:?} is not a decimal number", input)))?;

    if value.sign() == Sign::Minus {
        return Err(LinkError::malformed(field, "amount must not be negative"));
    }

    let (_, scale) = value.as_bigint_and_exponent();
    if scale.abs() > MAX_DECIMAL_EXPONENT {
        return Err(LinkError::malformed(field, "amount is out of range"));
    }

    Ok(value)
}

fn ten_pow(exp: u8) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -i64::from(exp))
}

/// Converts whole native units to wei and renders them the way the send
/// endpoint expects: `1` becomes `1e18`, `0.01` becomes `1e16`.
pub fn to_wei_exponential(value: &BigDecimal) -> String {
    exponential_notation(&(value * ten_pow(NATIVE_DECIMALS)))
}

/// Renders `value` in normalized exponential notation without a `+` on the
/// exponent: one leading digit, no trailing zeros in the mantissa.
pub fn exponential_notation(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0e0".to_string();
    }

    let (int_val, scale) = value.normalized().into_bigint_and_exponent();
    let sign = if int_val.sign() == Sign::Minus { "-" } else { "" };
    let digits = int_val.magnitude().to_string();
    let exponent = digits.len() as i64 - 1 - scale;

    let mantissa = if digits.len() > 1 {
        format!("{}.{}", &digits[..1], &digits[1..])
    } else {
        digits
    };

    format!("{}{}e{}", sign, mantissa, exponent)
}

/// `amount × 10^decimals` as a plain integer string. Any fraction left over
/// is truncated toward zero.
pub fn to_smallest_unit(amount: &BigDecimal, decimals: u8) -> String {
    let scaled = amount * ten_pow(decimals);
    let (int_val, _) = scaled.with_scale(0).into_bigint_and_exponent();
    int_val.to_string()
}
