//! Conversion between satoshi integers and litecoin decimal amounts.
//!
//! All arithmetic goes through [`Decimal`], so multiplying or dividing by
//! 10^8 never picks up binary floating-point representation error. Every
//! reduction in precision truncates toward zero; nothing here rounds.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Satoshis in one litecoin.
pub const SATOSHIS_PER_LITECOIN: i64 = 100_000_000;

/// Fractional digits carried by a litecoin amount.
pub const DEFAULT_PRECISION: u32 = 8;

/// Largest scale a [`Decimal`] can represent.
pub const MAX_PRECISION: u32 = 28;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount {0} does not fit in a satoshi count")]
    Overflow(Decimal),

    #[error("precision {0} exceeds the supported maximum of 28")]
    Precision(u32),

    #[error("amount {amount} cannot carry {precision} fractional digits")]
    Scale { amount: Decimal, precision: u32 },

    #[error("invalid amount `{0}`")]
    Invalid(String),
}

/// Convert a litecoin amount into satoshis, dropping anything past the
/// eighth fractional digit.
pub fn to_minor_units(amount: Decimal) -> Result<i64, AmountError> {
    amount
        .checked_mul(Decimal::from(SATOSHIS_PER_LITECOIN))
        .map(|sats| sats.trunc())
        .and_then(|sats| sats.to_i64())
        .ok_or(AmountError::Overflow(amount))
}

/// Convert satoshis into a litecoin amount with exactly eight fractional
/// digits, e.g. `150000000` → `"1.50000000"`.
pub fn to_decimal(minor_units: i64) -> String {
    Decimal::new(minor_units, DEFAULT_PRECISION).to_string()
}

/// Truncate `amount` to `precision` fractional digits and format it with
/// exactly that many digits. `1.123456789` at precision 8 is `"1.12345678"`.
pub fn truncate_to_fixed(amount: Decimal, precision: u32) -> Result<String, AmountError> {
    if precision > MAX_PRECISION {
        return Err(AmountError::Precision(precision));
    }

    let mut truncated = amount.round_dp_with_strategy(precision, RoundingStrategy::ToZero);
    // `rescale` stops short when the mantissa would exceed 96 bits.
    truncated.rescale(precision);
    if truncated.scale() != precision {
        return Err(AmountError::Scale { amount, precision });
    }
    if truncated.is_zero() {
        truncated.set_sign_positive(true);
    }
    Ok(truncated.to_string())
}

/// Parse an amount in plain (`"0.001"`) or scientific (`"1e-8"`) notation.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| AmountError::Invalid(raw.to_owned()))
}

/// Lift a float into a [`Decimal`] through its shortest round-trip text,
/// so `1.123456789_f64` becomes exactly `1.123456789`.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::Invalid(value.to_string()));
    }
    parse_amount(&value.to_string())
}

/// Serde helper for node-reported amounts, which arrive as JSON numbers
/// (occasionally as strings). Use with `#[serde(deserialize_with = ...)]`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let text = match &raw {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected amount, found {other}"
            )))
        }
    };
    parse_amount(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        parse_amount(s).expect("test amount must parse")
    }

    #[test]
    fn truncate_drops_ninth_digit_instead_of_rounding() {
        let fixed = truncate_to_fixed(dec("1.123456789"), DEFAULT_PRECISION).expect("truncate");
        assert_eq!(fixed, "1.12345678");
    }

    #[test]
    fn truncate_pads_to_requested_precision() {
        assert_eq!(truncate_to_fixed(dec("2"), 8).expect("truncate"), "2.00000000");
        assert_eq!(truncate_to_fixed(dec("0.129"), 2).expect("truncate"), "0.12");
        assert_eq!(truncate_to_fixed(dec("7.9"), 0).expect("truncate"), "7");
    }

    #[test]
    fn truncate_moves_negative_values_toward_zero() {
        assert_eq!(
            truncate_to_fixed(dec("-1.999999999"), 8).expect("truncate"),
            "-1.99999999"
        );
        assert_eq!(
            truncate_to_fixed(dec("-0.000000001"), 8).expect("truncate"),
            "0.00000000"
        );
    }

    #[test]
    fn truncate_rejects_unrepresentable_precision() {
        let err = truncate_to_fixed(dec("1"), 29).expect_err("precision 29 must fail");
        assert_eq!(err, AmountError::Precision(29));
    }

    #[test]
    fn truncate_rejects_values_too_wide_for_precision() {
        assert_eq!(
            truncate_to_fixed(dec("10"), 28),
            Err(AmountError::Scale {
                amount: dec("10"),
                precision: 28
            })
        );

        let max = dec("79228162514264337593543950335");
        let err = truncate_to_fixed(max, 8).expect_err("no room for eight digits");
        assert!(matches!(err, AmountError::Scale { precision: 8, .. }));
    }

    #[test]
    fn truncate_fills_full_scale_when_it_fits() {
        let fixed = truncate_to_fixed(dec("1"), 28).expect("1 fits at scale 28");
        assert_eq!(fixed, format!("1.{}", "0".repeat(28)));
        let fixed = truncate_to_fixed(dec("0"), 28).expect("zero fits at scale 28");
        assert_eq!(fixed, format!("0.{}", "0".repeat(28)));
    }

    #[test]
    fn to_minor_units_scales_by_hundred_million() {
        assert_eq!(to_minor_units(dec("1.5")).expect("convert"), 150_000_000);
        assert_eq!(to_minor_units(dec("0.00000001")).expect("convert"), 1);
        assert_eq!(to_minor_units(dec("0.000000019")).expect("convert"), 1);
        assert_eq!(to_minor_units(dec("-0.5")).expect("convert"), -50_000_000);
    }

    #[test]
    fn to_minor_units_reports_overflow() {
        let huge = dec("100000000000000");
        assert_eq!(to_minor_units(huge), Err(AmountError::Overflow(huge)));
    }

    #[test]
    fn to_decimal_always_carries_eight_digits() {
        assert_eq!(to_decimal(150_000_000), "1.50000000");
        assert_eq!(to_decimal(1), "0.00000001");
        assert_eq!(to_decimal(0), "0.00000000");
        assert_eq!(to_decimal(-250_000_000), "-2.50000000");
    }

    #[test]
    fn minor_unit_round_trip_preserves_eight_place_values() {
        for raw in ["0.00000001", "1.5", "84000000", "12.34567891"] {
            let amount = dec(raw);
            let back = to_decimal(to_minor_units(amount).expect("convert"));
            assert_eq!(back, truncate_to_fixed(amount, 8).expect("truncate"));
        }
    }

    #[test]
    fn floats_are_lifted_through_shortest_text() {
        let amount = decimal_from_f64(1.123456789).expect("finite float");
        assert_eq!(amount, dec("1.123456789"));
        let sum = decimal_from_f64(0.1 + 0.2).expect("finite float");
        assert_eq!(to_minor_units(sum).expect("convert"), 30_000_000);
        assert!(decimal_from_f64(f64::NAN).is_err());
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(dec("1e-8"), dec("0.00000001"));
        assert!(matches!(parse_amount("ltc"), Err(AmountError::Invalid(_))));
    }

    #[test]
    fn deserialize_amount_reads_numbers_and_strings() {
        #[derive(Deserialize)]
        struct Balance {
            #[serde(deserialize_with = "deserialize_amount")]
            amount: Decimal,
        }

        let from_number: Balance =
            serde_json::from_str(r#"{"amount": 0.00000001}"#).expect("number amount");
        assert_eq!(from_number.amount, dec("0.00000001"));

        let from_string: Balance =
            serde_json::from_str(r#"{"amount": "12.5"}"#).expect("string amount");
        assert_eq!(from_string.amount, dec("12.5"));

        assert!(serde_json::from_str::<Balance>(r#"{"amount": true}"#).is_err());
    }
}
