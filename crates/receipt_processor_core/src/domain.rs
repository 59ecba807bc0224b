//! crates/receipt_processor_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format; the
//! web layer converts its wire payloads into them with the parsers below.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//=========================================================================================
// Validation Errors
//=========================================================================================

/// A receipt field that could not be turned into its domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a valid decimal amount: '{value}'")]
    InvalidAmount { field: &'static str, value: String },
    #[error("{field} must not be negative: '{value}'")]
    NegativeAmount { field: &'static str, value: String },
    #[error("{field} exceeds the largest accepted amount: '{value}'")]
    AmountTooLarge { field: &'static str, value: String },
    #[error("purchaseDate must be formatted as YYYY-MM-DD: '{0}'")]
    InvalidDate(String),
    #[error("purchaseTime must be formatted as HH:MM or HH:MM:SS: '{0}'")]
    InvalidTime(String),
}

//=========================================================================================
// Receipt Model
//=========================================================================================

/// A single purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub description: String,
    pub price: Decimal,
}

/// A purchase receipt as accepted for scoring.
///
/// `total` is kept exactly as submitted; it is not reconciled against the
/// item prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub total: Decimal,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
}

/// The opaque identifier assigned to a receipt when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier only if it is in the exact form this service issues
    /// (lowercase, hyphenated). Any other text cannot name a stored receipt.
    pub fn parse_issued(text: &str) -> Option<Self> {
        let uuid = Uuid::parse_str(text).ok()?;
        let id = Self(uuid);
        (id.to_string() == text).then_some(id)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A receipt together with the identifier the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
}

//=========================================================================================
// Field Parsers
//=========================================================================================

/// The largest amount accepted for a total or an item price, in dollars.
pub const MAX_AMOUNT_DOLLARS: i64 = 1_000_000_000;

/// Parses a non-negative decimal currency amount such as `"35.35"`.
///
/// Only ASCII digits and one optional decimal point are accepted. Any leading
/// minus sign is rejected, `"-0.00"` included. Amounts above
/// [`MAX_AMOUNT_DOLLARS`] are rejected so that scoring stays within `u64`.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        field,
        value: text.to_string(),
    };

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !well_formed {
        return Err(invalid());
    }
    if negative {
        return Err(ValidationError::NegativeAmount {
            field,
            value: text.to_string(),
        });
    }

    let value = Decimal::from_str(unsigned).map_err(|_| invalid())?;
    if value > Decimal::from(MAX_AMOUNT_DOLLARS) {
        return Err(ValidationError::AmountTooLarge {
            field,
            value: text.to_string(),
        });
    }
    Ok(value)
}

/// Parses a purchase date in `YYYY-MM-DD` form.
pub fn parse_purchase_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(text.to_string());
    if !matches_shape(text, "dddd-dd-dd") {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid())
}

/// Parses a 24-hour purchase time in `HH:MM` or `HH:MM:SS` form.
pub fn parse_purchase_time(text: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidTime(text.to_string());
    let format = if matches_shape(text, "dd:dd") {
        "%H:%M"
    } else if matches_shape(text, "dd:dd:dd") {
        "%H:%M:%S"
    } else {
        return Err(invalid());
    };
    NaiveTime::parse_from_str(text, format).map_err(|_| invalid())
}

/// Checks `text` against a fixed-width shape where `d` stands for an ASCII
/// digit and every other character must appear literally.
fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            literal => c == literal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_plain_decimals() {
        assert_eq!(parse_amount("total", "35.35").unwrap(), Decimal::new(3535, 2));
        assert_eq!(parse_amount("total", "9").unwrap(), Decimal::new(9, 0));
        assert_eq!(parse_amount("total", "0.00").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn amount_rejects_garbage_and_negatives() {
        for bad in ["", "abc", "1.2.3", " 1.00", "$5.00", "1e3", "-", "."] {
            assert!(
                matches!(
                    parse_amount("price", bad),
                    Err(ValidationError::InvalidAmount { field: "price", .. })
                ),
                "expected '{bad}' to be rejected"
            );
        }
        for negative in ["-1.25", "-0.00", "-0"] {
            assert!(matches!(
                parse_amount("total", negative),
                Err(ValidationError::NegativeAmount { field: "total", .. })
            ));
        }
    }

    #[test]
    fn amount_is_capped() {
        assert_eq!(
            parse_amount("price", "1000000000.00").unwrap(),
            Decimal::from(MAX_AMOUNT_DOLLARS)
        );
        for huge in ["1000000000.01", "90000000000000000000", "70000000000000000000000000000"] {
            assert!(
                matches!(
                    parse_amount("price", huge),
                    Err(ValidationError::AmountTooLarge { field: "price", .. })
                ),
                "expected '{huge}' to be rejected"
            );
        }
        // beyond what a decimal can hold at all
        assert!(matches!(
            parse_amount("total", &"9".repeat(40)),
            Err(ValidationError::InvalidAmount { field: "total", .. })
        ));
    }

    #[test]
    fn date_requires_exact_shape_and_real_day() {
        assert_eq!(
            parse_purchase_date("2022-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
        for bad in ["2022-1-01", "22-01-01", "2022/01/01", "2022-02-30", "2022-13-01", ""] {
            assert_eq!(
                parse_purchase_date(bad),
                Err(ValidationError::InvalidDate(bad.to_string()))
            );
        }
    }

    #[test]
    fn time_accepts_minutes_and_seconds_forms() {
        assert_eq!(
            parse_purchase_time("14:33").unwrap(),
            NaiveTime::from_hms_opt(14, 33, 0).unwrap()
        );
        assert_eq!(
            parse_purchase_time("16:00:00").unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        );
        for bad in ["2:33", "24:00", "14:60", "14-33", "2pm", "14:33:0"] {
            assert_eq!(
                parse_purchase_time(bad),
                Err(ValidationError::InvalidTime(bad.to_string()))
            );
        }
    }

    #[test]
    fn receipt_ids_only_parse_in_issued_form() {
        let id = ReceiptId::generate();
        let text = id.to_string();
        assert_eq!(ReceiptId::parse_issued(&text), Some(id));
        assert_eq!(ReceiptId::parse_issued(&text.to_uppercase()), None);
        assert_eq!(ReceiptId::parse_issued(&text.replace('-', "")), None);
        assert_eq!(ReceiptId::parse_issued("not-an-id"), None);
    }
}
