use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use num_traits::{One, ToPrimitive};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::errors::ReceiptError;

// Monetary amounts: ASCII digits, a dot, exactly two cents digits.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.([0-9]{2})$").expect("amount pattern is a valid regex")
});

/// Identifier of a stored score record.
///
/// Submitted receipts get a name-based UUID (v5, SHA-1) over the nil namespace
/// and the exact request bytes, so two byte-identical submissions share an id
/// while equivalent JSON with different formatting does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wraps an id received from a caller. No validation: unknown ids are simply absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives the id from the literal submitted bytes.
    pub fn from_raw(raw: &[u8]) -> Self {
        Self(Uuid::new_v5(&Uuid::nil(), raw).hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Receipt total, guaranteed to look like `digits.XX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Total {
    amount: String,
    cents_start: usize,
}

impl Total {
    pub fn parse(raw: &str) -> Result<Self, ReceiptError> {
        let cents = AMOUNT_PATTERN
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .ok_or(ReceiptError::MalformedTotal)?;

        Ok(Self {
            amount: raw.to_string(),
            cents_start: cents.start(),
        })
    }

    /// The two fractional digits, e.g. `"25"` for `"35.25"`.
    pub fn cents(&self) -> &str {
        &self.amount[self.cents_start..]
    }

    pub fn as_str(&self) -> &str {
        &self.amount
    }
}

impl std::fmt::Display for Total {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// Item price in the same `digits.XX` shape as the total.
///
/// Exponents, signs and other fractional lengths are rejected up front, so the
/// decimal never grows beyond the digits actually submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Price(BigDecimal);

impl Price {
    pub fn parse(raw: &str) -> Option<Self> {
        if !AMOUNT_PATTERN.is_match(raw) {
            return None;
        }
        BigDecimal::from_str(raw).ok().map(Self)
    }

    /// A fifth of the price rounded up to a whole number, saturating at `u64::MAX`.
    pub fn fifth_rounded_up(&self) -> u64 {
        let scaled = &self.0 * BigDecimal::new(BigInt::from(2), 1);
        let whole = scaled.with_scale(0);
        let ceiling = if whole < scaled {
            whole + BigDecimal::one()
        } else {
            whole
        };

        ceiling.to_u64().unwrap_or(u64::MAX)
    }
}
