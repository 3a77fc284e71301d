use std::num::ParseFloatError;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;

use super::fields::split_fields;
use crate::domain::AccountInfo;

/// `YYYY/MM/DD-HH:MM:SS`, as printed by `balance.php`.
const EXPIRY_FORMAT: &str = "%Y/%m/%d-%H:%M:%S";

/// Byte layout of [`EXPIRY_FORMAT`]; `9` marks an ASCII digit.
const EXPIRY_SHAPE: &[u8; 19] = b"9999/99/99-99:99:99";

/// Asia/Jakarta has been UTC+07:00 without DST since 1964.
static JAKARTA: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(7 * 3600).expect("UTC+07:00 is a valid offset"));

#[derive(Debug, thiserror::Error)]
pub enum BalanceParseError {
    #[error("invalid balance {input:?}: {source}")]
    InvalidBalance {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("balance response has no {field} field")]
    MissingField { field: &'static str },

    #[error("balance {input:?} is not a finite number")]
    NonFiniteBalance { input: String },

    #[error("invalid expiry {input:?}, expected YYYY/MM/DD-HH:MM:SS")]
    InvalidExpiry {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("expiry {input:?} is out of range")]
    ExpiryOutOfRange { input: String },
}

pub fn encode_balance_params() -> Vec<(String, String)> {
    Vec::new()
}

pub fn decode_balance_response(body: &str) -> Result<AccountInfo, BalanceParseError> {
    let fields = split_fields(body);

    let balance = fields[0]
        .parse::<f64>()
        .map_err(|source| BalanceParseError::InvalidBalance {
            input: fields[0].to_owned(),
            source,
        })?;
    if !balance.is_finite() {
        return Err(BalanceParseError::NonFiniteBalance {
            input: fields[0].to_owned(),
        });
    }

    let expiry = fields
        .get(1)
        .copied()
        .ok_or(BalanceParseError::MissingField { field: "expiry" })?;

    Ok(AccountInfo {
        // `as` truncates toward zero and saturates at the i64 bounds.
        balance: balance as i64,
        expiry: parse_expiry(expiry)?,
    })
}

/// chrono accepts single-digit fields for `%m`, `%d`, `%H`, `%M` and `%S`; the
/// gateway always zero-pads, so anything else is rejected up front.
fn has_expiry_shape(input: &str) -> bool {
    input.len() == EXPIRY_SHAPE.len()
        && input
            .bytes()
            .zip(EXPIRY_SHAPE.iter())
            .all(|(byte, &expected)| match expected {
                b'9' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
}

fn parse_expiry(input: &str) -> Result<DateTime<FixedOffset>, BalanceParseError> {
    if !has_expiry_shape(input) {
        return Err(BalanceParseError::InvalidExpiry {
            input: input.to_owned(),
            source: None,
        });
    }
    let local = NaiveDateTime::parse_from_str(input, EXPIRY_FORMAT).map_err(|source| {
        BalanceParseError::InvalidExpiry {
            input: input.to_owned(),
            source: Some(source),
        }
    })?;
    JAKARTA
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| BalanceParseError::ExpiryOutOfRange {
            input: input.to_owned(),
        })
}
