use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;

/// Balance and expiry of the gateway account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    /// Remaining balance, truncated toward zero from the gateway's decimal value.
    pub balance: i64,
    /// Account expiry in Asia/Jakarta time (UTC+07:00).
    pub expiry: DateTime<FixedOffset>,
}

/// Receipt for a message accepted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airwaybill {
    /// Response body of `send.php`, unmodified. The gateway encodes both ids and
    /// error text here, so this may be empty or an error string.
    pub id: String,
    /// Local time at which the response body was fully read.
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// Delivery state of a submitted message.
pub enum DeliveryStatus {
    /// The gateway gave up on the message.
    Failed,
    /// Handed over to the operator for delivery.
    Sent,
    /// Confirmed on the handset.
    Delivered,
    /// The airwaybill id is unknown to the gateway.
    InvalidId,
    /// The destination number was rejected.
    InvalidMsisdn,
    /// Not enough balance to send.
    BalanceInsufficient,
    /// The account has expired.
    BalanceExpired,
}
