//! Typed Rust client for the MySMSMasking HTTP gateway.
//!
//! The crate is split into a domain layer of strong types (msisdn validation,
//! delivery status classification), a transport layer for the gateway's
//! comma-separated plaintext responses, and a small client layer orchestrating
//! requests.
//!
//! ```rust,no_run
//! use mysmsmasking::{Config, DeliveryStatus, MaskingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mysmsmasking::MaskingError> {
//!     let client = MaskingClient::new(Config::from_env("user", "secret"));
//!     let awb = client.send("081234567890", "hello").await?;
//!     if client.get_status(&awb.id).await? == DeliveryStatus::Delivered {
//!         println!("delivered");
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BASE_URL_ENV, BaseUrlResolver, Config, Credentials, DEFAULT_BASE_URL, MaskingClient,
    MaskingClientBuilder, MaskingError, base_url,
};
pub use domain::{
    AccountInfo, Airwaybill, DeliveryStatus, Msisdn, StatusMapping, ValidationError, classify,
    is_valid_msisdn,
};
pub use transport::split_fields;
