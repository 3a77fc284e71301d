//! Transport layer: endpoint shapes and the plaintext wire format.

mod balance;
mod endpoint;
mod fields;
mod report;
mod send;

pub use balance::{decode_balance_response, encode_balance_params};
pub use endpoint::{Endpoint, RequestKind};
pub use fields::split_fields;
pub use report::{decode_report_response, encode_report_params};
pub use send::{decode_send_response, encode_send_form};
