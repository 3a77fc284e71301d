//! Domain layer: strong types with validation and invariants (no I/O).

mod response;
mod status;
mod validation;
mod value;

pub use response::{AccountInfo, Airwaybill, DeliveryStatus};
pub use status::{StatusMapping, classify};
pub use validation::ValidationError;
pub use value::{Msisdn, is_valid_msisdn};
