use super::fields::split_fields;
use crate::domain::{DeliveryStatus, StatusMapping};

/// Query parameter carrying the airwaybill id.
pub const AIRWAYBILL_FIELD: &str = "rpt";

pub fn encode_report_params(airwaybill_id: &str) -> Vec<(String, String)> {
    vec![(AIRWAYBILL_FIELD.to_owned(), airwaybill_id.to_owned())]
}

/// Bodies that do not start with a digit are answers for unknown ids, not
/// malformed responses, so this never fails.
pub fn decode_report_response(body: &str, mapping: StatusMapping) -> DeliveryStatus {
    if !body.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return DeliveryStatus::InvalidId;
    }

    let fields = split_fields(body);
    mapping.classify(fields[0])
}
