use chrono::{DateTime, Local};

use crate::domain::{Airwaybill, Msisdn};

/// Form field carrying the message text.
pub const MESSAGE_FIELD: &str = "message";

pub fn encode_send_form(msisdn: &Msisdn, message: &str) -> Vec<(String, String)> {
    vec![
        (Msisdn::FIELD.to_owned(), msisdn.as_str().to_owned()),
        (MESSAGE_FIELD.to_owned(), message.to_owned()),
    ]
}

/// The gateway's success and error encodings are both opaque text; the body is
/// kept verbatim as the receipt id.
pub fn decode_send_response(body: String, received_at: DateTime<Local>) -> Airwaybill {
    Airwaybill {
        id: body,
        timestamp: received_at,
    }
}
