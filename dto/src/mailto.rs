use crate::attendance::Attendance;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Build a `mailto:` URI whose subject and body are percent-encoded,
/// so that `&`, `?`, spaces and line breaks coming from guest input
/// cannot corrupt the URI.
pub fn mailto_uri(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        utf8_percent_encode(subject, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC)
    )
}

/// The mailto rendition of an RSVP: all four captured values are embedded
/// in the message handed to the guest's own mail client.
pub fn rsvp_mailto_uri(
    address: &str,
    name: &str,
    email: &str,
    attendance: Attendance,
    note: &str,
) -> String {
    let subject = format!("RSVP from {name}");
    let body = format!(
        "Name: {name}\nEmail: {email}\nAttending: {attendance}\nMessage: {note}"
    );

    mailto_uri(address, &subject, &body)
}
