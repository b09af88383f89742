use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The transient payload posted by the RSVP form.
/// All fields are optional at the transport level:
/// the relay endpoint accepts whatever is posted and never stores it.
#[derive(Getters, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpSubmission {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl RsvpSubmission {
    pub fn new(name: Option<String>, email: Option<String>, message: Option<String>) -> Self {
        Self {
            name,
            email,
            message,
        }
    }
}
