use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The relay endpoint's whole response vocabulary:
/// either the email went out, or it did not.
#[derive(Getters, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    success: bool,
}

impl Acknowledgement {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}
