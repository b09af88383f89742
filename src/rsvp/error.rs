use crate::tools::email::Error as EmailError;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum RelayError {
    #[error("Missing sender mailbox")]
    MissingSenderMailbox,
    #[error("Missing sender password")]
    MissingSenderPassword,
    #[error("Missing receiver address")]
    MissingReceiverAddress,
    #[error("Malformed submission")]
    MalformedSubmission,
    #[error(transparent)]
    Email(#[from] EmailError),
}
