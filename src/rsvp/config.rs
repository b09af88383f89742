use crate::rsvp::error::RelayError;
use crate::rsvp::error::RelayError::{
    MissingReceiverAddress, MissingSenderMailbox, MissingSenderPassword,
};
use crate::tools::env_vars::{retrieve_env_var, retrieve_expected_env_var};
use derive_getters::Getters;

pub const EMAIL_USER_ENV_VAR: &str = "EMAIL_USER";
pub const EMAIL_PASS_ENV_VAR: &str = "EMAIL_PASS";
pub const EMAIL_RECEIVER_ENV_VAR: &str = "EMAIL_RECEIVER";
const SMTP_SERVER_ENV_VAR: &str = "SMTP_SERVER";
const SMTP_PORT_ENV_VAR: &str = "SMTP_PORT";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Everything the relay needs to hand a submission to the mail provider.
/// Read from the environment once at startup; requests never touch
/// the environment themselves.
#[derive(Getters, Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    sender_mailbox: String,
    sender_password: String,
    receiver_address: String,
    smtp_server: String,
    smtp_port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Ok(Self {
            sender_mailbox: retrieve_expected_env_var(EMAIL_USER_ENV_VAR, MissingSenderMailbox)?,
            sender_password: retrieve_expected_env_var(EMAIL_PASS_ENV_VAR, MissingSenderPassword)?,
            receiver_address: retrieve_expected_env_var(
                EMAIL_RECEIVER_ENV_VAR,
                MissingReceiverAddress,
            )?,
            smtp_server: retrieve_smtp_server(),
            smtp_port: retrieve_smtp_port(),
        })
    }
}

fn retrieve_smtp_server() -> String {
    retrieve_env_var(SMTP_SERVER_ENV_VAR).unwrap_or(DEFAULT_SMTP_SERVER.to_owned())
}

fn retrieve_smtp_port() -> u16 {
    retrieve_env_var(SMTP_PORT_ENV_VAR)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SMTP_PORT)
}
