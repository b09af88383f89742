use crate::tools::email::Error::{CantConnectToSmtpServer, CantSendMessage};
use crate::tools::log_message_and_return;
use mail_send::SmtpClientBuilder;
use mail_send::mail_builder::MessageBuilder;
use thiserror::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

const SENDER_NAME: &str = "Wedding RSVP";

/// Seam between the RSVP flow and the actual mail transport,
/// so that tests can record sends or make them fail.
#[rocket::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, subject: &str, text_body: &str) -> Result<()>;
}

/// Production mailer: one authenticated SMTP session per send,
/// always addressed from the configured mailbox to the configured receiver.
pub struct SmtpMailer {
    smtp_server: String,
    smtp_port: u16,
    login: String,
    password: String,
    sender_address: String,
    receiver_address: String,
}

impl SmtpMailer {
    pub fn new(
        smtp_server: String,
        smtp_port: u16,
        login: String,
        password: String,
        sender_address: String,
        receiver_address: String,
    ) -> Self {
        Self {
            smtp_server,
            smtp_port,
            login,
            password,
            sender_address,
            receiver_address,
        }
    }

    async fn create_smtp_client_and_send_email(&self, message: MessageBuilder<'_>) -> Result<()> {
        let smtp_client = SmtpClientBuilder::new(self.smtp_server.clone(), self.smtp_port)
            .implicit_tls(false)
            .credentials((self.login.clone(), self.password.clone()))
            .connect()
            .await;

        smtp_client
            .map_err(log_message_and_return(
                "Couldn't connect to SMTP server",
                CantConnectToSmtpServer,
            ))?
            .send(message)
            .await
            .map_err(log_message_and_return(
                "Couldn't send message",
                CantSendMessage,
            ))
    }
}

#[rocket::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, text_body: &str) -> Result<()> {
        let message = create_message(
            &self.sender_address,
            &self.receiver_address,
            subject,
            text_body,
        );
        self.create_smtp_client_and_send_email(message).await
    }
}

fn create_message<'a>(
    sender_address: &'a str,
    receiver_address: &'a str,
    subject: &'a str,
    text_body: &'a str,
) -> MessageBuilder<'a> {
    MessageBuilder::new()
        .from((SENDER_NAME, sender_address))
        .to(receiver_address)
        .subject(subject)
        .text_body(text_body)
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Can't connect to SMTP server")]
    CantConnectToSmtpServer,
    #[error("Can't send message")]
    CantSendMessage,
}
