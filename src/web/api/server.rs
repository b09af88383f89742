use crate::rsvp::config::RelayConfig;
use crate::tools::email::{Mailer, SmtpMailer};
use crate::web::api::rsvp_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let relay_config = match RelayConfig::from_env() {
            Ok(config) => config,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };
        let mailer: Box<dyn Mailer> = Box::new(build_mailer(&relay_config));

        rocket_build
            .manage(mailer)
            .mount("/api/", routes![rsvp_controller::submit_rsvp])
    }
}

fn build_mailer(config: &RelayConfig) -> SmtpMailer {
    SmtpMailer::new(
        config.smtp_server().to_owned(),
        *config.smtp_port(),
        config.sender_mailbox().to_owned(),
        config.sender_password().to_owned(),
        config.sender_mailbox().to_owned(),
        config.receiver_address().to_owned(),
    )
}
