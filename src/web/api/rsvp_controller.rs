use crate::rsvp::error::RelayError;
use crate::rsvp::error::RelayError::MalformedSubmission;
use crate::rsvp::notification::relay_submission;
use crate::tools::email::Mailer;
use crate::tools::log_message_and_return;
use dto::acknowledgement::Acknowledgement;
use dto::rsvp_submission::RsvpSubmission;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Relay one submission as an email and report the outcome.
/// The payload is parsed here rather than by a data guard so that a
/// malformed body funnels into the same opaque failure as a failed send:
/// the caller only ever learns success or failure, the cause is logged.
#[post("/rsvp", format = "application/json", data = "<payload>")]
pub async fn submit_rsvp(
    mailer: &State<Box<dyn Mailer>>,
    payload: String,
) -> (Status, Json<Acknowledgement>) {
    match parse_and_relay(mailer.inner().as_ref(), &payload).await {
        Ok(()) => (Status::Ok, Json(Acknowledgement::new(true))),
        Err(_) => (Status::InternalServerError, Json(Acknowledgement::new(false))),
    }
}

async fn parse_and_relay(mailer: &dyn Mailer, payload: &str) -> Result<(), RelayError> {
    let submission: RsvpSubmission = serde_json::from_str(payload).map_err(
        log_message_and_return("Couldn't parse RSVP submission", MalformedSubmission),
    )?;

    relay_submission(mailer, &submission).await
}

#[cfg(test)]
mod tests {
    use crate::tools::email::Error::CantSendMessage;
    use crate::tools::email::{Error as EmailError, Mailer};
    use std::sync::{Arc, Mutex};

    pub struct FakeMailer {
        pub sent: Arc<Mutex<Vec<(String, String)>>>,
        pub fail: bool,
    }

    impl FakeMailer {
        pub fn new(fail: bool) -> (Self, Arc<Mutex<Vec<(String, String)>>>) {
            let sent = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    sent: sent.clone(),
                    fail,
                },
                sent,
            )
        }
    }

    #[rocket::async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, subject: &str, text_body: &str) -> Result<(), EmailError> {
            self.sent
                .lock()
                .unwrap()
                .push((subject.to_owned(), text_body.to_owned()));
            if self.fail {
                Err(CantSendMessage)
            } else {
                Ok(())
            }
        }
    }

    mod submit_rsvp {
        use crate::rsvp::notification::RSVP_SUBJECT;
        use crate::tools::email::Mailer;
        use crate::web::api::rsvp_controller::submit_rsvp;
        use crate::web::api::rsvp_controller::tests::FakeMailer;
        use dto::acknowledgement::Acknowledgement;
        use rocket::http::{ContentType, Status};
        use rocket::local::asynchronous::Client;
        use rocket::serde::json::json;

        async fn client(fail: bool) -> (Client, std::sync::Arc<std::sync::Mutex<Vec<(String, String)>>>) {
            let (mailer, sent) = FakeMailer::new(fail);
            let rocket = rocket::build()
                .manage(Box::new(mailer) as Box<dyn Mailer>)
                .mount("/api/", routes![submit_rsvp]);

            (Client::tracked(rocket).await.unwrap(), sent)
        }

        #[async_test]
        async fn success() {
            let (client, sent) = client(false).await;

            let response = client
                .post("/api/rsvp")
                .header(ContentType::JSON)
                .body(
                    json!({
                        "name": "Jane Doe",
                        "email": "jane@example.com",
                        "message": "Can't wait!"
                    })
                    .to_string(),
                )
                .dispatch()
                .await;

            assert_eq!(Status::Ok, response.status());
            let acknowledgement: Acknowledgement = response.into_json().await.unwrap();
            assert_eq!(Acknowledgement::new(true), acknowledgement);

            let sent = sent.lock().unwrap();
            assert_eq!(1, sent.len());
            let (subject, body) = &sent[0];
            assert_eq!(RSVP_SUBJECT, subject);
            assert_eq!("Name: Jane Doe\nEmail: jane@example.com\nMessage: Can't wait!", body);
        }

        #[async_test]
        async fn success_with_absent_fields() {
            let (client, sent) = client(false).await;

            let response = client
                .post("/api/rsvp")
                .header(ContentType::JSON)
                .body(json!({"name": "Jane Doe"}).to_string())
                .dispatch()
                .await;

            assert_eq!(Status::Ok, response.status());
            let acknowledgement: Acknowledgement = response.into_json().await.unwrap();
            assert_eq!(Acknowledgement::new(true), acknowledgement);

            let sent = sent.lock().unwrap();
            assert_eq!(1, sent.len());
            let (_, body) = &sent[0];
            assert_eq!("Name: Jane Doe\nEmail: undefined\nMessage: undefined", body);
        }

        #[async_test]
        async fn failure_when_mail_send_fails() {
            let (client, sent) = client(true).await;

            let response = client
                .post("/api/rsvp")
                .header(ContentType::JSON)
                .body(json!({"name": "Jane Doe"}).to_string())
                .dispatch()
                .await;

            assert_eq!(Status::InternalServerError, response.status());
            let acknowledgement: Acknowledgement = response.into_json().await.unwrap();
            assert_eq!(Acknowledgement::new(false), acknowledgement);

            // a failed relay is never retried
            assert_eq!(1, sent.lock().unwrap().len());
        }

        #[async_test]
        async fn failure_when_payload_is_malformed() {
            let (client, sent) = client(false).await;

            let response = client
                .post("/api/rsvp")
                .header(ContentType::JSON)
                .body("this is not json")
                .dispatch()
                .await;

            assert_eq!(Status::InternalServerError, response.status());
            let acknowledgement: Acknowledgement = response.into_json().await.unwrap();
            assert_eq!(Acknowledgement::new(false), acknowledgement);

            assert!(sent.lock().unwrap().is_empty());
        }
    }
}
