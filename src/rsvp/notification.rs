use crate::rsvp::error::RelayError;
use crate::tools::email::Mailer;
use dto::rsvp_submission::RsvpSubmission;

pub const RSVP_SUBJECT: &str = "New RSVP Submission";

/// Rendered in place of any field the form never filled in.
const ABSENT_FIELD: &str = "undefined";

/// One send attempt per submission. A failed relay is only ever retried
/// by the guest submitting the form again.
pub async fn relay_submission(
    mailer: &dyn Mailer,
    submission: &RsvpSubmission,
) -> Result<(), RelayError> {
    mailer
        .send(RSVP_SUBJECT, &compose_body(submission))
        .await?;

    Ok(())
}

pub fn compose_body(submission: &RsvpSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        field_or_absent(submission.name()),
        field_or_absent(submission.email()),
        field_or_absent(submission.message()),
    )
}

fn field_or_absent(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(ABSENT_FIELD)
}
