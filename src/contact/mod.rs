pub mod client_ip;
pub mod parser;

use chrono::{Local, NaiveDate};

use crate::email::templates;
use crate::email::{MailError, Mailer, OutgoingEmail};
use crate::models::ContactSubmission;

/// Render the notification for a submission. Replies go straight to the submitter.
pub fn compose(
    recipient: &str,
    submission: &ContactSubmission,
    sent_on: NaiveDate,
) -> Result<OutgoingEmail, MailError> {
    let html_body = templates::render_contact(submission, &sent_on.format("%-m/%-d/%Y").to_string())
        .map_err(|e| MailError::Build(e.to_string()))?;

    let reply_to = Some(submission.email.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Ok(OutgoingEmail {
        to: recipient.to_string(),
        reply_to,
        subject: templates::contact_subject(submission),
        html_body,
    })
}

/// Compose and deliver a submission to the site owner.
pub async fn relay(
    mailer: &dyn Mailer,
    recipient: &str,
    submission: &ContactSubmission,
) -> Result<(), MailError> {
    let email = compose(recipient, submission, Local::now().date_naive())?;
    mailer.send(&email).await
}
