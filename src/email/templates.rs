use askama::Template;

use crate::models::ContactSubmission;

/// Notification sent to the site owner for each contact-form submission.
/// Every field is HTML-escaped by askama.
#[derive(Template)]
#[template(path = "contact_email.html")]
pub struct ContactEmailTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub project_type: &'a str,
    pub timeline: &'a str,
    pub budget: &'a str,
    pub message: &'a str,
    pub sent_on: &'a str,
}

pub fn render_contact(submission: &ContactSubmission, sent_on: &str) -> Result<String, askama::Error> {
    ContactEmailTemplate {
        name: &submission.name,
        email: &submission.email,
        project_type: submission.project_type_or_placeholder(),
        timeline: submission.timeline_or_placeholder(),
        budget: submission.budget_or_placeholder(),
        message: &submission.message,
        sent_on,
    }
    .render()
}

pub fn contact_subject(submission: &ContactSubmission) -> String {
    format!("New message from {}", submission.name)
}
