pub mod answer;
pub mod faqs;
pub mod projects;
pub mod requirements;
pub mod testimonials;

use serde::Serialize;

use crate::models::{Faq, Project, RequirementOptions, Testimonial};
use crate::sheets::{SheetStore, StoreError};

/// A read projection selected by the `action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Projects,
    Testimonials,
    Faqs,
    Requirements,
}

impl Action {
    pub fn from_param(action: &str) -> Option<Self> {
        match action {
            "getProjects" => Some(Action::Projects),
            "getTestimonials" => Some(Action::Testimonials),
            "getFAQs" => Some(Action::Faqs),
            "getRequirements" => Some(Action::Requirements),
            _ => None,
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            Action::Projects => "Project",
            Action::Testimonials => "Client Testimonials",
            Action::Faqs => "FAQ",
            Action::Requirements => "Project Requirements",
        }
    }
}

/// Response document of a read action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Projects(Vec<Project>),
    Testimonials(Vec<Testimonial>),
    Faqs(Vec<Faq>),
    Requirements(RequirementOptions),
    MissingSheet { error: String },
}

/// Load the action's sheet and project it. A missing sheet is a payload, not an error.
pub async fn run(store: &dyn SheetStore, action: Action) -> Result<Payload, StoreError> {
    let name = action.sheet_name();

    let Some(sheet) = store.sheet(name).await? else {
        tracing::warn!("Sheet '{name}' not found");
        return Ok(Payload::MissingSheet {
            error: format!("Sheet '{name}' not found"),
        });
    };

    let payload = match action {
        Action::Projects => Payload::Projects(projects::project(&sheet)),
        Action::Testimonials => Payload::Testimonials(testimonials::project(&sheet)),
        Action::Faqs => Payload::Faqs(faqs::project(&sheet)),
        Action::Requirements => Payload::Requirements(requirements::project(&sheet)),
    };

    Ok(payload)
}
