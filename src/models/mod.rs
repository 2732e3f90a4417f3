pub mod faq;
pub mod project;
pub mod requirements;
pub mod submission;
pub mod testimonial;

pub use faq::{AnswerBlock, Faq};
pub use project::Project;
pub use requirements::RequirementOptions;
pub use submission::ContactSubmission;
pub use testimonial::Testimonial;
