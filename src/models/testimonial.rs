use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: usize,
    pub username: String,
    pub country: String,
    pub service: String,
    pub testimonial: String,
    pub stars: i64,
    pub initials: String,
}
