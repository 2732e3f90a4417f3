use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: usize,
    pub question: String,
    pub answer: String,
    pub blocks: Vec<AnswerBlock>,
}

/// One display line of an FAQ answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnswerBlock {
    /// `• item`, `- item`, `* item` or `3. item`; the marker is `•` or the number.
    Bullet { marker: String, text: String },
    /// A line starting with `$` or `<digits>$`.
    Price { text: String },
    /// A line wrapped in `**`.
    Bold { text: String },
    Paragraph { text: String },
}
