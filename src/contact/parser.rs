use serde_json::{Map, Value};

use crate::models::ContactSubmission;

/// How the contact form encoded its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
    /// `fetch(..., { mode: "no-cors" })` relabels JSON as `text/plain`, so look at the bytes.
    Sniff,
}

impl BodyFormat {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(ct) = content_type else {
            return BodyFormat::Json;
        };
        let mime = ct.split(';').next().unwrap_or("").trim();
        if mime.eq_ignore_ascii_case("application/json") {
            BodyFormat::Json
        } else if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            BodyFormat::Form
        } else {
            BodyFormat::Sniff
        }
    }
}

/// Decode a contact-form body into a submission. Only the shape is checked, never the fields.
pub fn parse_submission(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ContactSubmission, String> {
    let format = match BodyFormat::from_content_type(content_type) {
        BodyFormat::Sniff if looks_like_json(body) => BodyFormat::Json,
        BodyFormat::Sniff => BodyFormat::Form,
        known => known,
    };

    let fields = match format {
        BodyFormat::Json => {
            serde_json::from_slice::<Value>(body).map_err(|e| format!("Invalid JSON: {e}"))?
        }
        _ => form_fields(body)?,
    };

    if !fields.is_object() {
        return Err("Expected a JSON object".to_string());
    }

    Ok(ContactSubmission::from_value(&fields))
}

fn looks_like_json(body: &[u8]) -> bool {
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| matches!(b, b'{' | b'['))
}

fn form_fields(body: &[u8]) -> Result<Value, String> {
    std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    // Repeated keys keep their first value, like the JSON decoder keeps one per field
    let mut fields = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        fields
            .entry(k.into_owned())
            .or_insert_with(|| Value::String(v.into_owned()));
    }
    Ok(Value::Object(fields))
}
