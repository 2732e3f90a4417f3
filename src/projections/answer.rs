use regex::Regex;
use std::sync::LazyLock;

use crate::models::AnswerBlock;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[•*-]\s|([0-9]+)\.\s)").unwrap());

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*\$").unwrap());

/// Split an FAQ answer into display blocks, one per non-blank line.
///
/// Lines are trimmed, then classified in order: list items (`•`, `-`, `*` or `N.` followed by
/// whitespace), price lines (`$…` or `N$…`), bold lines (`**…**`), and plain paragraphs.
pub fn format(answer: &str) -> Vec<AnswerBlock> {
    answer
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify)
        .collect()
}

fn classify(line: &str) -> AnswerBlock {
    if let Some(caps) = BULLET_RE.captures(line) {
        let marker = caps
            .get(1)
            .map(|n| n.as_str().to_string())
            .unwrap_or_else(|| "•".to_string());
        let prefix_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
        return AnswerBlock::Bullet {
            marker,
            text: line[prefix_len..].to_string(),
        };
    }

    if PRICE_RE.is_match(line) {
        return AnswerBlock::Price {
            text: line.to_string(),
        };
    }

    if line.starts_with("**") && line.ends_with("**") {
        return AnswerBlock::Bold {
            text: line.replace("**", ""),
        };
    }

    AnswerBlock::Paragraph {
        text: line.to_string(),
    }
}
