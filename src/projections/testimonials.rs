use crate::models::Testimonial;
use crate::sheets::Sheet;

pub const DEFAULT_STARS: i64 = 5;

/// Rows without a username are dropped; surviving rows keep their original offset as id.
pub fn project(sheet: &Sheet) -> Vec<Testimonial> {
    sheet
        .data_rows()
        .filter(|(_, row)| !row.cell(0).is_empty())
        .map(|(id, row)| {
            let username = row.cell(0);
            Testimonial {
                id,
                username: username.to_string(),
                country: row.cell(1).to_string(),
                service: row.cell(2).to_string(),
                testimonial: row.cell(3).to_string(),
                stars: stars(row.cell(4)),
                initials: initials(username),
            }
        })
        .collect()
}

/// Leading-integer parse of the rating cell; unparseable or zero falls back to five.
pub fn stars(cell: &str) -> i64 {
    match leading_integer(cell) {
        Some(0) | None => DEFAULT_STARS,
        Some(n) => n,
    }
}

pub fn initials(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

// "4 stars" -> 4, "4.5" -> 4, " -2" -> -2, "five" -> None
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}
