use regex::Regex;

lazy_static! {
    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"(\d+)(st|nd|rd|th)").unwrap();
}

pub fn to_lower(value: &str) -> String {
    value.to_lowercase()
}

/// Full-string integer parse, 0 when the input is not a number.
pub fn string_to_int(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

/// Strips ordinal suffixes directly following digits, e.g.
/// `January 1st 2023` -> `January 1 2023`.
pub fn remove_ordinal_suffix(date_str: &str) -> String {
    ORDINAL_SUFFIX.replace_all(date_str, "$1").into_owned()
}

/// Replaces the middle of a token with `...`, keeping the first 5 and last 5
/// characters. Tokens of 10 characters or fewer are returned unchanged.
pub fn obscure_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 10 {
        return token.to_string();
    }
    let left: String = chars[..5].iter().collect();
    let right: String = chars[chars.len() - 5..].iter().collect();
    format!("{left}...{right}")
}
