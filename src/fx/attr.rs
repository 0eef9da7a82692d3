//! Lenient parsing of `data-*` attribute values
//!
//! Markup authors write things like `data-counter="250+"` or
//! `data-parallax="0.2x"`; only the leading numeric part counts.

/// Leading integer of `s`: optional whitespace, optional sign, digits.
/// Returns `None` when no digit follows.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    // Saturate on absurdly long digit runs instead of failing
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading float of `s`, in the spirit of `parseFloat`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate_len = s
        .char_indices()
        .take_while(|&(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    // Longest prefix that forms a valid number wins
    (1..=candidate_len)
        .rev()
        .filter(|&end| s.is_char_boundary(end))
        .find_map(|end| s[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Phrase list from a `data-typing` / `data-scramble` JSON array.
/// Blank entries are dropped.
pub fn parse_phrases(s: &str) -> Result<Vec<String>, serde_json::Error> {
    let phrases: Vec<String> = serde_json::from_str(s)?;
    Ok(phrases.into_iter().filter(|p| !p.trim().is_empty()).collect())
}
