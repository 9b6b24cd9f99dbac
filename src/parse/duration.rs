//! Human-readable duration parsing
//!
//! The console renders delay and collection-interval cells as free-form
//! strings like `"1h30m"`, `"45s"` or `"2d 4h"`. Everything is normalized
//! to seconds before it is exported.

/// Convert a free-form duration string into seconds.
///
/// Accepts any number of `<number><unit>` tokens with optional whitespace
/// between the number and its unit; units are `s`, `m`, `h`, `d`
/// (case-insensitive) and token values are summed, so ordering is
/// irrelevant. A digit run with no trailing unit letter counts as bare
/// seconds. Text that yields no tokens converts to 0.0; this function
/// never fails.
pub fn parse_duration_seconds(text: &str) -> f64 {
    let mut total = 0.0;
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            chars.next();
            continue;
        }

        // Consume the digit run, with at most one decimal point
        let mut end = start;
        let mut seen_dot = false;
        while let Some(&(i, c)) = chars.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                end = i + c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let Ok(value) = text[start..end].parse::<f64>() else {
            continue;
        };

        // Optional whitespace between the number and its unit
        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }

        let multiplier = match chars.peek().map(|&(_, c)| c.to_ascii_lowercase()) {
            Some('s') => {
                chars.next();
                1.0
            }
            Some('m') => {
                chars.next();
                60.0
            }
            Some('h') => {
                chars.next();
                3600.0
            }
            Some('d') => {
                chars.next();
                86400.0
            }
            // Bare number: seconds
            _ => 1.0,
        };

        total += value * multiplier;
    }

    total
}
