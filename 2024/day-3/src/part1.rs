use miette::*;

/// Parses the argument list of a `mul(` already stripped from the front of
/// `s`: `a,b)` with 1-3 digit operands. Returns the product and the rest of
/// the string after the closing parenthesis.
pub(crate) fn mul_args(s: &str) -> Option<(u64, &str)> {
    let close = s.find(')')?;
    let body = &s[..close];
    let (a, b) = body.split_once(',')?;

    let operand = |digits: &str| -> Option<u64> {
        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    };

    Some((operand(a)? * operand(b)?, &s[close + 1..]))
}

/// Scans the corrupted memory for `mul` instructions, honoring the
/// `do()` / `don't()` toggles only when asked to.
pub(crate) fn scan(input: &str, honor_toggles: bool) -> u64 {
    let mut rest = input;
    let mut enabled = true;
    let mut sum = 0;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("do()") {
            enabled = true;
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix("don't()") {
            enabled = false;
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix("mul(") {
            if let Some((product, remaining)) = mul_args(after) {
                if enabled || !honor_toggles {
                    sum += product;
                }
                rest = remaining;
                continue;
            }
            // A malformed mul( still advances past the keyword so nested
            // instructions inside its garbage are found.
            rest = after;
            continue;
        }
        rest = &rest[rest.chars().next().map_or(1, char::len_utf8)..];
    }

    sum
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(scan(input, false).to_string())
}
