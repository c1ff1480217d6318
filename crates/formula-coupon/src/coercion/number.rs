use super::ValueLocaleConfig;

/// Numeric conversion of text with JavaScript unary-plus semantics.
///
/// Surrounding whitespace is ignored and empty text is `0`. Accepts signed decimal literals with
/// an optional exponent, `Infinity`, and unsigned `0x`/`0o`/`0b` integer literals. Anything else
/// is `NaN`.
pub(crate) fn text_to_number_js(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    match unsigned.parse::<f64>() {
        Ok(n) => sign * n,
        Err(_) => f64::NAN,
    }
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    let mut acc = 0.0f64;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(radix) else {
            return Some(f64::NAN);
        };
        acc = acc * f64::from(radix) + f64::from(d);
    }
    Some(acc)
}

/// `digits [. digits] [e [+-] digits]`, with at least one mantissa digit on either side of the dot.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

/// Locale-aware parse of numeric cell text (`"1,234.5"`, `"12%"`).
///
/// Returns `None` when the text is not a plain number so callers can try other interpretations
/// (e.g. dates).
pub(crate) fn parse_number_text(text: &str, locale: ValueLocaleConfig) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    let (s, scale) = match s.strip_suffix('%') {
        Some(rest) => (rest.trim_end(), 0.01),
        None => (s, 1.0),
    };

    let mut normalized = String::with_capacity(s.len());
    let mut seen_decimal = false;
    for (idx, ch) in s.char_indices() {
        if ch == locale.group_separator && !seen_decimal {
            // Group separators follow a digit and precede exactly three digits.
            let prev_digit = s[..idx].chars().next_back().is_some_and(|c| c.is_ascii_digit());
            let rest = &s[idx + ch.len_utf8()..];
            let group_len = rest.chars().take_while(char::is_ascii_digit).count();
            if !prev_digit || group_len != 3 {
                return None;
            }
            continue;
        }
        if ch == locale.decimal_separator {
            if seen_decimal {
                return None;
            }
            seen_decimal = true;
            normalized.push('.');
            continue;
        }
        normalized.push(ch);
    }

    let (sign, unsigned) = match normalized.as_bytes().first() {
        Some(b'+') => (1.0, &normalized[1..]),
        Some(b'-') => (-1.0, &normalized[1..]),
        _ => (1.0, normalized.as_str()),
    };
    if !is_decimal_literal(unsigned) {
        return None;
    }
    let n = unsigned.parse::<f64>().ok()? * sign * scale;
    n.is_finite().then_some(n)
}
