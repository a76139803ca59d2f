//! Named renderers applied with `${token;renderer(args)}`.

use super::TokenValue;
use std::fmt::Write;
use unicode_normalization::UnicodeNormalization;

/// Formats a token value, given the renderer arguments.
pub type Renderer = fn(&TokenValue, Option<&str>) -> String;

pub(crate) fn builtin() -> Vec<(&'static str, Renderer)> {
    vec![
        ("upper", upper),
        ("lower", lower),
        ("first", first),
        ("number", number),
        ("date", date),
    ]
}

fn upper(value: &TokenValue, _args: Option<&str>) -> String {
    value.to_string().to_uppercase()
}

fn lower(value: &TokenValue, _args: Option<&str>) -> String {
    value.to_string().to_lowercase()
}

fn first(value: &TokenValue, _args: Option<&str>) -> String {
    first_character(&value.to_string())
}

fn number(value: &TokenValue, args: Option<&str>) -> String {
    let n = match value {
        TokenValue::Number(n) => *n,
        TokenValue::Text(text) => match text.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => return text.clone(),
        },
        other => return other.to_string(),
    };
    format_number(n, args.unwrap_or("%d"))
}

fn date(value: &TokenValue, args: Option<&str>) -> String {
    let TokenValue::Date(date) = value else {
        return value.to_string();
    };
    let Some(datetime) = date.and_hms_opt(0, 0, 0) else {
        return value.to_string();
    };

    let format = java_date_format(args.unwrap_or("yyyy-MM-dd"));
    let mut out = String::new();
    if write!(out, "{}", datetime.format(&format)).is_err() {
        tracing::warn!(pattern = args, "unusable date pattern");
        return String::new();
    }
    out
}

/// Upper-cased first letter with diacritics removed, `#` for anything that
/// does not start with a letter.
///
/// ```
/// use showforged::template::first_character;
///
/// assert_eq!(first_character("Ärger"), "A");
/// assert_eq!(first_character("the wire"), "T");
/// assert_eq!(first_character("24"), "#");
/// ```
pub fn first_character(text: &str) -> String {
    let Some(c) = text.trim_start().chars().next() else {
        return String::new();
    };
    match std::iter::once(c).nfd().next() {
        Some(base) if base.is_alphabetic() => base.to_uppercase().collect(),
        _ => "#".to_string(),
    }
}

/// Widest padding a number pattern may ask for.
const MAX_NUMBER_WIDTH: usize = 10;

/// Format a number with a printf style `%0Nd` / `%Nd` / `%d` pattern.
///
/// A width above 10 is ignored and the plain number is returned.
pub(crate) fn format_number(n: i64, pattern: &str) -> String {
    let spec = pattern.trim().trim_start_matches('%').trim_end_matches('d');
    let zero_pad = spec.starts_with('0');
    let width: usize = match spec.trim_start_matches('0') {
        "" => 0,
        digits => match digits.parse() {
            Ok(width) if width <= MAX_NUMBER_WIDTH => width,
            _ => return n.to_string(),
        },
    };

    if zero_pad {
        format!("{:0width$}", n, width = width)
    } else {
        format!("{:>width$}", n, width = width)
    }
}

/// Translate a `yyyy-MM-dd` style date pattern into a chrono format string.
///
/// Supported letters: `y`, `M`, `d`, `E`, `H`, `m`, `s`. Text in single quotes
/// is literal, `''` is a quote. Other letters are kept as they are.
pub(crate) fn java_date_format(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        let spec = match (c, run) {
            ('y', 2) => "%y",
            ('y', _) => "%Y",
            ('M', 1) => "%-m",
            ('M', 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', 1) => "%-d",
            ('d', _) => "%d",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            ('H', 1) => "%-H",
            ('H', _) => "%H",
            ('m', 1) => "%-M",
            ('m', _) => "%M",
            ('s', 1) => "%-S",
            ('s', _) => "%S",
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
                ""
            }
        };
        out.push_str(spec);
        i += run;
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aired() -> TokenValue {
        TokenValue::Date(NaiveDate::from_ymd_opt(2009, 3, 7).unwrap())
    }

    #[test]
    fn test_java_date_format() {
        assert_eq!(java_date_format("yyyy-MM-dd"), "%Y-%m-%d");
        assert_eq!(java_date_format("dd.MM.yy"), "%d.%m.%y");
        assert_eq!(java_date_format("d MMMM yyyy"), "%-d %B %Y");
        assert_eq!(java_date_format("EEE 'at' HH:mm"), "%a at %H:%M");
        assert_eq!(java_date_format("yyyy'%'"), "%Y%%");
        assert_eq!(java_date_format("''yy''"), "'%y'");
    }

    #[test]
    fn test_date_renderer() {
        assert_eq!(date(&aired(), Some("yyyy-MM-dd")), "2009-03-07");
        assert_eq!(date(&aired(), Some("d. MMMM yyyy")), "7. March 2009");
        assert_eq!(date(&aired(), None), "2009-03-07");
        assert_eq!(date(&TokenValue::Empty, Some("yyyy")), "");
        assert_eq!(date(&TokenValue::text("x"), Some("yyyy")), "x");
    }

    #[test]
    fn test_number_renderer() {
        assert_eq!(number(&TokenValue::Number(3), Some("%02d")), "03");
        assert_eq!(number(&TokenValue::Number(3), Some("%03d")), "003");
        assert_eq!(number(&TokenValue::Number(123), Some("%02d")), "123");
        assert_eq!(number(&TokenValue::Number(3), Some("%3d")), "  3");
        assert_eq!(number(&TokenValue::text("07"), Some("%d")), "7");
        assert_eq!(number(&TokenValue::text("pilot"), Some("%02d")), "pilot");
        assert_eq!(number(&TokenValue::Empty, Some("%02d")), "");
        assert_eq!(number(&TokenValue::Number(5), Some("bogus")), "5");
    }

    #[test]
    fn test_number_width_is_capped() {
        assert_eq!(
            number(&TokenValue::Number(7), Some("%010d")),
            "0000000007"
        );
        assert_eq!(number(&TokenValue::Number(7), Some("%011d")), "7");
        assert_eq!(number(&TokenValue::Number(7), Some("%0999999999d")), "7");
        assert_eq!(
            number(&TokenValue::Number(7), Some("%99999999999999999999999d")),
            "7"
        );
    }

    #[test]
    fn test_case_renderers() {
        assert_eq!(upper(&TokenValue::text("Pilot"), None), "PILOT");
        assert_eq!(lower(&TokenValue::text("Pilot"), None), "pilot");
        assert_eq!(first(&TokenValue::text("Über"), None), "U");
        assert_eq!(first(&TokenValue::Empty, None), "");
    }
}
