//! Formatting utilities used for CLI and report outputs.

/// Format a number the way the reports have always shown them: `.` as the
/// thousands separator, `,` as the decimal mark, at most two fraction
/// digits, trailing zeros dropped. `1234.5` → `"1.234,5"`.
pub fn format_number(v: f64) -> String {
    let rounded = format!("{:.2}", v);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    let (int_part, frac) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    match frac {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Like `format_number`, with "-" for an absent value.
pub fn format_opt_number(v: Option<f64>) -> String {
    match v {
        Some(v) => format_number(v),
        None => "-".to_string(),
    }
}

/// Shortened record id for table display.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
