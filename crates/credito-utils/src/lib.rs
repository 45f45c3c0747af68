//! Utility functions and helpers

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut result = String::new();
    let mut count = 0;
    for c in int_part.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let mut out: String = result.chars().rev().collect();
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    format!("{}{}", sign, out)
}

/// Column width for sheet autofit: widest cell plus two characters of padding
pub fn column_width<'a, I: IntoIterator<Item = &'a str>>(cells: I) -> usize {
    cells
        .into_iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        + 2
}

/// Normalize a sheet header: trim whitespace, capitalize the first letter,
/// lowercase the rest
pub fn capitalize_header(header: &str) -> String {
    let trimmed = header.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
