// Parsing and formatting helpers shared by the loader and the output layer.
use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;
use regex::Regex;

// Commas are only accepted as complete thousands groups: `1,234.5`, not `1,5`.
static GROUPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("thousands pattern is valid")
});

/// Trim and lower-case a header so `" Import "` matches `import`.
pub fn normalize_header(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Parse a string-like CSV cell into `f64`.
///
/// - Trims whitespace and strips thousands separators like `","`; any other
///   comma (`1,5`, `1,2,3`) makes the cell non-numeric.
/// - Accepts scientific notation (`1e3`) but rejects other text.
/// - Returns `None` for empty cells and for `NaN`/`inf`.
pub fn parse_number(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let v = if s.contains(',') {
        if !GROUPED.is_match(s) {
            return None;
        }
        s.replace(',', "").parse::<f64>().ok()?
    } else {
        s.parse::<f64>().ok()?
    };
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}

/// Turn a snake_case field name into a display title: `profit_margin` ->
/// `Profit Margin`.
pub fn column_title(field: &str) -> String {
    field
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus locale-aware thousands separators (`1,234,567.89`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Beyond u128 there is nothing sensible to group; show the digits as-is.
    let mut res = match int_part.parse::<u128>() {
        Ok(v) => v.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}
