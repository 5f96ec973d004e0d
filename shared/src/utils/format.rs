//! Number formatting helpers

/// Format an integer with comma thousands separators (e.g. `7500000`
/// becomes `"7,500,000"`)
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render a sum-assured band as `"{min} - {max}"` with separators
pub fn format_amount_range(min: i64, max: i64) -> String {
    format!("{} - {}", format_thousands(min), format_thousands(max))
}
