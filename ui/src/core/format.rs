//! Formatting helpers for header counts and axis tick labels.

/// Thousands grouping for the header tweet count: 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// SI-prefix tick labels with two significant digits: 950 -> "950",
/// 12000 -> "12k", 1500000 -> "1.5M". Non-finite values render as "0"
/// so a degenerate axis never panics.
pub fn format_si(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    const PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];
    let tier = ((value.abs().log10() / 3.0).floor() as i32).clamp(0, 4);
    let scaled = value / 10f64.powi(tier * 3);

    let rendered = if scaled.abs() >= 10.0 {
        format!("{scaled:.0}")
    } else {
        format!("{scaled:.1}")
    };
    let rendered = match rendered.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => rendered,
    };

    format!("{rendered}{}", PREFIXES[tier as usize])
}
