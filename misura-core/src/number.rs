//! Lenient numeric parsing and display formatting
//!
//! The converter UI never shows an error for bad input: an unparseable
//! quantity reads as zero, and results render with a magnitude-dependent
//! fixed precision. Both behaviors live here so every caller degrades the
//! same way.

/// Parse the longest leading numeric prefix of `s`.
///
/// Returns `None` when no prefix parses. `"3.5 cups"` yields 3.5,
/// `"abc"` yields `None`. Scientific notation is accepted ("1.5e2").
pub fn try_parse_loose(s: &str) -> Option<f64> {
    let s = s.trim_start();

    // Longest run of characters that can appear in a float literal.
    let end = s
        .char_indices()
        .take_while(|&(_, c)| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    // The run may end mid-literal ("3.5e"); shrink until it parses.
    let mut prefix = &s[..end];
    while !prefix.is_empty() {
        if let Ok(v) = prefix.parse::<f64>() {
            return Some(v);
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    None
}

/// Like [`try_parse_loose`], with unparseable input reading as 0.0.
pub fn parse_loose(s: &str) -> f64 {
    try_parse_loose(s).unwrap_or(0.0)
}

/// Render a conversion result with magnitude-dependent precision.
///
/// Zero renders as the literal "0". Small magnitudes get more decimals so
/// conversions like tsp→gallon stay legible; large ones get fewer.
pub fn format_result(x: f64) -> String {
    if !x.is_finite() || x == 0.0 {
        return "0".to_string();
    }

    let magnitude = x.abs();
    if magnitude < 0.01 {
        format!("{:.4}", x)
    } else if magnitude < 1.0 {
        format!("{:.3}", x)
    } else if magnitude < 100.0 {
        format!("{:.2}", x)
    } else {
        format!("{:.1}", x)
    }
}
