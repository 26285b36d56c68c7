//! Display formatting for raw numeric and date values.
//!
//! Every panel formats through these helpers rather than rolling its own,
//! so the suffix ladder and sign conventions stay consistent across tabs.

/// Placeholder shown for absent optional fields.
pub const NA: &str = "N/A";

/// Formats a value with the magnitude suffix ladder.
///
/// Values at or above 1e12 get "T", 1e9 "B", 1e6 "M", 1e3 "K"; anything
/// smaller is printed literally. Always two decimal places. The sign is
/// preserved, thresholds apply to the absolute value.
pub fn format_magnitude(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if magnitude >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

/// Formats a percentage with a forced leading `+` for non-negative values.
///
/// Used for price changes, where the explicit sign carries meaning.
pub fn format_signed_pct(value: f64) -> String {
    format!("{value:+.2}%")
}

/// Formats a percentage without a forced sign (confidence, ratios).
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Formats a price in dollars with two decimal places.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// Truncates free text to `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-glyph.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Fits text into a fixed display width: cuts on a column boundary and pads
/// with spaces. East-Asian wide glyphs count as two columns, so table
/// columns stay aligned for non-Latin names.
pub fn fit_width(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    for _ in used..width {
        out.push(' ');
    }
    out
}

/// Reduces an ISO-8601 timestamp to `YYYY-MM-DD HH:MM` for display.
///
/// Timestamps arrive from the backend as strings and are never parsed into
/// real date types; anything shorter than expected is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    if raw.as_bytes().get(10) == Some(&b'T')
        && let (Some(date), Some(time)) = (raw.get(..10), raw.get(11..16))
    {
        return format!("{date} {time}");
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_ladder() {
        assert_eq!(format_magnitude(1_500_000.0), "1.50M");
        assert_eq!(format_magnitude(2_300_000_000.0), "2.30B");
        assert_eq!(format_magnitude(4_200_000_000_000.0), "4.20T");
        assert_eq!(format_magnitude(12_500.0), "12.50K");
        assert_eq!(format_magnitude(999.0), "999.00");
        assert_eq!(format_magnitude(0.0), "0.00");
    }

    #[test]
    fn magnitude_keeps_sign() {
        assert_eq!(format_magnitude(-1_500_000.0), "-1.50M");
        assert_eq!(format_magnitude(-999.0), "-999.00");
    }

    #[test]
    fn signed_pct_forces_plus() {
        assert_eq!(format_signed_pct(1.567), "+1.57%");
        assert_eq!(format_signed_pct(0.0), "+0.00%");
        assert_eq!(format_signed_pct(-0.68), "-0.68%");
    }

    #[test]
    fn unsigned_pct_has_no_forced_sign() {
        assert_eq!(format_pct(87.0), "87.00%");
        assert_eq!(format_pct(-3.2), "-3.20%");
    }

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(182.5), "$182.50");
    }

    #[test]
    fn truncate_only_when_over_budget() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a rather long headline", 8), "a rather...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // Each character below is multi-byte in UTF-8.
        assert_eq!(truncate("日本経済新聞", 3), "日本経...");
    }

    #[test]
    fn fit_width_pads_and_cuts_on_columns() {
        assert_eq!(fit_width("AAPL", 6), "AAPL  ");
        assert_eq!(fit_width("Technology", 6), "Techno");
        // Wide glyphs take two columns; an odd budget cannot split one.
        assert_eq!(fit_width("日本経済", 5), "日本 ");
    }

    #[test]
    fn timestamp_trimmed_for_display() {
        assert_eq!(
            format_timestamp("2026-08-23T14:30:22.123456"),
            "2026-08-23 14:30"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
