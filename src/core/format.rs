//! Duration formatting with adaptive precision.

/// Format a signed duration in seconds as a compact human string.
///
/// Precision adapts to magnitude: fractional milliseconds below 10ms, whole
/// milliseconds below one second, millisecond-precision seconds below one
/// minute, and an `h m s` decomposition above that. Zero is always `"0s"`.
pub fn format_duration(seconds: f64) -> String {
    if seconds == 0.0 {
        return "0s".to_string();
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let abs = seconds.abs();

    if abs < 0.01 {
        return format!("{sign}{:.2}ms", abs * 1000.0);
    }
    if abs < 1.0 {
        return format!("{sign}{}ms", (abs * 1000.0).round() as i64);
    }
    if abs < 60.0 {
        return format!("{sign}{abs:.3}s");
    }

    let hours = (abs / 3600.0).floor() as u64;
    let minutes = ((abs % 3600.0) / 60.0).floor() as u64;
    let rem = abs % 60.0;

    let mut parts: Vec<String> = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if rem > 1e-3 || (hours == 0 && minutes == 0) {
        // Coarser second precision once larger components are present.
        let sec = if hours > 0 || minutes > 0 {
            format!("{rem:.1}")
        } else {
            format!("{rem:.2}")
        };
        if sec.parse::<f64>().unwrap_or(0.0) > 0.0 {
            parts.push(format!("{sec}s"));
        }
    }

    if parts.is_empty() {
        return "0s".to_string();
    }

    format!("{sign}{}", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_centisecond_keeps_fraction() {
        assert_eq!(format_duration(0.005), "5.00ms");
        assert_eq!(format_duration(0.0001), "0.10ms");
    }

    #[test]
    fn test_sub_second_rounds_to_whole_ms() {
        assert_eq!(format_duration(0.5), "500ms");
        assert_eq!(format_duration(0.0996), "100ms");
    }

    #[test]
    fn test_seconds_keep_three_decimals() {
        assert_eq!(format_duration(1.234), "1.234s");
        assert_eq!(format_duration(59.999), "59.999s");
    }

    #[test]
    fn test_minute_decomposition() {
        assert_eq!(format_duration(3661.0), "1h 1m 1.0s");
        assert_eq!(format_duration(3600.0), "1h");
        assert_eq!(format_duration(61.0), "1m 1.0s");
        assert_eq!(format_duration(120.0), "2m");
    }

    #[test]
    fn test_zero_is_plain() {
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn test_negative_gets_sign_prefix() {
        assert_eq!(format_duration(-0.5), "-500ms");
        assert_eq!(format_duration(-1.234), "-1.234s");
        assert_eq!(format_duration(-3661.0), "-1h 1m 1.0s");
    }

    #[test]
    fn test_deterministic() {
        let first = format_duration(12.3456);
        let second = format_duration(12.3456);
        assert_eq!(first, second);
    }
}
