//! Display Formatting
//!
//! Pure helpers for rendering analytics numbers. Standard rounding only.

/// Abbreviate a count to K/M notation
pub fn abbreviate(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Format a duration in seconds as "Xm Ys" (or "Ys" under a minute)
pub fn duration(seconds: f64) -> String {
    let total = seconds.round() as i64;
    let minutes = total / 60;
    let secs = total % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a 0..1 rate as a percentage
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_thousands_and_millions() {
        assert_eq!(abbreviate(950.0), "950");
        assert_eq!(abbreviate(1_000.0), "1.0K");
        assert_eq!(abbreviate(1_500.0), "1.5K");
        assert_eq!(abbreviate(15_203.0), "15.2K");
        assert_eq!(abbreviate(2_300_000.0), "2.3M");
    }

    #[test]
    fn rounds_small_counts() {
        assert_eq!(abbreviate(0.0), "0");
        assert_eq!(abbreviate(42.4), "42");
        assert_eq!(abbreviate(42.6), "43");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(duration(42.0), "42s");
        assert_eq!(duration(60.0), "1m 0s");
        assert_eq!(duration(204.5), "3m 25s");
        assert_eq!(duration(0.4), "0s");
    }

    #[test]
    fn formats_rates_as_percentages() {
        assert_eq!(percent(0.42), "42.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(1.0), "100.0%");
    }
}
