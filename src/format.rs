//! Display-string helpers for speeds and durations.
//!
//! Pure formatting only; the kernel emits plain numeric events and a display
//! layer decides what to render. These helpers reproduce the reference
//! system's labels: speeds rounded to whole km/h, durations to two
//! significant digits.

/// Formats a speed as a rounded `"<v> km/h"` label, e.g. `"13.0 km/h"`.
pub fn format_speed_kmh(speed_kmh: f64) -> String {
    format!("{:.1} km/h", speed_kmh.round())
}

/// Formats a duration as a two-significant-digit `"<t> seconds"` label,
/// e.g. `"0.84 seconds"`.
pub fn format_duration_s(duration_s: f64) -> String {
    format!("{} seconds", two_significant_digits(duration_s))
}

/// Renders a non-negative value with two significant digits in plain
/// (non-scientific) notation.
fn two_significant_digits(value: f64) -> String {
    if value <= 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let exponent = value.log10().floor() as i32;
    let decimals = (1 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed_kmh(0.0), "0.0 km/h");
        assert_eq!(format_speed_kmh(12.7), "13.0 km/h");
        assert_eq!(format_speed_kmh(60.48), "60.0 km/h");
    }

    #[test]
    fn test_format_duration_two_significant_digits() {
        assert_eq!(format_duration_s(0.83), "0.83 seconds");
        assert_eq!(format_duration_s(0.8437), "0.84 seconds");
        assert_eq!(format_duration_s(1.267), "1.3 seconds");
        assert_eq!(format_duration_s(12.34), "12 seconds");
        assert_eq!(format_duration_s(0.0099), "0.0099 seconds");
    }

    #[test]
    fn test_format_duration_degenerate_values() {
        assert_eq!(format_duration_s(0.0), "0 seconds");
        assert_eq!(format_duration_s(f64::NAN), "0 seconds");
    }
}
