/// Format a distance or cost the way the engine reports it.
///
/// Integral values print without a decimal point, anything else prints its
/// shortest decimal form.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Edge label text, e.g. `"10 km"`
#[must_use]
pub fn distance_label(distance: f64) -> String {
    format!("{} km", format_number(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_decimal_point() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(distance_label(10.0), "10 km");
    }

    #[test]
    fn test_fractional_values_keep_their_digits() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(distance_label(0.25), "0.25 km");
    }
}
