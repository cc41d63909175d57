const PALETTE: [&str; 10] = [
    "#00d4aa", // teal/accent
    "#5eb5ff", // sky blue
    "#a78bfa", // violet
    "#f472b6", // pink
    "#fbbf24", // amber
    "#34d399", // emerald
    "#fb923c", // orange
    "#818cf8", // indigo
    "#f87171", // rose
    "#2dd4bf", // cyan
];

/// Chart color for the zero-based scenario index, cycling with period 10.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Whole-unit currency string with thousands separators, e.g. `$1,234,568`.
/// Rounds half away from zero at the unit boundary.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return format!("${rounded}");
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u128))
}

fn group_thousands(mut units: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let group = units % 1_000;
        units /= 1_000;
        if units == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// Percentage for display: drops the fraction when it is a whole number.
pub fn format_percent(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_ten_unique_colors() {
        let mut colors: Vec<&str> = (0..10).map(palette_color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 10);
    }

    #[test]
    fn palette_cycles_with_period_ten() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_eq!(palette_color(1), palette_color(11));
        assert_eq!(palette_color(5), palette_color(15));
    }

    #[test]
    fn first_palette_color_is_the_accent_teal() {
        assert_eq!(palette_color(0), "#00d4aa");
    }

    #[test]
    fn formats_whole_currency_with_separators() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1.0), "$1");
        assert_eq!(format_currency(99.0), "$99");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(123_456_789.0), "$123,456,789");
    }

    #[test]
    fn currency_rounds_half_away_from_zero_at_the_unit() {
        assert_eq!(format_currency(1_000.49), "$1,000");
        assert_eq!(format_currency(1_000.50), "$1,001");
        assert_eq!(format_currency(-1_000.50), "-$1,001");
    }

    #[test]
    fn percent_display_drops_trailing_whole_fraction() {
        assert_eq!(format_percent(7.0), "7");
        assert_eq!(format_percent(7.5), "7.5");
        assert_eq!(format_percent(0.0), "0");
    }
}
