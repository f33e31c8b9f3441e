//! Small formatting helpers shared by the report views

/// Whole-number percentage, with one decimal below 10%
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A horizontal progress bar of `width` cells for `percent` (0-100)
pub fn format_bar(percent: f64, width: usize) -> String {
    if percent.is_nan() || percent <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Title underlined to its own width
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, "═".repeat(title.chars().count()))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(4.3), "4.3%");
        assert_eq!(format_percentage(41.4), "41%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 4), "░░░░");
        assert_eq!(format_bar(150.0, 4), "████");
        assert_eq!(format_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_header_matches_cyrillic_width() {
        assert_eq!(format_header("Цели"), "Цели\n════\n");
    }
}
