// Parsing and formatting helpers shared by the loader and the console
// renderer.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

pub fn parse_i32_safe(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Zero-pad a month number to two digits (`3` -> `"03"`).
///
/// Returns `None` unless `month`/`year` name a real calendar month, which
/// rejects `0`, `13` and friends the same way a strict `%m-%Y` date parse
/// would.
pub fn format_month(month: i32, year: i32) -> Option<String> {
    let m = u32::try_from(month).ok()?;
    NaiveDate::from_ymd_opt(year, m, 1)?;
    Some(format!("{:02}", m))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` so counts read as `49,837`.
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i32_safe() {
        assert_eq!(parse_i32_safe(" 2019 "), Some(2019));
        assert_eq!(parse_i32_safe(""), None);
        assert_eq!(parse_i32_safe("Jan"), None);
        assert_eq!(parse_i32_safe("3.5"), None);
    }

    #[test]
    fn test_format_month_pads() {
        assert_eq!(format_month(1, 2020).as_deref(), Some("01"));
        assert_eq!(format_month(12, 1989).as_deref(), Some("12"));
    }

    #[test]
    fn test_format_month_rejects_out_of_range() {
        assert_eq!(format_month(0, 2020), None);
        assert_eq!(format_month(13, 2020), None);
        assert_eq!(format_month(-1, 2020), None);
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(49837usize), "49,837");
        assert_eq!(format_int(7usize), "7");
    }
}
