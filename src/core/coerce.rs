// src/core/coerce.rs
// Text cell → typed value. `None` means "not a value of this type"; callers
// turn that into a Parse error with page context.

use chrono::NaiveDate;

/// Non-negative integer, tolerating a spreadsheet-style `.0` suffix.
pub fn parse_whole(s: &str) -> Option<u32> {
    let t = s.trim();
    if let Ok(v) = t.parse::<u32>() {
        return Some(v);
    }
    let f: f64 = t.parse().ok()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u32)
}

const NAMED_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%a %b %d, %Y"];

/// Calendar date in any of the layouts the league site has used:
/// `9/7/2021`, `9/7/21`, `2021-09-07`, `Sep 7, 2021`.
/// A trailing time after a slash date is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains('/') {
        let token = s.split_whitespace().next()?;
        let year_len = token.rsplit('/').next()?.len();
        let fmt = if year_len == 2 { "%m/%d/%y" } else { "%m/%d/%Y" };
        return NaiveDate::parse_from_str(token, fmt).ok();
    }
    NAMED_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(parse_whole("187"), Some(187));
        assert_eq!(parse_whole(" 42 "), Some(42));
        assert_eq!(parse_whole("7.0"), Some(7));
        assert_eq!(parse_whole("7.5"), None);
        assert_eq!(parse_whole("-3"), None);
        assert_eq!(parse_whole("NaN"), None);
        assert_eq!(parse_whole(""), None);
        assert_eq!(parse_whole("abs"), None);
    }

    #[test]
    fn dates_in_site_layouts() {
        assert_eq!(parse_date("9/7/2021"), Some(d(2021, 9, 7)));
        assert_eq!(parse_date("09/07/2021"), Some(d(2021, 9, 7)));
        assert_eq!(parse_date("9/7/21"), Some(d(2021, 9, 7)));
        assert_eq!(parse_date("1/4/2022 12:00:00 AM"), Some(d(2022, 1, 4)));
        assert_eq!(parse_date("2022-01-04"), Some(d(2022, 1, 4)));
        assert_eq!(parse_date("Jan 4, 2022"), Some(d(2022, 1, 4)));
    }

    #[test]
    fn bad_dates_are_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("13/40/2021"), None);
        assert_eq!(parse_date("Page 2"), None);
        assert_eq!(parse_date("TBD"), None);
    }
}
