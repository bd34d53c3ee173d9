// Formatting helpers shared by the screens.

use chrono::{DateTime, NaiveDate};

/// "15750" → "15,750.00". Two decimals, comma-grouped thousands.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{:02}", sign, grouped, fraction)
}

/// Like [`format_currency`] but drops whole-dollar cents: "15,750".
pub fn format_grouped(amount: f64) -> String {
    let formatted = format_currency(amount);
    match formatted.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// "2025-11-01" → "Nov 1, 2025". Unparseable input passes through.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "2025-11-28T10:30:00Z" → "Nov 28, 2025 10:30".
pub fn format_datetime(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Epoch milliseconds → "10:30", for chart axis ticks.
pub fn format_clock_time(timestamp_ms: f64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms as i64) {
        Some(parsed) => parsed.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Epoch milliseconds → "Nov 28, 2025 10:30".
pub fn format_epoch_ms(timestamp_ms: f64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms as i64) {
        Some(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        None => String::new(),
    }
}

/// Whole days from `today` until a "YYYY-MM-DD" target. Negative when
/// the target is already past; None when the target cannot be parsed.
pub fn days_until(target: &str, today: NaiveDate) -> Option<i64> {
    let target = NaiveDate::parse_from_str(target, "%Y-%m-%d").ok()?;
    Some((target - today).num_days())
}

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    let ms = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// "paid" → "Paid". ASCII only, which covers every status label here.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(15750.0), "15,750.00");
        assert_eq!(format_currency(450.0), "450.00");
        assert_eq!(format_currency(28350.0), "28,350.00");
        assert_eq!(format_currency(1234567.5), "1,234,567.50");
        assert_eq!(format_currency(0.0), "0.00");
    }

    #[test]
    fn grouped_drops_whole_dollar_cents() {
        assert_eq!(format_grouped(15750.0), "15,750");
        assert_eq!(format_grouped(3150.0), "3,150");
        assert_eq!(format_grouped(450.5), "450.50");
    }

    #[test]
    fn dates_render_short_month() {
        assert_eq!(format_date("2025-11-01"), "Nov 1, 2025");
        assert_eq!(format_date("2026-02-15"), "Feb 15, 2026");
        // Pass-through on junk
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn datetimes_include_clock_time() {
        assert_eq!(format_datetime("2025-11-28T10:30:00Z"), "Nov 28, 2025 10:30");
    }

    #[test]
    fn days_until_counts_forward_and_backward() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(days_until("2026-01-10", today), Some(43));
        assert_eq!(days_until("2025-11-27", today), Some(-1));
        assert_eq!(days_until("never", today), None);
    }

    #[test]
    fn capitalize_uppercases_first_letter() {
        assert_eq!(capitalize("paid"), "Paid");
        assert_eq!(capitalize("ok"), "Ok");
        assert_eq!(capitalize(""), "");
    }
}
