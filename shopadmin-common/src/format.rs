//! Display formatting for prices and dates

use chrono::{DateTime, Datelike, Utc};

use crate::i18n::Locale;

/// Format a price with its currency symbol, e.g. `$20` or `$19.5`.
///
/// Uses the shortest decimal form of the value, so whole amounts carry no
/// trailing `.0`.
pub fn format_price(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, value)
}

/// The timestamp, or `now` when the record has none.
pub fn date_or_now(value: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    value.unwrap_or(now)
}

/// Short calendar date in the locale's convention.
///
/// `en` renders month/day/year, `ar` renders day/month/year in Arabic-Indic
/// digits.
pub fn format_date(value: DateTime<Utc>, locale: Locale) -> String {
    let (day, month, year) = (value.day(), value.month(), value.year());
    match locale {
        Locale::En => format!("{}/{}/{}", month, day, year),
        Locale::Ar => to_arabic_digits(&format!("{}/{}/{}", day, month, year)),
    }
}

fn to_arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            // U+0660 ARABIC-INDIC DIGIT ZERO
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("$", 20.0), "$20");
        assert_eq!(format_price("$", 19.5), "$19.5");
        assert_eq!(format_price("$", 0.99), "$0.99");
        assert_eq!(format_price("€", 1250.0), "€1250");
    }

    #[test]
    fn test_date_or_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(date_or_now(Some(created), now), created);
        assert_eq!(date_or_now(None, now), now);
    }

    #[test]
    fn test_format_date_english() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(date, Locale::En), "1/15/2024");
    }

    #[test]
    fn test_format_date_arabic() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(date, Locale::Ar), "١٥/١/٢٠٢٤");
    }
}
