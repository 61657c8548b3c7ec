use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn now_in_display_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::display_time_zone())
}

pub fn today_in_display_tz() -> NaiveDate {
    now_in_display_tz().date_naive()
}

pub fn current_year() -> i32 {
    today_in_display_tz().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_matches_display_tz_today() {
        let year = current_year();
        assert!(year >= 2024);
        assert!((today_in_display_tz().year() - year).abs() <= 1);
    }
}
