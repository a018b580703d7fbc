use chrono::{Datelike, Local, NaiveDate, Weekday};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn current_date_key(clock: &dyn Clock) -> String {
    date_key(clock.today())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields, date keys must round-trip exactly
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .ok()
        .filter(|date| date_key(*date) == key)
}

// 0 = Sunday
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn workout_plan_for(weekday: Weekday) -> Option<u8> {
    match weekday {
        Weekday::Mon => Some(1),
        Weekday::Tue => Some(2),
        Weekday::Wed => Some(3),
        Weekday::Thu => None,
        Weekday::Fri => Some(4),
        Weekday::Sat => Some(5),
        Weekday::Sun => None,
    }
}

pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn format_display_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{day}{} {}", ordinal_suffix(day), date.format("%B"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(key: &str) -> NaiveDate {
        parse_date_key(key).expect("valid date key")
    }

    #[test]
    fn display_date_uses_ordinal_suffixes() {
        assert_eq!(format_display_date(date("2024-03-21")), "21st March");
        assert_eq!(format_display_date(date("2024-03-22")), "22nd March");
        assert_eq!(format_display_date(date("2024-03-04")), "4th March");
        assert_eq!(format_display_date(date("2024-01-01")), "1st January");
        assert_eq!(format_display_date(date("2024-12-23")), "23rd December");
        assert_eq!(format_display_date(date("2024-05-31")), "31st May");
    }

    #[test]
    fn teens_fall_through_to_th() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
    }

    #[test]
    fn day_of_week_starts_on_sunday() {
        assert_eq!(day_of_week(date("2024-03-03")), 0);
        assert_eq!(day_of_week(date("2024-03-04")), 1);
        assert_eq!(day_of_week(date("2024-03-09")), 6);
        assert_eq!(day_of_week(date("2000-02-29")), 2);
    }

    #[test]
    fn workout_schedule_skips_thursday_and_sunday() {
        let week: Vec<_> = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
        .into_iter()
        .map(workout_plan_for)
        .collect();

        assert_eq!(
            week,
            vec![None, Some(1), Some(2), Some(3), None, Some(4), Some(5)]
        );
    }

    #[test]
    fn plan_depends_only_on_weekday() {
        let start = date("2023-12-25");
        for offset in 0..400 {
            let day = start + chrono::Duration::days(offset);
            let plan = workout_plan_for(day.weekday());
            assert!(matches!(plan, None | Some(1..=5)));
            let week_later = day + chrono::Duration::weeks(3);
            assert_eq!(plan, workout_plan_for(week_later.weekday()));
        }
    }

    #[test]
    fn date_keys_are_strict() {
        assert_eq!(date_key(date("2024-03-04")), "2024-03-04");
        assert!(parse_date_key("2024-3-4").is_none());
        assert!(parse_date_key("2024-02-30").is_none());
        assert!(parse_date_key("yesterday").is_none());
        assert!(parse_date_key("2024-03-04T00:00:00").is_none());
    }

    #[test]
    fn fixed_clock_pins_the_date_key() {
        let pinned = FixedClock(date("2024-03-21"));
        assert_eq!(current_date_key(&pinned), "2024-03-21");
    }
}
