use chrono::{Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::config::Config;

/// Operating-hours rules for the salon. All date logic downstream of this
/// struct works on `YYYY-MM-DD` keys computed in `timezone`; raw `Date`
/// equality is never used.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub timezone: Tz,
    pub open_hour: u32,
    pub close_hour: u32,
    pub slot_interval_min: u32,
    pub closed_weekdays: Vec<Weekday>,
    /// MM-DD keys of fixed-date holidays.
    pub holidays: Vec<String>,
}

impl ScheduleConfig {
    pub fn from_config(config: &Config) -> Self {
        let timezone: Tz = config.salon_timezone.parse().unwrap_or(chrono_tz::UTC);

        let closed_weekdays = config
            .closed_weekdays
            .split(',')
            .filter_map(parse_weekday)
            .collect();

        let holidays = config
            .holidays
            .split(',')
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();

        Self {
            timezone,
            open_hour: config.open_hour,
            close_hour: config.close_hour,
            slot_interval_min: config.slot_interval_min,
            closed_weekdays,
            holidays,
        }
    }

    pub fn closing_minutes(&self) -> u32 {
        self.close_hour * 60
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let upper = name.trim().to_ascii_uppercase();
    match upper.get(..3)? {
        "MON" => Some(Weekday::Mon),
        "TUE" => Some(Weekday::Tue),
        "WED" => Some(Weekday::Wed),
        "THU" => Some(Weekday::Thu),
        "FRI" => Some(Weekday::Fri),
        "SAT" => Some(Weekday::Sat),
        "SUN" => Some(Weekday::Sun),
        _ => None,
    }
}

/// "Now" as a calendar day in the salon timezone, regardless of where the
/// process runs. Floor for all is-this-in-the-past checks.
pub fn anchored_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Canonical YYYY-MM-DD comparison key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn is_past(date: NaiveDate, tz: Tz) -> bool {
    date_key(date) < date_key(anchored_today(tz))
}

pub fn is_closed_weekday(date: NaiveDate, closed_weekdays: &[Weekday]) -> bool {
    closed_weekdays.contains(&date.weekday())
}

pub fn is_holiday(date: NaiveDate, holidays: &[String]) -> bool {
    let key = date.format("%m-%d").to_string();
    holidays.iter().any(|h| h == &key)
}

/// Lenient minutes parser for operator-entered duration text.
///
/// Sums every "<digits> h…" run as hours and every "<digits> m…" run as
/// minutes ("1h 30min" -> 90). A purely numeric string is taken as minutes.
/// Anything else parses to 0; dirty catalog data must not break a booking.
pub fn parse_duration(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut total = 0u32;
    let mut matched_unit = false;
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let mut value = 0u32;
        while i < chars.len() && chars[i].is_ascii_digit() {
            value = value.saturating_mul(10) + chars[i].to_digit(10).unwrap();
            i += 1;
        }

        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        let mut unit = String::new();
        while j < chars.len() && chars[j].is_alphabetic() {
            unit.push(chars[j].to_ascii_lowercase());
            j += 1;
        }

        if unit.starts_with('h') {
            total += value * 60;
            matched_unit = true;
            i = j;
        } else if unit.starts_with('m') {
            total += value;
            matched_unit = true;
            i = j;
        }
    }

    if matched_unit {
        total
    } else {
        trimmed.parse::<u32>().unwrap_or(0)
    }
}

/// "HH:MM" to minutes from midnight. Unparseable components count as 0.
pub fn minutes_from_midnight(time: &str) -> u32 {
    let mut parts = time.split(':');
    let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok()).unwrap_or(0);
    let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok()).unwrap_or(0);
    hours * 60 + minutes
}

/// The bookable start-time grid for one day, as zero-padded "HH:MM".
/// Empty on closed weekdays and holidays. Cheap enough to regenerate on
/// every call; depends only on its inputs.
pub fn slots_for_day(date: NaiveDate, config: &ScheduleConfig) -> Vec<String> {
    if config.slot_interval_min == 0 {
        return Vec::new();
    }
    if is_closed_weekday(date, &config.closed_weekdays) || is_holiday(date, &config.holidays) {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut cursor = config.open_hour * 60;
    let closing = config.close_hour * 60;
    while cursor < closing {
        slots.push(format!("{:02}:{:02}", cursor / 60, cursor % 60));
        cursor += config.slot_interval_min;
    }
    slots
}
