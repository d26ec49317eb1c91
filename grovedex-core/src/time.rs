//! Schedule time parsing and the availability predicate.
//!
//! Schedule windows come from the store as 12-hour clock strings like
//! `"9 AM to 5 PM"`. A window whose end hour is numerically smaller
//! than its start crosses midnight and the end compares as +24h.

use crate::error::TimeParseError;
use crate::types::{DaySchedule, Schedule, Weekday};

/// A parsed schedule window, both ends in 24-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

/// The hour criterion of a schedule query: either "only all-day
/// critters" or a concrete 24-hour clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourQuery {
    AllDay,
    At(u32),
}

/// 24-hour clock hour to a 12-hour label (0 -> "12 AM", 13 -> "1 PM").
pub fn to_12_hour(hour: u32) -> String {
    if hour == 0 {
        return "12 AM".to_string();
    }
    if hour == 12 {
        return "12 PM".to_string();
    }
    if hour > 12 {
        format!("{} PM", hour - 12)
    } else {
        format!("{} AM", hour)
    }
}

/// 12-hour label back to a 24-hour clock hour ("12 AM" -> 0,
/// "11 PM" -> 23).
pub fn to_24_hour(label: &str) -> Result<u32, TimeParseError> {
    let label = label.trim();
    let (hour, meridiem) = label
        .split_once(' ')
        .ok_or_else(|| TimeParseError::MissingMeridiem(label.to_string()))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| TimeParseError::InvalidHour(hour.to_string()))?;
    match meridiem {
        "AM" => Ok(if hour == 12 { 0 } else { hour }),
        "PM" => Ok(if hour == 12 { 12 } else { hour + 12 }),
        other => Err(TimeParseError::UnknownMeridiem(other.to_string())),
    }
}

/// Parse a schedule window string. Legacy `" - "` separators are
/// normalized to `" to "` before splitting.
pub fn parse_time_range(text: &str) -> Result<TimeRange, TimeParseError> {
    let text = text.replace(" - ", " to ");
    let (start, end) = text
        .split_once(" to ")
        .ok_or_else(|| TimeParseError::MissingSeparator(text.clone()))?;
    Ok(TimeRange {
        start_hour: to_24_hour(start)?,
        end_hour: to_24_hour(end)?,
    })
}

/// False only when the day's entry is the boolean `false`; a window
/// string counts as present on that day.
pub fn is_available_on_day(schedule: &Schedule, day: Weekday) -> bool {
    match schedule.day(day) {
        DaySchedule::Available(open) => *open,
        DaySchedule::Window(_) => true,
    }
}

/// Whether the schedule admits the given time.
///
/// With `day` unset, any day satisfying the time check is enough.
/// `minute` is accepted for call-site parity with wall-clock queries;
/// the check itself is hour-granular and the end boundary hour counts
/// as available for every minute of it.
pub fn is_available_at(
    schedule: &Schedule,
    day: Option<Weekday>,
    hour: HourQuery,
    minute: u32,
) -> bool {
    match day {
        None => Weekday::ALL
            .iter()
            .any(|&d| day_admits(schedule.day(d), hour, minute)),
        Some(d) => day_admits(schedule.day(d), hour, minute),
    }
}

fn day_admits(day: &DaySchedule, hour: HourQuery, _minute: u32) -> bool {
    let hour = match hour {
        // A bounded window is not "all day", only the literal boolean is.
        HourQuery::AllDay => return matches!(day, DaySchedule::Available(true)),
        HourQuery::At(h) => h,
    };
    match day {
        DaySchedule::Available(open) => *open,
        DaySchedule::Window(text) => match parse_time_range(text) {
            Ok(range) => {
                let end = if range.end_hour < range.start_hour {
                    // Window crosses midnight.
                    range.end_hour + 24
                } else {
                    range.end_hour
                };
                range.start_hour <= hour && hour <= end
            }
            // Malformed source data reads as unavailable.
            Err(_) => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_nine_to_five() -> Schedule {
        Schedule {
            sunday: DaySchedule::Available(false),
            monday: DaySchedule::Window("9 AM to 5 PM".to_string()),
            tuesday: DaySchedule::Window("9 AM to 5 PM".to_string()),
            wednesday: DaySchedule::Window("9 AM to 5 PM".to_string()),
            thursday: DaySchedule::Window("9 AM to 5 PM".to_string()),
            friday: DaySchedule::Window("9 AM to 5 PM".to_string()),
            saturday: DaySchedule::Available(true),
        }
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), "12 AM");
        assert_eq!(to_12_hour(1), "1 AM");
        assert_eq!(to_12_hour(11), "11 AM");
        assert_eq!(to_12_hour(12), "12 PM");
        assert_eq!(to_12_hour(13), "1 PM");
        assert_eq!(to_12_hour(23), "11 PM");
    }

    #[test]
    fn test_24_hour_round_trip() {
        for hour in 0..24 {
            assert_eq!(to_24_hour(&to_12_hour(hour)).unwrap(), hour);
        }
    }

    #[test]
    fn test_to_24_hour_rejects_malformed_labels() {
        assert!(matches!(
            to_24_hour("9"),
            Err(TimeParseError::MissingMeridiem(_))
        ));
        assert!(matches!(
            to_24_hour("nine AM"),
            Err(TimeParseError::InvalidHour(_))
        ));
        assert!(matches!(
            to_24_hour("9 XM"),
            Err(TimeParseError::UnknownMeridiem(_))
        ));
    }

    #[test]
    fn test_parse_time_range() {
        let range = parse_time_range("9 AM to 5 PM").unwrap();
        assert_eq!(range.start_hour, 9);
        assert_eq!(range.end_hour, 17);

        let range = parse_time_range("12 AM to 12 PM").unwrap();
        assert_eq!(range.start_hour, 0);
        assert_eq!(range.end_hour, 12);
    }

    #[test]
    fn test_parse_time_range_legacy_separator() {
        let range = parse_time_range("10 PM - 2 AM").unwrap();
        assert_eq!(range.start_hour, 22);
        assert_eq!(range.end_hour, 2);
    }

    #[test]
    fn test_parse_time_range_missing_separator() {
        assert!(matches!(
            parse_time_range("9 AM until 5 PM"),
            Err(TimeParseError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_is_available_on_day() {
        let schedule = weekday_nine_to_five();
        assert!(!is_available_on_day(&schedule, Weekday::Sunday));
        assert!(is_available_on_day(&schedule, Weekday::Monday));
        assert!(is_available_on_day(&schedule, Weekday::Saturday));
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let schedule = weekday_nine_to_five();
        let monday = Some(Weekday::Monday);
        assert!(is_available_at(&schedule, monday, HourQuery::At(9), 0));
        assert!(is_available_at(&schedule, monday, HourQuery::At(12), 30));
        // The end hour itself still counts, at any minute.
        assert!(is_available_at(&schedule, monday, HourQuery::At(17), 0));
        assert!(is_available_at(&schedule, monday, HourQuery::At(17), 59));
        assert!(!is_available_at(&schedule, monday, HourQuery::At(8), 59));
        assert!(!is_available_at(&schedule, monday, HourQuery::At(18), 0));
    }

    #[test]
    fn test_midnight_wraparound_window() {
        let mut schedule = weekday_nine_to_five();
        schedule.friday = DaySchedule::Window("10 PM to 2 AM".to_string());
        let friday = Some(Weekday::Friday);
        assert!(is_available_at(&schedule, friday, HourQuery::At(23), 0));
        assert!(is_available_at(&schedule, friday, HourQuery::At(1), 0));
        assert!(!is_available_at(&schedule, friday, HourQuery::At(12), 0));
    }

    #[test]
    fn test_boolean_days_ignore_the_hour() {
        let schedule = weekday_nine_to_five();
        assert!(is_available_at(
            &schedule,
            Some(Weekday::Saturday),
            HourQuery::At(3),
            0
        ));
        assert!(!is_available_at(
            &schedule,
            Some(Weekday::Sunday),
            HourQuery::At(12),
            0
        ));
    }

    #[test]
    fn test_all_day_query_rejects_bounded_windows() {
        let schedule = weekday_nine_to_five();
        assert!(is_available_at(
            &schedule,
            Some(Weekday::Saturday),
            HourQuery::AllDay,
            0
        ));
        assert!(!is_available_at(
            &schedule,
            Some(Weekday::Monday),
            HourQuery::AllDay,
            0
        ));
    }

    #[test]
    fn test_day_unset_checks_every_day() {
        let mut schedule = weekday_nine_to_five();
        schedule.monday = DaySchedule::Available(false);
        schedule.tuesday = DaySchedule::Available(false);
        schedule.wednesday = DaySchedule::Available(false);
        schedule.thursday = DaySchedule::Available(false);
        schedule.friday = DaySchedule::Window("10 PM to 2 AM".to_string());
        schedule.saturday = DaySchedule::Available(false);
        // 11 PM only falls inside Friday's window.
        assert!(is_available_at(&schedule, None, HourQuery::At(23), 0));
        assert!(!is_available_at(&schedule, None, HourQuery::At(12), 0));
    }

    #[test]
    fn test_malformed_window_reads_as_unavailable() {
        let mut schedule = weekday_nine_to_five();
        schedule.monday = DaySchedule::Window("whenever".to_string());
        assert!(!is_available_at(
            &schedule,
            Some(Weekday::Monday),
            HourQuery::At(12),
            0
        ));
        // Day-presence is unaffected by the malformed window text.
        assert!(is_available_on_day(&schedule, Weekday::Monday));
    }
}
