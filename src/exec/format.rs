//! Code emitter, format side (spec §4.6).
//!
//! `build_actions` is the "emitter": it walks the op list once, at compile
//! time, and resolves each op to a [`FormatAction`] that already knows
//! exactly what it needs to do (which width to pad to, whether a field is
//! one-based, which locale table to consult). `run_format` is the
//! "trampoline" (spec §2's strategy (c)): a single pass over the resolved
//! actions with no branching on the original opcode, since that dispatch
//! already happened when `build_actions` ran.

use core::fmt::{self, Write};

use crate::analysis::format::FormatAttrs;
use crate::calendar::{self, CivilDateTime, Weekday};
use crate::locale::Locale;
use crate::oplist::{DelimiterTable, Op};
use crate::sink::{write_padded, write_signed_padded};
use crate::symbols::Opcode;

#[derive(Debug, Clone)]
pub(crate) enum FormatAction {
    LiteralChar(char),
    Literal(Box<str>),
    /// Year, zero-padded to `width` digits, sign-extended for years <= 0.
    Year(usize),
    YearTwoDigit,
    Month(usize),
    MonthName(bool),
    Day(usize),
    DayOfWeekNumber,
    WeekdayName(bool),
    Hour24 { width: usize, one_based: bool },
    Hour12 { width: usize, one_based: bool },
    AmPm,
    Era,
    Minute(usize),
    Second(usize),
    Millis(usize),
    Timezone,
}

/// Build the specialized action list for one compiled pattern.
pub(crate) fn build_actions(ops: &[Op], delimiters: &DelimiterTable) -> Vec<FormatAction> {
    ops.iter()
        .map(|op| match op {
            Op::Delimiter(idx) => {
                let text = delimiters.get(*idx);
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => FormatAction::LiteralChar(c),
                    _ => FormatAction::Literal(text.into()),
                }
            }
            Op::Field(opcode) => action_for(*opcode),
        })
        .collect()
}

fn action_for(opcode: Opcode) -> FormatAction {
    use Opcode::*;
    match opcode {
        Era => FormatAction::Era,
        Year1 | YearGreedy => FormatAction::Year(1),
        Year2 => FormatAction::YearTwoDigit,
        Year4 => FormatAction::Year(4),
        Month1 | MonthGreedy => FormatAction::Month(1),
        Month2 => FormatAction::Month(2),
        MonthShort => FormatAction::MonthName(false),
        MonthLong => FormatAction::MonthName(true),
        Day1 | DayGreedy => FormatAction::Day(1),
        Day2 => FormatAction::Day(2),
        DayNameShort => FormatAction::WeekdayName(false),
        DayNameLong => FormatAction::WeekdayName(true),
        DayOfWeek => FormatAction::DayOfWeekNumber,
        AmPm => FormatAction::AmPm,
        Hour24_1 | Hour24Greedy => FormatAction::Hour24 { width: 1, one_based: false },
        Hour24_2 => FormatAction::Hour24 { width: 2, one_based: false },
        Hour1Based24_1 | Hour1Based24Greedy => FormatAction::Hour24 { width: 1, one_based: true },
        Hour1Based24_2 => FormatAction::Hour24 { width: 2, one_based: true },
        Hour12_1 | Hour12Greedy => FormatAction::Hour12 { width: 1, one_based: false },
        Hour12_2 => FormatAction::Hour12 { width: 2, one_based: false },
        Hour1Based12_1 | Hour1Based12Greedy => FormatAction::Hour12 { width: 1, one_based: true },
        Hour1Based12_2 => FormatAction::Hour12 { width: 2, one_based: true },
        Minute1 | MinuteGreedy => FormatAction::Minute(1),
        Minute2 => FormatAction::Minute(2),
        Second1 | SecondGreedy => FormatAction::Second(1),
        Second2 => FormatAction::Second(2),
        Millis1 | MillisGreedy => FormatAction::Millis(1),
        Millis3 => FormatAction::Millis(3),
        TimezoneShort | TimezoneGmt | TimezoneLong | TimezoneRfc822 | TimezoneIso1
        | TimezoneIso2 | TimezoneIso3 => FormatAction::Timezone,
    }
}

/// Run the resolved action list against one instant. `attrs` gates both
/// halves of the instant's decomposition: a time-only pattern (e.g.
/// `HH:mm`) skips `decompose_date`'s year-counting loop entirely, a
/// date-only pattern skips the wall-clock division, and the weekday
/// computation only runs when a weekday-shaped op is actually present.
pub(crate) fn run_format<W: Write>(
    actions: &[FormatAction],
    attrs: FormatAttrs,
    instant_millis: i64,
    locale: Locale,
    zone_label: &str,
    sink: &mut W,
) -> fmt::Result {
    let (year, month, day) = if attrs.needs_date() {
        calendar::decompose_date(instant_millis)
    } else {
        (0, 0, 0)
    };
    let (hour, minute, second, millis) = if attrs.needs_time() {
        calendar::decompose_time(instant_millis)
    } else {
        (0, 0, 0, 0)
    };
    let civil = CivilDateTime { year, month, day, hour, minute, second, millis };
    let weekday = if attrs.contains(FormatAttrs::DAY_OF_WEEK) {
        Some(Weekday::of(civil.year, civil.month, civil.day))
    } else {
        None
    };

    for action in actions {
        match action {
            FormatAction::LiteralChar(c) => sink.write_char(*c)?,
            FormatAction::Literal(text) => sink.write_str(text)?,
            FormatAction::Year(width) => write_signed_padded(sink, civil.year as i64, *width)?,
            FormatAction::YearTwoDigit => {
                write_padded(sink, civil.year.rem_euclid(100) as i64, 2)?
            }
            FormatAction::Month(width) => write_padded(sink, civil.month as i64, *width)?,
            FormatAction::MonthName(long) => {
                sink.write_str(locale.month_name(civil.month, *long))?
            }
            FormatAction::Day(width) => write_padded(sink, civil.day as i64, *width)?,
            FormatAction::DayOfWeekNumber => {
                let n = weekday.expect("weekday materialized for DAY_OF_WEEK op");
                write_padded(sink, n.number_days_from_monday() as i64 + 1, 1)?
            }
            FormatAction::WeekdayName(long) => {
                let w = weekday.expect("weekday materialized for weekday-name op");
                sink.write_str(locale.weekday_name(w, *long))?
            }
            FormatAction::Hour24 { width, one_based } => {
                let hour = civil.hour as i64;
                // `k`/`kk` count 1..24 (spec §4.6 "one-based variants add 1
                // before writing"); unlike `h`/`hh` this needs no wraparound
                // special case since 0..23 + 1 is already bijective onto
                // 1..24, matching the parse side's plain `value - 1` (spec
                // §8 scenario 6: `kk` input `24` parses to hour 23).
                let value = if *one_based { hour + 1 } else { hour };
                write_padded(sink, value, *width)?
            }
            FormatAction::Hour12 { width, one_based } => {
                let hour = civil.hour as i32;
                let value = if *one_based {
                    (hour - 1).rem_euclid(12) + 1
                } else {
                    hour % 12
                };
                write_padded(sink, value as i64, *width)?
            }
            FormatAction::AmPm => sink.write_str(locale.am_pm_text(civil.hour >= 12))?,
            FormatAction::Era => {
                let era = if civil.year >= 1 { 1 } else { 0 };
                sink.write_str(locale.era_text(era))?
            }
            FormatAction::Minute(width) => write_padded(sink, civil.minute as i64, *width)?,
            FormatAction::Second(width) => write_padded(sink, civil.second as i64, *width)?,
            FormatAction::Millis(width) => write_padded(sink, civil.millis as i64, *width)?,
            FormatAction::Timezone => sink.write_str(zone_label)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oplist::build;

    fn format_pattern(pattern: &str, instant_millis: i64) -> String {
        let (ops, delimiters) = build(pattern, 0, pattern.len());
        let attrs = FormatAttrs::analyze(&ops);
        let actions = build_actions(&ops, &delimiters);
        let mut out = String::new();
        run_format(&actions, attrs, instant_millis, Locale::default_locale(), "UTC", &mut out)
            .unwrap();
        out
    }

    #[test]
    fn formats_a_full_date_time_pattern() {
        let dt = CivilDateTime {
            year: 2017,
            month: 3,
            day: 27,
            hour: 15,
            minute: 4,
            second: 5,
            millis: 123,
        };
        let instant = dt.to_instant_millis().unwrap();
        let out = format_pattern("yyyy-MM-ddTHH:mm:ss.SSS", instant);
        assert_eq!(out, "2017-03-27T15:04:05.123");
    }

    #[test]
    fn hour_12_noon_formats_as_twelve_pm() {
        let dt = CivilDateTime { year: 2020, month: 1, day: 1, hour: 12, minute: 0, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("h:mma", instant), "12:00PM");
    }

    #[test]
    fn hour_12_midnight_formats_as_twelve_am() {
        let dt = CivilDateTime { year: 2020, month: 1, day: 1, hour: 0, minute: 0, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("h:mma", instant), "12:00AM");
    }

    #[test]
    fn one_based_24_hour_maps_midnight_to_one() {
        let dt = CivilDateTime { year: 2020, month: 1, day: 1, hour: 0, minute: 30, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("kk:mm", instant), "01:30");
    }

    #[test]
    fn one_based_24_hour_maps_last_hour_to_twenty_four() {
        let dt = CivilDateTime { year: 2020, month: 1, day: 1, hour: 23, minute: 30, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("kk:mm", instant), "24:30");
    }

    #[test]
    fn negative_year_gets_a_sign() {
        let dt = CivilDateTime { year: -1, month: 12, day: 31, hour: 0, minute: 0, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("yyyy-MM-dd", instant), "-0001-12-31");
    }

    #[test]
    fn weekday_and_timezone_names_round_trip_into_the_sink() {
        // 2017-03-27 is a Monday.
        let dt = CivilDateTime { year: 2017, month: 3, day: 27, hour: 0, minute: 0, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("E d MMM yyyy z", instant), "Mon 27 Mar 2017 UTC");
    }

    #[test]
    fn time_only_pattern_formats_without_needing_the_date_fields() {
        // A date far enough from the epoch that a buggy unconditional
        // `decompose_date` producing a wrong year would still leave the
        // clock fields (computed from `ms_of_day` alone) correct; this
        // only checks the *output*, since `needs_date()` gating an
        // unused computation isn't observable except by cost.
        let dt = CivilDateTime { year: 2017, month: 3, day: 27, hour: 15, minute: 4, second: 5, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("HH:mm:ss", instant), "15:04:05");
    }

    #[test]
    fn date_only_pattern_formats_without_needing_the_clock_fields() {
        let dt = CivilDateTime { year: 2017, month: 3, day: 27, hour: 15, minute: 4, second: 5, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        assert_eq!(format_pattern("yyyy-MM-dd", instant), "2017-03-27");
    }
}
