//! Interpreter fallback (spec §4.8): `GenericDateFormat` holds the raw
//! `(ops, delimiters)` pair `compile_generic` produced and walks it at
//! `parse`/`format` time, branching on [`Opcode`] directly instead of
//! running a precomputed action vector. This is the reference semantics
//! the specializing compiler ([`crate::exec`]) is required to match
//! (spec §8: `compile(P, generic=true).format(T) == compile(P,
//! generic=false).format(T)`), grounded on the teacher's `format::parse::parse`
//! function, which already walks a `Vec<FormatItem>` and dispatches per item
//! at runtime rather than compiling a specialized routine ahead of time.

use core::fmt::{self, Write};

use crate::analysis::format::FormatAttrs;
use crate::analysis::parse::ParseSlots;
use crate::calendar::{self, CivilDateTime, Weekday};
use crate::error::{Error, ParseError, ParseErrorKind};
use crate::exec::parse::{
    self as parse_exec, HourType, NumericField, ParseState,
};
use crate::locale::Locale;
use crate::oplist::{DelimiterTable, Op};
use crate::sink::{write_padded, write_signed_padded};
use crate::symbols::Opcode;
use crate::DateFormat;

/// The un-specialized executor: same `(ops, delimiters)` shape the
/// compiler's internal passes already work with, with no per-pattern
/// action resolution step. See the module docs for why this still shares
/// low-level digit/locale-consumption helpers with [`crate::exec::parse`]
/// despite dispatching differently.
#[derive(Debug, Clone)]
pub struct GenericDateFormat {
    ops: Vec<Op>,
    delimiters: DelimiterTable,
}

impl GenericDateFormat {
    pub(crate) fn new(ops: Vec<Op>, delimiters: DelimiterTable) -> Self {
        GenericDateFormat { ops, delimiters }
    }
}

impl DateFormat for GenericDateFormat {
    fn parse(&self, text: &str, lo: usize, hi: usize, locale: &Locale) -> Result<i64, Error> {
        let slots = ParseSlots::analyze(&self.ops);
        let mut state = ParseState::new(lo, slots);
        for op in &self.ops {
            parse_one(op, &self.delimiters, text, hi, &mut state, locale)
                .map_err(|kind| ParseError { kind, position: state.pos })?;
        }
        if state.pos != hi {
            return Err(Error::Parse(ParseError { kind: ParseErrorKind::TailGarbage, position: state.pos }));
        }
        state
            .finish()
            .map_err(|kind| Error::Parse(ParseError { kind, position: hi }))
    }

    fn format<W: Write>(
        &self,
        instant_millis: i64,
        locale: &Locale,
        zone_label: &str,
        sink: &mut W,
    ) -> fmt::Result {
        let attrs = FormatAttrs::analyze(&self.ops);
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
        for op in &self.ops {
            match op {
                Op::Delimiter(idx) => sink.write_str(self.delimiters.get(*idx))?,
                Op::Field(opcode) => format_opcode(*opcode, civil, weekday, locale, zone_label, sink)?,
            }
        }
        Ok(())
    }
}

fn format_opcode<W: Write>(
    opcode: Opcode,
    civil: CivilDateTime,
    weekday: Option<Weekday>,
    locale: &Locale,
    zone_label: &str,
    sink: &mut W,
) -> fmt::Result {
    use Opcode::*;
    match opcode {
        Era => {
            let era = if civil.year >= 1 { 1 } else { 0 };
            sink.write_str(locale.era_text(era))
        }
        Year1 | YearGreedy => write_signed_padded(sink, civil.year as i64, 1),
        Year2 => write_padded(sink, civil.year.rem_euclid(100) as i64, 2),
        Year4 => write_signed_padded(sink, civil.year as i64, 4),
        Month1 | MonthGreedy => write_padded(sink, civil.month as i64, 1),
        Month2 => write_padded(sink, civil.month as i64, 2),
        MonthShort => sink.write_str(locale.month_name(civil.month, false)),
        MonthLong => sink.write_str(locale.month_name(civil.month, true)),
        Day1 | DayGreedy => write_padded(sink, civil.day as i64, 1),
        Day2 => write_padded(sink, civil.day as i64, 2),
        DayNameShort => sink.write_str(locale.weekday_name(weekday.expect("day_of_week materialized"), false)),
        DayNameLong => sink.write_str(locale.weekday_name(weekday.expect("day_of_week materialized"), true)),
        DayOfWeek => write_padded(
            sink,
            weekday.expect("day_of_week materialized").number_days_from_monday() as i64 + 1,
            1,
        ),
        AmPm => sink.write_str(locale.am_pm_text(civil.hour >= 12)),
        Hour24_1 | Hour24Greedy => write_padded(sink, civil.hour as i64, 1),
        Hour24_2 => write_padded(sink, civil.hour as i64, 2),
        // `k`/`kk` count 1..24 via a plain `hour + 1` (spec §4.6, §8
        // scenario 6), matching `parse_one`'s plain `value - 1` below.
        Hour1Based24_1 | Hour1Based24Greedy => write_padded(sink, civil.hour as i64 + 1, 1),
        Hour1Based24_2 => write_padded(sink, civil.hour as i64 + 1, 2),
        Hour12_1 | Hour12Greedy => write_padded(sink, civil.hour as i64 % 12, 1),
        Hour12_2 => write_padded(sink, civil.hour as i64 % 12, 2),
        Hour1Based12_1 | Hour1Based12Greedy => {
            write_padded(sink, (civil.hour as i32 - 1).rem_euclid(12) as i64 + 1, 1)
        }
        Hour1Based12_2 => write_padded(sink, (civil.hour as i32 - 1).rem_euclid(12) as i64 + 1, 2),
        Minute1 | MinuteGreedy => write_padded(sink, civil.minute as i64, 1),
        Minute2 => write_padded(sink, civil.minute as i64, 2),
        Second1 | SecondGreedy => write_padded(sink, civil.second as i64, 1),
        Second2 => write_padded(sink, civil.second as i64, 2),
        Millis1 | MillisGreedy => write_padded(sink, civil.millis as i64, 1),
        Millis3 => write_padded(sink, civil.millis as i64, 3),
        TimezoneShort | TimezoneGmt | TimezoneLong | TimezoneRfc822 | TimezoneIso1
        | TimezoneIso2 | TimezoneIso3 => sink.write_str(zone_label),
    }
}

fn parse_one(
    op: &Op,
    delimiters: &DelimiterTable,
    text: &str,
    hi: usize,
    state: &mut ParseState<'_>,
    locale: &Locale,
) -> Result<(), ParseErrorKind> {
    let opcode = match op {
        Op::Delimiter(idx) => {
            let literal = delimiters.get(*idx);
            let mut chars = literal.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => parse_exec::consume_char(text, state, hi, c),
                _ => parse_exec::consume_str(text, state, hi, literal),
            };
        }
        Op::Field(opcode) => *opcode,
    };

    use Opcode::*;
    match opcode {
        Era => {
            let (era, len) = locale
                .match_era(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "era" })?;
            state.era = era;
            state.pos += len;
        }
        Year1 => fixed(text, hi, state, 1, NumericField::Year)?,
        Year2 => {
            let (value, len) = parse_exec::consume_exact_digits(text, state.pos, hi, 2)?;
            state.year = parse_exec::adjust_two_digit_year(value);
            state.pos += len;
        }
        Year4 => {
            let (value, len) = parse_exec::consume_four_digit_year(text, state.pos, hi)?;
            state.year = value;
            state.pos += len;
        }
        YearGreedy => {
            let (value, len) = parse_exec::consume_greedy_digits(text, state.pos, hi)?;
            state.year = if len == 2 { parse_exec::adjust_two_digit_year(value) } else { value as i32 };
            state.pos += len;
        }
        Month1 => fixed(text, hi, state, 1, NumericField::Month)?,
        MonthGreedy => greedy(text, hi, state, NumericField::Month)?,
        Month2 => fixed(text, hi, state, 2, NumericField::Month)?,
        MonthShort | MonthLong => {
            let (month, len) = locale
                .match_month(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "month" })?;
            state.month = month;
            state.pos += len;
        }
        Day1 => fixed(text, hi, state, 1, NumericField::Day)?,
        DayGreedy => greedy(text, hi, state, NumericField::Day)?,
        Day2 => fixed(text, hi, state, 2, NumericField::Day)?,
        DayNameShort | DayNameLong => {
            let (_, len) = locale
                .match_weekday(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "weekday" })?;
            state.pos += len;
        }
        DayOfWeek => {
            let (_, len) = parse_exec::consume_exact_digits(text, state.pos, hi, 1)?;
            state.pos += len;
        }
        AmPm => {
            let (is_pm, len) = locale
                .match_am_pm(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "am_pm" })?;
            state.hour_type = if is_pm { HourType::Pm } else { HourType::Am };
            state.pos += len;
        }
        Hour24_1 => fixed(text, hi, state, 1, NumericField::Hour24 { one_based: false })?,
        Hour24Greedy => greedy(text, hi, state, NumericField::Hour24 { one_based: false })?,
        Hour24_2 => fixed(text, hi, state, 2, NumericField::Hour24 { one_based: false })?,
        Hour1Based24_1 => fixed(text, hi, state, 1, NumericField::Hour24 { one_based: true })?,
        Hour1Based24Greedy => greedy(text, hi, state, NumericField::Hour24 { one_based: true })?,
        Hour1Based24_2 => fixed(text, hi, state, 2, NumericField::Hour24 { one_based: true })?,
        Hour12_1 | Hour1Based12_1 => fixed(text, hi, state, 1, NumericField::Hour12)?,
        Hour12Greedy | Hour1Based12Greedy => greedy(text, hi, state, NumericField::Hour12)?,
        Hour12_2 | Hour1Based12_2 => fixed(text, hi, state, 2, NumericField::Hour12)?,
        Minute1 => fixed(text, hi, state, 1, NumericField::Minute)?,
        MinuteGreedy => greedy(text, hi, state, NumericField::Minute)?,
        Minute2 => fixed(text, hi, state, 2, NumericField::Minute)?,
        Second1 => fixed(text, hi, state, 1, NumericField::Second)?,
        SecondGreedy => greedy(text, hi, state, NumericField::Second)?,
        Second2 => fixed(text, hi, state, 2, NumericField::Second)?,
        Millis1 => fixed(text, hi, state, 1, NumericField::Millis)?,
        MillisGreedy => greedy(text, hi, state, NumericField::Millis)?,
        Millis3 => fixed(text, hi, state, 3, NumericField::Millis)?,
        TimezoneShort | TimezoneGmt | TimezoneLong | TimezoneRfc822 | TimezoneIso1
        | TimezoneIso2 | TimezoneIso3 => {
            if let Some((minutes, len)) = parse_exec::parse_offset(text, state.pos, hi) {
                state.offset_minutes = Some(minutes);
                state.pos += len;
            } else if let Some(len) = locale.match_zone_name(&text[state.pos..hi]) {
                state.zone_name = Some(&text[state.pos..state.pos + len]);
                state.pos += len;
            } else {
                return Err(ParseErrorKind::NameLookupFailed { field: "timezone" });
            }
        }
    }
    Ok(())
}

fn fixed(
    text: &str,
    hi: usize,
    state: &mut ParseState<'_>,
    width: usize,
    field: NumericField,
) -> Result<(), ParseErrorKind> {
    let (value, len) = parse_exec::consume_exact_digits(text, state.pos, hi, width)?;
    state.store_numeric(field, value);
    state.pos += len;
    Ok(())
}

fn greedy(
    text: &str,
    hi: usize,
    state: &mut ParseState<'_>,
    field: NumericField,
) -> Result<(), ParseErrorKind> {
    let (value, len) = parse_exec::consume_greedy_digits(text, state.pos, hi)?;
    state.store_numeric(field, value);
    state.pos += len;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oplist::build;

    fn generic_for(pattern: &str) -> GenericDateFormat {
        let (ops, delimiters) = build(pattern, 0, pattern.len());
        GenericDateFormat::new(ops, delimiters)
    }

    #[test]
    fn format_matches_a_known_instant() {
        let generic = generic_for("yyyy-MM-dd");
        let dt = CivilDateTime { year: 2017, month: 3, day: 27, hour: 0, minute: 0, second: 0, millis: 0 };
        let instant = dt.to_instant_millis().unwrap();
        let mut out = String::new();
        generic.format(instant, &Locale::default_locale(), "UTC", &mut out).unwrap();
        assert_eq!(out, "2017-03-27");
    }

    #[test]
    fn parse_then_format_round_trips() {
        let generic = generic_for("yyyy-MM-ddTHH:mm:ss.SSS");
        let text = "2017-03-27T15:04:05.123";
        let instant = generic.parse(text, 0, text.len(), &Locale::default_locale()).unwrap();
        let mut out = String::new();
        generic.format(instant, &Locale::default_locale(), "UTC", &mut out).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn rejects_trailing_garbage_like_the_specialized_executor_does() {
        let generic = generic_for("yyyy-MM-dd");
        let err = generic.parse("2017-03-27X", 0, 11, &Locale::default_locale()).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError { kind: ParseErrorKind::TailGarbage, .. })));
    }
}
