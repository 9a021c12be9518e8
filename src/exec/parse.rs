//! Code emitter, parse side (spec §4.7).
//!
//! Mirrors [`crate::exec::format`]'s shape: `build_actions` resolves each op
//! to a [`ParseAction`] that already knows its width/field/transform, and
//! `run_parse` is the trampoline that executes the resolved list against one
//! input string. The low-level digit/delimiter/locale-match consumption
//! helpers are free functions rather than methods on [`ParseState`] so
//! [`crate::generic`]'s runtime interpreter can call the exact same,
//! independently-tested primitives while dispatching on [`Opcode`] directly
//! instead of on a precomputed [`ParseAction`].

use crate::analysis::parse::ParseSlots;
use crate::calendar::{self, CivilDateTime};
use crate::error::{ParseError, ParseErrorKind};
use crate::locale::Locale;
use crate::oplist::{DelimiterTable, Op};
use crate::symbols::Opcode;

/// Which parsed field a numeric op writes and how to transform the raw
/// digit value before storing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericField {
    Year,
    Month,
    Day,
    /// `one_based`: `k`/`kk` read 1..24 and subtract 1 before storing.
    Hour24 { one_based: bool },
    /// `K`/`KK` (0..11) and `h`/`hh` (1..12) both end up stored the same
    /// way: `value % 12`, so `12` (the top of the `h`/`hh` cycle) collapses
    /// to `0` exactly like `K`'s native zero. See [`HourType`] for how
    /// AM/PM later turns that back into a 24-hour value.
    Hour12,
    Minute,
    Second,
    Millis,
}

/// One resolved parse instruction, carrying everything [`action_for`]
/// already decided about the op it was built from.
#[derive(Debug, Clone)]
pub(crate) enum ParseAction {
    FixedDigits { width: usize, field: NumericField },
    GreedyDigits { field: NumericField },
    /// `yy`: fixed two digits, two-digit-year pivot always applied.
    YearTwoDigits,
    /// `y` promoted to greedy: pivot applied only if exactly two digits are
    /// actually captured (spec §8 scenario 2).
    GreedyYear,
    /// `yyyy`: the sign-branch fixed four-digit year (spec §4.7 point 3).
    FourDigitYear,
    Era,
    MonthName,
    WeekdayName,
    /// `u`: single ISO weekday digit, consumed and validated but not
    /// stored (spec §4.5's slot set has no day-of-week slot).
    DayOfWeekNumber,
    AmPm,
    /// Any of the seven timezone opcodes (spec §4.7 point 4).
    Timezone,
    DelimiterChar(char),
    DelimiterStr(Box<str>),
}

pub(crate) fn build_actions(ops: &[Op], delimiters: &DelimiterTable) -> Vec<ParseAction> {
    ops.iter()
        .map(|op| match op {
            Op::Delimiter(idx) => {
                let text = delimiters.get(*idx);
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ParseAction::DelimiterChar(c),
                    _ => ParseAction::DelimiterStr(text.into()),
                }
            }
            Op::Field(opcode) => action_for(*opcode),
        })
        .collect()
}

fn action_for(opcode: Opcode) -> ParseAction {
    use Opcode::*;
    match opcode {
        Era => ParseAction::Era,
        Year1 => ParseAction::FixedDigits { width: 1, field: NumericField::Year },
        Year2 => ParseAction::YearTwoDigits,
        Year4 => ParseAction::FourDigitYear,
        YearGreedy => ParseAction::GreedyYear,
        Month1 => ParseAction::FixedDigits { width: 1, field: NumericField::Month },
        MonthGreedy => ParseAction::GreedyDigits { field: NumericField::Month },
        Month2 => ParseAction::FixedDigits { width: 2, field: NumericField::Month },
        MonthShort | MonthLong => ParseAction::MonthName,
        Day1 => ParseAction::FixedDigits { width: 1, field: NumericField::Day },
        DayGreedy => ParseAction::GreedyDigits { field: NumericField::Day },
        Day2 => ParseAction::FixedDigits { width: 2, field: NumericField::Day },
        DayNameShort | DayNameLong => ParseAction::WeekdayName,
        DayOfWeek => ParseAction::DayOfWeekNumber,
        AmPm => ParseAction::AmPm,
        Hour24_1 => ParseAction::FixedDigits { width: 1, field: NumericField::Hour24 { one_based: false } },
        Hour24Greedy => ParseAction::GreedyDigits { field: NumericField::Hour24 { one_based: false } },
        Hour24_2 => ParseAction::FixedDigits { width: 2, field: NumericField::Hour24 { one_based: false } },
        Hour1Based24_1 => ParseAction::FixedDigits { width: 1, field: NumericField::Hour24 { one_based: true } },
        Hour1Based24Greedy => ParseAction::GreedyDigits { field: NumericField::Hour24 { one_based: true } },
        Hour1Based24_2 => ParseAction::FixedDigits { width: 2, field: NumericField::Hour24 { one_based: true } },
        Hour12_1 => ParseAction::FixedDigits { width: 1, field: NumericField::Hour12 },
        Hour12Greedy => ParseAction::GreedyDigits { field: NumericField::Hour12 },
        Hour12_2 => ParseAction::FixedDigits { width: 2, field: NumericField::Hour12 },
        Hour1Based12_1 => ParseAction::FixedDigits { width: 1, field: NumericField::Hour12 },
        Hour1Based12Greedy => ParseAction::GreedyDigits { field: NumericField::Hour12 },
        Hour1Based12_2 => ParseAction::FixedDigits { width: 2, field: NumericField::Hour12 },
        Minute1 => ParseAction::FixedDigits { width: 1, field: NumericField::Minute },
        MinuteGreedy => ParseAction::GreedyDigits { field: NumericField::Minute },
        Minute2 => ParseAction::FixedDigits { width: 2, field: NumericField::Minute },
        Second1 => ParseAction::FixedDigits { width: 1, field: NumericField::Second },
        SecondGreedy => ParseAction::GreedyDigits { field: NumericField::Second },
        Second2 => ParseAction::FixedDigits { width: 2, field: NumericField::Second },
        Millis1 => ParseAction::FixedDigits { width: 1, field: NumericField::Millis },
        MillisGreedy => ParseAction::GreedyDigits { field: NumericField::Millis },
        Millis3 => ParseAction::FixedDigits { width: 3, field: NumericField::Millis },
        TimezoneShort | TimezoneGmt | TimezoneLong | TimezoneRfc822 | TimezoneIso1
        | TimezoneIso2 | TimezoneIso3 => ParseAction::Timezone,
    }
}

/// Whether `hour` was read from a 12-hour-clock op, and if so which half of
/// the day AM/PM last told us it's in. `Hour24` is also the value a pattern
/// with no hour op at all leaves untouched (spec §8 boundary behavior:
/// "HOUR_12 with no AM/PM: hour_type stays HOUR_24").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HourType {
    Hour24,
    Am,
    Pm,
}

/// The mutable scratchpad the parse routine writes into as it consumes
/// input, one field per spec §4.5/§4.7 slot plus the cursor and the
/// always-initialized zone/offset/hour-type slots. Shared verbatim by
/// [`crate::generic`]'s interpreter, which dispatches on [`Opcode`]
/// directly instead of on a precomputed [`ParseAction`] but needs the same
/// slot-writing/finishing semantics.
pub(crate) struct ParseState<'a> {
    pub(crate) day: u8,
    pub(crate) month: u8,
    pub(crate) year: i32,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) millis: u16,
    pub(crate) era: u8,
    pub(crate) pos: usize,
    pub(crate) zone_name: Option<&'a str>,
    pub(crate) offset_minutes: Option<i32>,
    pub(crate) hour_type: HourType,
}

impl<'a> ParseState<'a> {
    /// `slots` is the parse analyzer's output (spec §4.5): bits set there
    /// are written by some op on every path, so this constructor skips
    /// assigning their default value and leaves the field zeroed until the
    /// op that owns it runs. Slots *not* in the set get their spec §4.5
    /// default applied up front since nothing else will ever write them.
    pub(crate) fn new(lo: usize, slots: ParseSlots) -> Self {
        let mut state = ParseState {
            day: 0,
            month: 0,
            year: 0,
            hour: 0,
            minute: 0,
            second: 0,
            millis: 0,
            era: 0,
            pos: lo,
            zone_name: None,
            offset_minutes: None,
            hour_type: HourType::Hour24,
        };
        if !slots.contains(ParseSlots::DAY) {
            state.day = 1;
        }
        if !slots.contains(ParseSlots::MONTH) {
            state.month = 1;
        }
        if !slots.contains(ParseSlots::YEAR) {
            state.year = 1970;
        }
        if !slots.contains(ParseSlots::ERA) {
            state.era = 1;
        }
        // HOUR/MINUTE/SECOND/MILLIS all default to zero, which is already
        // `state`'s unconditional initial value above; no branch needed.
        state
    }

    pub(crate) fn store_numeric(&mut self, field: NumericField, raw: i64) {
        match field {
            NumericField::Year => self.year = raw as i32,
            NumericField::Month => self.month = raw as u8,
            NumericField::Day => self.day = raw as u8,
            NumericField::Hour24 { one_based } => {
                self.hour = (if one_based { raw - 1 } else { raw }) as u8
            }
            NumericField::Hour12 => self.hour = raw.rem_euclid(12) as u8,
            NumericField::Minute => self.minute = raw as u8,
            NumericField::Second => self.second = raw as u8,
            NumericField::Millis => self.millis = raw as u16,
        }
    }

    /// Reconcile `hour`/`hour_type` into a 24-hour value and reduce the
    /// `era`/`year` pair into astronomical year numbering, then hand the
    /// civil fields to the calendar library and apply any zone offset.
    pub(crate) fn finish(self) -> Result<i64, ParseErrorKind> {
        let hour24 = match self.hour_type {
            HourType::Hour24 => self.hour,
            HourType::Am => self.hour % 12,
            HourType::Pm => self.hour % 12 + 12,
        };
        // era 0 = BC: 1 BC is astronomical year 0, 2 BC is -1, and so on.
        let year = if self.era == 0 { 1 - self.year } else { self.year };
        let civil = CivilDateTime {
            year,
            month: self.month,
            day: self.day,
            hour: hour24,
            minute: self.minute,
            second: self.second,
            millis: self.millis,
        };
        let naive = calendar::compute_instant(civil)?;
        Ok(naive - self.offset_minutes.unwrap_or(0) as i64 * calendar::MILLIS_PER_MINUTE)
    }
}

/// Run the resolved action list against `text[lo..hi]`. `slots` is the
/// parse analyzer's output for the same op list `actions` was built from
/// (spec §4.5), used to skip default-initializing slots every op writes
/// unconditionally.
pub(crate) fn run_parse(
    actions: &[ParseAction],
    slots: ParseSlots,
    text: &str,
    lo: usize,
    hi: usize,
    locale: &Locale,
) -> Result<i64, ParseError> {
    let mut state = ParseState::new(lo, slots);
    for action in actions {
        run_one(action, text, hi, &mut state, locale)
            .map_err(|kind| ParseError { kind, position: state.pos })?;
    }
    if state.pos != hi {
        return Err(ParseError { kind: ParseErrorKind::TailGarbage, position: state.pos });
    }
    state.finish().map_err(|kind| ParseError { kind, position: hi })
}

fn run_one(
    action: &ParseAction,
    text: &str,
    hi: usize,
    state: &mut ParseState<'_>,
    locale: &Locale,
) -> Result<(), ParseErrorKind> {
    match action {
        ParseAction::FixedDigits { width, field } => {
            let (value, len) = consume_exact_digits(text, state.pos, hi, *width)?;
            state.store_numeric(*field, value);
            state.pos += len;
        }
        ParseAction::GreedyDigits { field } => {
            let (value, len) = consume_greedy_digits(text, state.pos, hi)?;
            state.store_numeric(*field, value);
            state.pos += len;
        }
        ParseAction::YearTwoDigits => {
            let (value, len) = consume_exact_digits(text, state.pos, hi, 2)?;
            state.year = adjust_two_digit_year(value);
            state.pos += len;
        }
        ParseAction::GreedyYear => {
            let (value, len) = consume_greedy_digits(text, state.pos, hi)?;
            state.year = if len == 2 { adjust_two_digit_year(value) } else { value as i32 };
            state.pos += len;
        }
        ParseAction::FourDigitYear => {
            let (value, len) = consume_four_digit_year(text, state.pos, hi)?;
            state.year = value;
            state.pos += len;
        }
        ParseAction::Era => {
            let (era, len) = locale
                .match_era(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "era" })?;
            state.era = era;
            state.pos += len;
        }
        ParseAction::MonthName => {
            let (month, len) = locale
                .match_month(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "month" })?;
            state.month = month;
            state.pos += len;
        }
        ParseAction::WeekdayName => {
            let (_, len) = locale
                .match_weekday(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "weekday" })?;
            state.pos += len;
        }
        ParseAction::DayOfWeekNumber => {
            let (_, len) = consume_exact_digits(text, state.pos, hi, 1)?;
            state.pos += len;
        }
        ParseAction::AmPm => {
            let (is_pm, len) = locale
                .match_am_pm(&text[state.pos..hi])
                .ok_or(ParseErrorKind::NameLookupFailed { field: "am_pm" })?;
            state.hour_type = if is_pm { HourType::Pm } else { HourType::Am };
            state.pos += len;
        }
        ParseAction::Timezone => {
            if let Some((minutes, len)) = parse_offset(text, state.pos, hi) {
                state.offset_minutes = Some(minutes);
                state.pos += len;
            } else if let Some(len) = locale.match_zone_name(&text[state.pos..hi]) {
                state.zone_name = Some(&text[state.pos..state.pos + len]);
                state.pos += len;
            } else {
                return Err(ParseErrorKind::NameLookupFailed { field: "timezone" });
            }
        }
        ParseAction::DelimiterChar(c) => consume_char(text, state, hi, *c)?,
        ParseAction::DelimiterStr(s) => consume_str(text, state, hi, s)?,
    }
    Ok(())
}

/// `00..=68` pivots to `2000..=2068`, `69..=99` to `1969..=1999` (spec §9 /
/// SPEC_FULL.md §9: the `strptime`/glibc `%y` pivot, adopted as the oracle
/// for the source's unspecified `adjustYear`).
pub(crate) fn adjust_two_digit_year(value: i64) -> i32 {
    if value <= 68 {
        2000 + value as i32
    } else {
        1900 + value as i32
    }
}

/// Parse exactly `width` ASCII decimal digits starting at `pos`. Returns
/// `(value, width)` so callers can advance `pos` uniformly whether the
/// field was fixed-width or greedy.
pub(crate) fn consume_exact_digits(
    text: &str,
    pos: usize,
    hi: usize,
    width: usize,
) -> Result<(i64, usize), ParseErrorKind> {
    if pos + width > hi {
        return Err(ParseErrorKind::ShortInput);
    }
    let slice = &text.as_bytes()[pos..pos + width];
    let mut value: i64 = 0;
    for &b in slice {
        if !b.is_ascii_digit() {
            return Err(ParseErrorKind::BadDigit);
        }
        value = value * 10 + (b - b'0') as i64;
    }
    Ok((value, width))
}

/// Read a maximal run of ASCII decimal digits starting at `pos`, up to
/// `hi`. Fails if the run is empty (spec §8: "empty read is `BadDigit`").
pub(crate) fn consume_greedy_digits(
    text: &str,
    pos: usize,
    hi: usize,
) -> Result<(i64, usize), ParseErrorKind> {
    let slice = &text.as_bytes()[pos..hi];
    let len = slice.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(ParseErrorKind::BadDigit);
    }
    let mut value: i64 = 0;
    for &b in &slice[..len] {
        value = value * 10 + (b - b'0') as i64;
    }
    Ok((value, len))
}

/// The four-digit-year two-way branch (spec §4.7 point 3): a leading `-`
/// makes the following four digits a negated (BCE-leaning) year, otherwise
/// they're read as a plain non-negative year.
pub(crate) fn consume_four_digit_year(
    text: &str,
    pos: usize,
    hi: usize,
) -> Result<(i32, usize), ParseErrorKind> {
    if pos < hi && text.as_bytes()[pos] == b'-' {
        let (value, len) = consume_exact_digits(text, pos + 1, hi, 4)?;
        Ok((-(value as i32), len + 1))
    } else {
        let (value, len) = consume_exact_digits(text, pos, hi, 4)?;
        Ok((value as i32, len))
    }
}

/// Try to read a numeric UTC offset at `pos`: `Z`, `+HH`, `+HHMM`, or
/// `+HH:MM` (and `-` equivalents). Returns the offset in minutes east of
/// UTC and the number of bytes consumed, or `None` if `pos` doesn't start
/// with a recognizable numeric offset (the timezone op's fallback branch
/// then tries a locale zone-name match instead).
pub(crate) fn parse_offset(text: &str, pos: usize, hi: usize) -> Option<(i32, usize)> {
    let bytes = text.as_bytes();
    if pos >= hi {
        return None;
    }
    if bytes[pos] == b'Z' || bytes[pos] == b'z' {
        return Some((0, 1));
    }
    let sign = match bytes[pos] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hour, hour_len) = consume_exact_digits(text, pos + 1, hi, 2).ok()?;
    let mut consumed = 1 + hour_len;
    let mut cursor = pos + consumed;
    if cursor < hi && bytes[cursor] == b':' {
        cursor += 1;
        consumed += 1;
    }
    let minute = if let Ok((minute, minute_len)) = consume_exact_digits(text, cursor, hi, 2) {
        consumed += minute_len;
        minute
    } else {
        0
    };
    Some((sign * (hour as i32 * 60 + minute as i32), consumed))
}

pub(crate) fn consume_char(
    text: &str,
    state: &mut ParseState<'_>,
    hi: usize,
    expected: char,
) -> Result<(), ParseErrorKind> {
    let rest = &text[state.pos..hi];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c == expected => {
            state.pos += c.len_utf8();
            Ok(())
        }
        Some(c) => Err(ParseErrorKind::DelimiterMismatch {
            expected: expected.to_string(),
            found: c.to_string(),
        }),
        None => Err(ParseErrorKind::ShortInput),
    }
}

pub(crate) fn consume_str(
    text: &str,
    state: &mut ParseState<'_>,
    hi: usize,
    expected: &str,
) -> Result<(), ParseErrorKind> {
    let rest = &text[state.pos..hi];
    if rest.starts_with(expected) {
        state.pos += expected.len();
        Ok(())
    } else if rest.len() < expected.len() {
        Err(ParseErrorKind::ShortInput)
    } else {
        Err(ParseErrorKind::DelimiterMismatch {
            expected: expected.to_string(),
            found: rest.chars().take(expected.chars().count()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::format::FormatAttrs;
    use crate::exec::format::{build_actions as build_format_actions, run_format};
    use crate::oplist::build;

    fn parse_pattern(pattern: &str, text: &str) -> Result<i64, ParseError> {
        let (ops, delimiters) = build(pattern, 0, pattern.len());
        let actions = build_actions(&ops, &delimiters);
        let slots = ParseSlots::analyze(&ops);
        run_parse(&actions, slots, text, 0, text.len(), &Locale::default_locale())
    }

    #[test]
    fn parses_a_full_date_time_pattern() {
        let instant = parse_pattern("yyyy-MM-ddTHH:mm:ss.SSS", "2017-03-27T15:04:05.123").unwrap();
        let dt = CivilDateTime { year: 2017, month: 3, day: 27, hour: 15, minute: 4, second: 5, millis: 123 };
        assert_eq!(instant, dt.to_instant_millis().unwrap());
    }

    #[test]
    fn two_digit_year_field_applies_the_pivot() {
        // "d/M/y" promotes the trailing `y` to greedy; a two-digit capture
        // still gets the same pivot as an explicit `yy` would.
        let instant = parse_pattern("d/M/y", "7/4/21").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!((dt.year, dt.month, dt.day), (2021, 4, 7));
    }

    #[test]
    fn twelve_am_collapses_to_midnight() {
        let instant = parse_pattern("h:mma", "12:00AM").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!((dt.hour, dt.minute), (0, 0));
    }

    #[test]
    fn one_based_24_hour_maps_24_to_23() {
        let instant = parse_pattern("kk", "24").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!(dt.hour, 23);
    }

    #[test]
    fn rfc822_offset_converts_local_time_to_utc() {
        let instant = parse_pattern("EEE, d MMM yyyy HH:mm:ss Z", "Mon, 27 Mar 2017 15:04:05 +0100").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (2017, 3, 27, 14, 4));
    }

    #[test]
    fn fixed_width_pattern_rejects_trailing_garbage() {
        let err = parse_pattern("yyyyMMdd", "201703271").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TailGarbage);
    }

    #[test]
    fn greedy_field_at_end_of_input_rejects_empty_read() {
        let err = parse_pattern("yyyy-MM-dd-H", "2017-03-27-").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::BadDigit);
    }

    #[test]
    fn unmatched_delimiter_reports_mismatch_with_position() {
        let err = parse_pattern("yyyy-MM-dd", "2017/03/27").unwrap_err();
        assert_eq!(err.position, 4);
        assert!(matches!(err.kind, ParseErrorKind::DelimiterMismatch { .. }));
    }

    #[test]
    fn negative_four_digit_year_parses_back_to_minus_one() {
        let instant = parse_pattern("yyyy-MM-dd", "-0001-12-31").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!(dt.year, -1);
    }

    #[test]
    fn a_pattern_with_no_date_ops_defaults_to_the_epoch_date() {
        // "HH:mm" never writes year/month/day, so ParseSlots::analyze
        // leaves those bits unset and ParseState::new must still apply the
        // spec §4.5 defaults (1970-01-01) for them.
        let instant = parse_pattern("HH:mm", "15:04").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!((dt.year, dt.month, dt.day, dt.hour, dt.minute), (1970, 1, 1, 15, 4));
    }

    #[test]
    fn a_pattern_with_no_era_op_defaults_to_ad() {
        // No `G` op: ParseSlots::analyze leaves ERA unset, so the default
        // era (1 = AD) applies and a plain "yyyy" year is read as-is
        // rather than being reduced through the BC/AD conversion.
        let instant = parse_pattern("yyyy-MM-dd", "0100-01-01").unwrap();
        let dt = CivilDateTime::from_instant_millis(instant);
        assert_eq!(dt.year, 100);
    }

    #[test]
    fn empty_pattern_parses_to_the_epoch() {
        assert_eq!(parse_pattern("", "").unwrap(), 0);
    }

    #[test]
    fn format_then_parse_round_trips_for_a_full_coverage_pattern() {
        let pattern = "yyyy-MM-ddTHH:mm:ss.SSS";
        let (ops, delimiters) = build(pattern, 0, pattern.len());
        let attrs = FormatAttrs::analyze(&ops);
        let format_actions = build_format_actions(&ops, &delimiters);
        let parse_actions = build_actions(&ops, &delimiters);

        let slots = ParseSlots::analyze(&ops);
        let original = 1_490_627_045_123; // 2017-03-27T15:04:05.123Z
        let mut text = String::new();
        run_format(&format_actions, attrs, original, Locale::default_locale(), "UTC", &mut text).unwrap();
        let round_tripped =
            run_parse(&parse_actions, slots, &text, 0, text.len(), &Locale::default_locale()).unwrap();
        assert_eq!(round_tripped, original);
    }
}
