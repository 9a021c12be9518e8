//! Locale table module (spec §4.10): month/weekday/era/AM-PM name tables and
//! the matching functions the parse executor uses to recognize them in
//! input text.
//!
//! Grounded on the teacher's `format/date.rs` (`WEEKDAYS_FULL`/`WEEKDAYS_ABBR`
//! /`MONTHS_FULL`/`MONTHS_ABBR` const tables) and `format/parse.rs`'s
//! `try_consume_first_match`. Only one built-in locale is provided, matching
//! the teacher's single hard-coded English table set; richer locale
//! plumbing is out of scope (spec §1).

use crate::calendar::Weekday;

const WEEKDAYS_FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const WEEKDAYS_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS_FULL: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Index 0 = BC, index 1 = AD, so the parse analyzer's default era slot value
// of 1 (spec §4.5) means AD absent any `G` op in the pattern.
const ERA_TEXT: [&str; 2] = ["BC", "AD"];
const AM_PM_TEXT: [&str; 2] = ["AM", "PM"];

/// A name table and its matching rules. Only the default (English) locale
/// exists at the moment; `Locale` is a unit struct so callers have a
/// concrete handle to pass around today and a seam to extend tomorrow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale;

impl Locale {
    pub const fn default_locale() -> Self {
        Locale
    }

    pub(crate) fn weekday_name(self, weekday: Weekday, long: bool) -> &'static str {
        let idx = weekday.number_days_from_monday() as usize;
        if long {
            WEEKDAYS_FULL[idx]
        } else {
            WEEKDAYS_ABBR[idx]
        }
    }

    pub(crate) fn month_name(self, month: u8, long: bool) -> &'static str {
        let idx = month as usize - 1;
        if long {
            MONTHS_FULL[idx]
        } else {
            MONTHS_ABBR[idx]
        }
    }

    pub(crate) fn era_text(self, era: u8) -> &'static str {
        ERA_TEXT[era as usize]
    }

    pub(crate) fn am_pm_text(self, hour_is_pm: bool) -> &'static str {
        AM_PM_TEXT[hour_is_pm as usize]
    }

    /// Match a weekday name at the start of `s`, trying the long-name table
    /// before the short one so `"June"` doesn't get eaten as a short-name
    /// prefix. Returns `(weekday, bytes_consumed)`.
    pub(crate) fn match_weekday(self, s: &str) -> Option<(Weekday, usize)> {
        try_consume_first_match(s, WEEKDAYS_FULL.iter().zip(WEEKDAY_ORDER.iter().copied()))
            .or_else(|| try_consume_first_match(s, WEEKDAYS_ABBR.iter().zip(WEEKDAY_ORDER.iter().copied())))
    }

    /// Match a month name at the start of `s`, long names first. Returns
    /// `(1_based_month, bytes_consumed)`.
    pub(crate) fn match_month(self, s: &str) -> Option<(u8, usize)> {
        try_consume_first_match(s, MONTHS_FULL.iter().zip(1u8..))
            .or_else(|| try_consume_first_match(s, MONTHS_ABBR.iter().zip(1u8..)))
    }

    pub(crate) fn match_era(self, s: &str) -> Option<(u8, usize)> {
        try_consume_first_match(s, ERA_TEXT.iter().zip(0u8..))
    }

    pub(crate) fn match_am_pm(self, s: &str) -> Option<(bool, usize)> {
        try_consume_first_match(s, AM_PM_TEXT.iter().zip([false, true].iter().copied()))
    }

    /// Match a bare time-zone display name at the start of `s` (e.g. `UTC`,
    /// `GMT`, `EST`): a maximal run of ASCII letters. There is no zone
    /// database in scope (spec §1 Non-goals), so any such run is accepted
    /// and carried through verbatim rather than resolved to an offset.
    pub(crate) fn match_zone_name(self, s: &str) -> Option<usize> {
        let len = s.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        if len == 0 {
            None
        } else {
            Some(len)
        }
    }
}

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Try each `(candidate_text, value)` pair in order, returning the value and
/// byte length of the first candidate that prefixes `s`.
fn try_consume_first_match<T: Copy>(
    s: &str,
    opts: impl IntoIterator<Item = (impl AsRef<str>, T)>,
) -> Option<(T, usize)> {
    opts.into_iter().find_map(|(expected, value)| {
        let expected = expected.as_ref();
        if s.starts_with(expected) {
            Some((value, expected.len()))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_month_name_is_preferred_over_short_prefix() {
        let locale = Locale::default_locale();
        let (month, len) = locale.match_month("June 2020").unwrap();
        assert_eq!(month, 6);
        assert_eq!(len, 4);
    }

    #[test]
    fn short_month_name_matches_when_no_long_name_fits() {
        let locale = Locale::default_locale();
        let (month, len) = locale.match_month("Jun 2020").unwrap();
        assert_eq!(month, 6);
        assert_eq!(len, 3);
    }

    #[test]
    fn weekday_round_trips_through_name_and_match() {
        let locale = Locale::default_locale();
        let name = locale.weekday_name(Weekday::Wednesday, true);
        assert_eq!(name, "Wednesday");
        let (weekday, len) = locale.match_weekday("Wednesday,").unwrap();
        assert_eq!(weekday, Weekday::Wednesday);
        assert_eq!(len, "Wednesday".len());
    }

    #[test]
    fn am_pm_text_matches_hour_flag() {
        let locale = Locale::default_locale();
        assert_eq!(locale.am_pm_text(false), "AM");
        assert_eq!(locale.am_pm_text(true), "PM");
        assert_eq!(locale.match_am_pm("PM"), Some((true, 2)));
    }

    #[test]
    fn unmatched_text_returns_none() {
        let locale = Locale::default_locale();
        assert_eq!(locale.match_month("???"), None);
    }

    #[test]
    fn zone_name_matches_a_maximal_letter_run() {
        let locale = Locale::default_locale();
        assert_eq!(locale.match_zone_name("UTC"), Some(3));
        assert_eq!(locale.match_zone_name("EST5EDT"), Some(3));
        assert_eq!(locale.match_zone_name("123"), None);
    }
}
