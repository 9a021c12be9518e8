//! Format analyzer (spec §4.4): computes the minimal set of calendar fields
//! the format routine must materialize up front.

use crate::oplist::Op;
use crate::symbols::Opcode;

bitflags_lite! {
    /// Which derived calendar fields the format routine needs.
    pub(crate) struct FormatAttrs: u16 {
        const YEAR        = 1 << 0;
        const LEAP        = 1 << 1;
        const MONTH       = 1 << 2;
        const DAY         = 1 << 3;
        const HOUR        = 1 << 4;
        const MINUTE      = 1 << 5;
        const SECOND      = 1 << 6;
        const MILLIS      = 1 << 7;
        const DAY_OF_WEEK = 1 << 8;
    }
}

impl FormatAttrs {
    /// Walk the op list and OR-bit the attributes each op requires.
    pub(crate) fn analyze(ops: &[Op]) -> Self {
        let mut attrs = FormatAttrs::empty();
        for op in ops {
            let opcode = match op {
                Op::Field(opcode) => *opcode,
                Op::Delimiter(_) => continue,
            };
            attrs.insert(attrs_for(opcode));
        }
        attrs
    }

    /// Whether any bit that needs the date (year/month/day) side of the
    /// instant decomposed is set, gating `calendar::decompose_date`'s
    /// year-counting loop for patterns that only reference the clock
    /// (spec §4.6 step 1: materialize only the fields actually needed).
    pub(crate) fn needs_date(self) -> bool {
        self.contains(FormatAttrs::YEAR)
            || self.contains(FormatAttrs::LEAP)
            || self.contains(FormatAttrs::MONTH)
            || self.contains(FormatAttrs::DAY)
            || self.contains(FormatAttrs::DAY_OF_WEEK)
    }

    /// Whether any bit that needs the wall-clock side of the instant
    /// decomposed is set. See [`Self::needs_date`].
    pub(crate) fn needs_time(self) -> bool {
        self.contains(FormatAttrs::HOUR)
            || self.contains(FormatAttrs::MINUTE)
            || self.contains(FormatAttrs::SECOND)
            || self.contains(FormatAttrs::MILLIS)
    }
}

fn attrs_for(opcode: Opcode) -> FormatAttrs {
    use Opcode::*;
    match opcode {
        Era | Year1 | Year2 | Year4 | YearGreedy => FormatAttrs::YEAR,
        Month1 | MonthGreedy | Month2 | MonthShort | MonthLong => {
            FormatAttrs::YEAR | FormatAttrs::LEAP | FormatAttrs::MONTH
        }
        Day1 | DayGreedy | Day2 => {
            FormatAttrs::YEAR | FormatAttrs::LEAP | FormatAttrs::MONTH | FormatAttrs::DAY
        }
        DayNameShort | DayNameLong | DayOfWeek => FormatAttrs::DAY_OF_WEEK,
        AmPm
        | Hour24_1
        | Hour24Greedy
        | Hour24_2
        | Hour1Based24_1
        | Hour1Based24Greedy
        | Hour1Based24_2
        | Hour12_1
        | Hour12Greedy
        | Hour12_2
        | Hour1Based12_1
        | Hour1Based12Greedy
        | Hour1Based12_2 => FormatAttrs::HOUR,
        Minute1 | MinuteGreedy | Minute2 => FormatAttrs::MINUTE,
        Second1 | SecondGreedy | Second2 => FormatAttrs::SECOND,
        Millis1 | MillisGreedy | Millis3 => FormatAttrs::MILLIS,
        TimezoneShort
        | TimezoneGmt
        | TimezoneLong
        | TimezoneRfc822
        | TimezoneIso1
        | TimezoneIso2
        | TimezoneIso3 => FormatAttrs::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oplist::build;

    #[test]
    fn date_only_pattern_needs_year_leap_month_day() {
        let (ops, _) = build("yyyy-MM-dd", 0, 10);
        let attrs = FormatAttrs::analyze(&ops);
        assert!(attrs.contains(FormatAttrs::YEAR));
        assert!(attrs.contains(FormatAttrs::LEAP));
        assert!(attrs.contains(FormatAttrs::MONTH));
        assert!(attrs.contains(FormatAttrs::DAY));
        assert!(!attrs.contains(FormatAttrs::HOUR));
        assert!(!attrs.contains(FormatAttrs::DAY_OF_WEEK));
    }

    #[test]
    fn timezone_only_pattern_needs_nothing() {
        let (ops, _) = build("z", 0, 1);
        assert_eq!(FormatAttrs::analyze(&ops), FormatAttrs::empty());
    }

    #[test]
    fn weekday_name_needs_day_of_week_only() {
        let (ops, _) = build("EEE", 0, 3);
        let attrs = FormatAttrs::analyze(&ops);
        assert!(attrs.contains(FormatAttrs::DAY_OF_WEEK));
        assert!(!attrs.contains(FormatAttrs::YEAR));
    }

    #[test]
    fn hour_or_am_pm_need_hour() {
        let (ops, _) = build("h:mma", 0, 5);
        let attrs = FormatAttrs::analyze(&ops);
        assert!(attrs.contains(FormatAttrs::HOUR));
        assert!(attrs.contains(FormatAttrs::MINUTE));
    }
}
