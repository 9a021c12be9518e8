//! Parse analyzer (spec §4.5): computes which local slots are written by
//! every op on all execution paths, so the emitter knows which slots still
//! need a default-initialized value before the first op runs.

use crate::oplist::Op;
use crate::symbols::Opcode;

bitflags_lite! {
    /// Local slots the parse routine materializes.
    pub(crate) struct ParseSlots: u16 {
        const DAY        = 1 << 0;
        const MONTH      = 1 << 1;
        const YEAR       = 1 << 2;
        const HOUR       = 1 << 3;
        const MINUTE     = 1 << 4;
        const SECOND     = 1 << 5;
        const MILLIS     = 1 << 6;
        const ERA        = 1 << 7;
        const TEMP_LONG  = 1 << 8;
    }
}

impl ParseSlots {
    /// Walk the op list and OR-bit the slots each op unconditionally writes.
    ///
    /// The four-digit year op and the timezone op are branches with two
    /// arms (spec §4.7 points 3-4); only the slot(s) written on *every* arm
    /// are counted here, per the merge-point discipline in spec §4.7 and
    /// SPEC_FULL.md §4.7: a slot written on only one arm still gets its
    /// §4.5 default applied before the branch, so it is always defined by
    /// the time of the merge regardless of which arm ran.
    pub(crate) fn analyze(ops: &[Op]) -> Self {
        let mut slots = ParseSlots::empty();
        for op in ops {
            if let Op::Field(opcode) = op {
                slots.insert(slots_for(*opcode));
            }
        }
        slots
    }
}

fn slots_for(opcode: Opcode) -> ParseSlots {
    use Opcode::*;
    match opcode {
        Era => ParseSlots::ERA,
        // Year4 participates in the two-digit/negative-year branch (spec
        // §4.7 point 3); both arms write `year`, so it's unconditional.
        Year1 | Year2 | Year4 | YearGreedy => ParseSlots::YEAR,
        Month1 | MonthGreedy | Month2 | MonthShort | MonthLong => ParseSlots::MONTH,
        Day1 | DayGreedy | Day2 => ParseSlots::DAY,
        // Weekday/day-of-week ops don't feed `compute` directly (they're
        // cross-checked against the computed date, not a reconstruction
        // input) and so write no slot the epilogue depends on.
        DayNameShort | DayNameLong | DayOfWeek => ParseSlots::empty(),
        // AM_PM only ever writes `hour_type`, which is always initialized
        // (spec §4.5 "additional always-initialized slots") and so isn't
        // part of this bitset at all.
        AmPm => ParseSlots::empty(),
        Hour24_1
        | Hour24Greedy
        | Hour24_2
        | Hour1Based24_1
        | Hour1Based24Greedy
        | Hour1Based24_2 => ParseSlots::HOUR,
        // HOUR_12 ops conditionally flip `hour_type` but unconditionally
        // write the `hour` slot itself.
        Hour12_1
        | Hour12Greedy
        | Hour12_2
        | Hour1Based12_1
        | Hour1Based12Greedy
        | Hour1Based12_2 => ParseSlots::HOUR,
        Minute1 | Minute2 => ParseSlots::MINUTE,
        // Open question (spec §9 / SPEC_FULL.md §9): every `*_GREEDY` op,
        // minute included, sets both its own slot and `temp_long` uniformly.
        MinuteGreedy => ParseSlots::MINUTE | ParseSlots::TEMP_LONG,
        Second1 | Second2 => ParseSlots::SECOND,
        SecondGreedy => ParseSlots::SECOND | ParseSlots::TEMP_LONG,
        Millis1 | Millis3 => ParseSlots::MILLIS,
        MillisGreedy => ParseSlots::MILLIS | ParseSlots::TEMP_LONG,
        // Timezone ops write either `offset` or `timezone`, neither of which
        // is in the `ParseSlots` set (both are always-initialized per
        // spec §4.5), so they contribute nothing here.
        TimezoneShort
        | TimezoneGmt
        | TimezoneLong
        | TimezoneRfc822
        | TimezoneIso1
        | TimezoneIso2
        | TimezoneIso3 => ParseSlots::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oplist::build;

    #[test]
    fn full_date_time_pattern_writes_every_date_time_slot() {
        let (ops, _) = build("yyyy-MM-ddTHH:mm:ss.SSS", 0, 23);
        let slots = ParseSlots::analyze(&ops);
        assert!(slots.contains(ParseSlots::YEAR));
        assert!(slots.contains(ParseSlots::MONTH));
        assert!(slots.contains(ParseSlots::DAY));
        assert!(slots.contains(ParseSlots::HOUR));
        assert!(slots.contains(ParseSlots::MINUTE));
        assert!(slots.contains(ParseSlots::SECOND));
        assert!(slots.contains(ParseSlots::MILLIS));
    }

    #[test]
    fn slot_set_is_subset_of_opcodes_present() {
        // era and day-of-week alone write nothing the epilogue reads.
        let (ops, _) = build("G u", 0, 3);
        assert_eq!(ParseSlots::analyze(&ops), ParseSlots::ERA);
    }

    #[test]
    fn greedy_minute_sets_minute_and_temp_long() {
        let (ops, _) = build("H:m", 0, 3);
        let slots = ParseSlots::analyze(&ops);
        assert!(slots.contains(ParseSlots::MINUTE));
        assert!(slots.contains(ParseSlots::TEMP_LONG));
    }
}
