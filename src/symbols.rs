//! Static mapping from pattern symbols to [`Opcode`]s.
//!
//! The canonical symbol set is fixed: the letters `G y M d E u a H k K h m s
//! S z Z x`, each with a maximum recognized repeat count. The [tokenizer](crate::tokenizer)
//! is seeded from this table's keys and always prefers the longest match.

/// A single field operation a compiled pattern can contain.
///
/// Greedy variants (`*Greedy`) are never produced by symbol lookup directly;
/// they only appear after [greedy promotion](crate::oplist::promote_greedy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    Era,
    Year1,
    Year2,
    Year4,
    YearGreedy,
    Month1,
    MonthGreedy,
    Month2,
    MonthShort,
    MonthLong,
    Day1,
    DayGreedy,
    Day2,
    DayNameShort,
    DayNameLong,
    DayOfWeek,
    AmPm,
    Hour24_1,
    Hour24Greedy,
    Hour24_2,
    Hour1Based24_1,
    Hour1Based24Greedy,
    Hour1Based24_2,
    Hour12_1,
    Hour12Greedy,
    Hour12_2,
    Hour1Based12_1,
    Hour1Based12Greedy,
    Hour1Based12_2,
    Minute1,
    MinuteGreedy,
    Minute2,
    Second1,
    SecondGreedy,
    Second2,
    Millis1,
    MillisGreedy,
    Millis3,
    TimezoneShort,
    TimezoneGmt,
    TimezoneLong,
    TimezoneRfc822,
    TimezoneIso1,
    TimezoneIso2,
    TimezoneIso3,
}

impl Opcode {
    /// Whether this opcode is a greedy (variable-width) digit field.
    pub(crate) fn is_greedy(self) -> bool {
        matches!(
            self,
            Opcode::YearGreedy
                | Opcode::MonthGreedy
                | Opcode::DayGreedy
                | Opcode::Hour24Greedy
                | Opcode::Hour1Based24Greedy
                | Opcode::Hour12Greedy
                | Opcode::Hour1Based12Greedy
                | Opcode::MinuteGreedy
                | Opcode::SecondGreedy
                | Opcode::MillisGreedy
        )
    }

    /// The greedy twin of a one-digit field op, if it has one. Fixed-width
    /// two/three/four-digit ops and name/era ops have no greedy twin and
    /// return `None` (see spec §4.3: only one-digit ops are promoted).
    pub(crate) fn greedy_twin(self) -> Option<Opcode> {
        Some(match self {
            Opcode::Year1 => Opcode::YearGreedy,
            Opcode::Month1 => Opcode::MonthGreedy,
            Opcode::Day1 => Opcode::DayGreedy,
            Opcode::Hour24_1 => Opcode::Hour24Greedy,
            Opcode::Hour1Based24_1 => Opcode::Hour1Based24Greedy,
            Opcode::Hour12_1 => Opcode::Hour12Greedy,
            Opcode::Hour1Based12_1 => Opcode::Hour1Based12Greedy,
            Opcode::Minute1 => Opcode::MinuteGreedy,
            Opcode::Second1 => Opcode::SecondGreedy,
            Opcode::Millis1 => Opcode::MillisGreedy,
            _ => return None,
        })
    }
}

/// Look up the opcode for `symbol` repeated `count` times, e.g. `('y', 4)` →
/// [`Opcode::Year4`]. Returns `None` if the pair isn't a recognized pattern
/// symbol (the tokenizer then treats the run as a literal).
pub(crate) fn lookup(symbol: char, count: usize) -> Option<Opcode> {
    use Opcode::*;
    Some(match (symbol, count) {
        ('G', 1..=4) => Era,
        ('y', 1) => Year1,
        ('y', 2) => Year2,
        ('y', 4) => Year4,
        ('M', 1) => Month1,
        ('M', 2) => Month2,
        ('M', 3) => MonthShort,
        ('M', 4) => MonthLong,
        ('d', 1) => Day1,
        ('d', 2) => Day2,
        ('E', 1) => DayNameShort,
        ('E', 2..=4) => DayNameLong,
        ('u', 1) => DayOfWeek,
        ('a', 1) => AmPm,
        ('H', 1) => Hour24_1,
        ('H', 2) => Hour24_2,
        ('k', 1) => Hour1Based24_1,
        ('k', 2) => Hour1Based24_2,
        ('K', 1) => Hour12_1,
        ('K', 2) => Hour12_2,
        ('h', 1) => Hour1Based12_1,
        ('h', 2) => Hour1Based12_2,
        ('m', 1) => Minute1,
        ('m', 2) => Minute2,
        ('s', 1) => Second1,
        ('s', 2) => Second2,
        ('S', 1) => Millis1,
        ('S', 3) => Millis3,
        ('z', 1) => TimezoneShort,
        ('z', 2) => TimezoneGmt,
        ('z', 3) => TimezoneLong,
        ('Z', 1..=4) => TimezoneRfc822,
        ('x', 1) => TimezoneIso1,
        ('x', 2) => TimezoneIso2,
        ('x', 3) => TimezoneIso3,
        _ => return None,
    })
}

/// Every character that can start a pattern symbol. Used by the tokenizer to
/// decide, at each position, whether to try matching a symbol run at all.
pub(crate) const SYMBOL_CHARS: &[char] = &[
    'G', 'y', 'M', 'd', 'E', 'u', 'a', 'H', 'k', 'K', 'h', 'm', 's', 'S', 'z', 'Z', 'x',
];

/// The maximum repeat count this table will ever try for a symbol character,
/// used by the tokenizer as an upper bound on its longest-match scan.
pub(crate) const MAX_SYMBOL_REPEAT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_every_documented_symbol() {
        assert_eq!(lookup('y', 4), Some(Opcode::Year4));
        assert_eq!(lookup('M', 3), Some(Opcode::MonthShort));
        assert_eq!(lookup('S', 3), Some(Opcode::Millis3));
        assert_eq!(lookup('x', 3), Some(Opcode::TimezoneIso3));
    }

    #[test]
    fn rejects_unknown_repeat_counts() {
        assert_eq!(lookup('y', 3), None);
        assert_eq!(lookup('d', 3), None);
        assert_eq!(lookup('S', 2), None);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(lookup('Q', 1), None);
    }

    #[test]
    fn greedy_twins_exist_only_for_one_digit_ops() {
        assert_eq!(Opcode::Year1.greedy_twin(), Some(Opcode::YearGreedy));
        assert_eq!(Opcode::Year2.greedy_twin(), None);
        assert_eq!(Opcode::Year4.greedy_twin(), None);
        assert_eq!(Opcode::MonthShort.greedy_twin(), None);
        assert_eq!(Opcode::Era.greedy_twin(), None);
    }
}
