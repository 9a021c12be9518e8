//! Character-sink abstraction (spec §4.11).
//!
//! Grounded on the teacher's pervasive `core::fmt::{Formatter, Write}` usage
//! in `format/date.rs`/`format/time.rs`/`format/offset.rs` (`f.write_str(...)`,
//! the `pad!` macro writing zero-padded digits through a `Formatter`). This
//! crate's `format` is a direct method rather than a `Display::fmt` hook, so
//! it is generic over any `W: core::fmt::Write` instead of being tied to a
//! `Formatter` specifically — callers can format into a `String`, a
//! pre-sized buffer, or anything else that implements the trait.

use core::fmt::{self, Write};

/// Write `value` zero-padded to `width` decimal digits, the generic
/// replacement for the teacher's `pad!` macro. `value` must be
/// non-negative; sign handling is the caller's responsibility (see
/// [`write_signed_padded`]).
pub(crate) fn write_padded<W: Write>(sink: &mut W, value: i64, width: usize) -> fmt::Result {
    debug_assert!(value >= 0);
    write!(sink, "{:0width$}", value, width = width)
}

/// Write a possibly-negative value zero-padded to `width` digits of
/// magnitude, with a leading `-` for negative values (used for `yyyy` on
/// years before 1 CE, spec §8 "Year `-0001` with `yyyy` formats as
/// `-0001`").
pub(crate) fn write_signed_padded<W: Write>(sink: &mut W, value: i64, width: usize) -> fmt::Result {
    if value < 0 {
        sink.write_char('-')?;
        write_padded(sink, -value, width)
    } else {
        write_padded(sink, value, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_requested_width() {
        let mut out = String::new();
        write_padded(&mut out, 5, 2).unwrap();
        assert_eq!(out, "05");
    }

    #[test]
    fn does_not_truncate_values_wider_than_the_requested_width() {
        let mut out = String::new();
        write_padded(&mut out, 12345, 2).unwrap();
        assert_eq!(out, "12345");
    }

    #[test]
    fn negative_values_get_a_leading_sign() {
        let mut out = String::new();
        write_signed_padded(&mut out, -1, 4).unwrap();
        assert_eq!(out, "-0001");
    }
}
