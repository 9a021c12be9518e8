//! Small internal helpers shared across modules.

/// Minimal macro standing in for a `bitflags`-style bitset. Pulling in the
/// `bitflags` crate for the handful of small, fixed bitsets this crate needs
/// (nine bits for [`FormatAttrs`](crate::analysis::format::FormatAttrs), nine
/// for [`ParseSlots`](crate::analysis::parse::ParseSlots)) would be more
/// machinery than the problem calls for; the teacher's own style favors
/// small hand-written helpers (`internals.rs`) over reaching for a crate
/// when a dozen lines of plain code do the job.
macro_rules! bitflags_lite {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $repr:ty {
            $(const $flag:ident = $value:expr;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name($repr);

        impl $name {
            $(pub(crate) const $flag: Self = Self($value);)*

            pub(crate) const fn empty() -> Self {
                Self(0)
            }

            pub(crate) fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            pub(crate) fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}
