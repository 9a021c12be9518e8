//! Error types (spec §7), grounded on the teacher's `error.rs` (unified
//! top-level `Error` enum delegating `Display`/`source` to its variants,
//! `From` conversions at every seam) and `format/parse.rs`'s `Error` enum
//! of specific parse failure kinds.

use core::fmt;

/// Any error this crate can return, whether from compiling a pattern or
/// from executing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Compile(CompileError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compile(e) => e.fmt(f),
            Error::Parse(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compile(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<CompileError> for Error {
    fn from(original: CompileError) -> Self {
        Error::Compile(original)
    }
}

impl From<ParseError> for Error {
    fn from(original: ParseError) -> Self {
        Error::Parse(original)
    }
}

/// An error that can occur while compiling a pattern into an executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern's op list would overflow the compiler's scratch buffers.
    PatternTooLarge { len: usize, max: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::PatternTooLarge { len, max } => write!(
                f,
                "pattern produces {} ops, which exceeds the maximum of {}",
                len, max
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompileError {}

/// An error that occurred while parsing text against a compiled pattern,
/// carrying the byte position in the input where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::CalendarOutOfRange(e) => Some(e),
            _ => None,
        }
    }
}

/// The specific way a parse attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before the pattern's remaining ops could be satisfied.
    ShortInput,
    /// A digit field op expected an ASCII digit and found something else.
    BadDigit,
    /// A literal delimiter in the pattern did not match the input text.
    DelimiterMismatch { expected: String, found: String },
    /// A locale-matched field (weekday, month, era, AM/PM, time zone) had
    /// no candidate name prefixing the remaining input.
    NameLookupFailed { field: &'static str },
    /// Input remained after every op in the pattern had consumed its text.
    TailGarbage,
    /// The parsed fields were individually well-formed but inconsistent as
    /// a calendar date (e.g. February 30th).
    CalendarOutOfRange(ComponentRange),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::ShortInput => f.write_str("unexpected end of input"),
            ParseErrorKind::BadDigit => f.write_str("expected an ASCII digit"),
            ParseErrorKind::DelimiterMismatch { expected, found } => {
                write!(f, "expected {:?}, found {:?}", expected, found)
            }
            ParseErrorKind::NameLookupFailed { field } => {
                write!(f, "no recognized {} name at this position", field)
            }
            ParseErrorKind::TailGarbage => f.write_str("unexpected trailing input"),
            ParseErrorKind::CalendarOutOfRange(range) => range.fmt(f),
        }
    }
}

impl From<ComponentRange> for ParseErrorKind {
    fn from(original: ComponentRange) -> Self {
        ParseErrorKind::CalendarOutOfRange(original)
    }
}

/// A single calendar component that was outside the range required to form
/// a valid date, grounded on the teacher's `ComponentRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRange {
    pub name: &'static str,
    pub minimum: i64,
    pub maximum: i64,
    pub value: i64,
}

impl fmt::Display for ComponentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be in the range {}..={}, was {}",
            self.name, self.minimum, self.maximum, self.value
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComponentRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_range_display_includes_value() {
        let range = ComponentRange { name: "day", minimum: 1, maximum: 28, value: 30 };
        assert_eq!(range.to_string(), "day must be in the range 1..=28, was 30");
    }

    #[test]
    fn parse_error_display_includes_position() {
        let err = ParseError { kind: ParseErrorKind::ShortInput, position: 4 };
        assert_eq!(err.to_string(), "unexpected end of input at position 4");
    }

    #[test]
    fn error_from_conversions_compose() {
        let parse_err = ParseError { kind: ParseErrorKind::TailGarbage, position: 9 };
        let err: Error = parse_err.clone().into();
        assert_eq!(err, Error::Parse(parse_err));
    }
}
