//! A specializing compiler for date/time format patterns.
//!
//! Given a pattern string such as `yyyy-MM-ddTHH:mm:ss.SSSz`, [`Compiler`]
//! produces a pattern-specialized executor whose [`DateFormat::parse`] and
//! [`DateFormat::format`] cost is proportional to what that particular
//! pattern actually uses: no branching on opcodes the pattern doesn't
//! contain, no default-initialization for fields the pattern always
//! supplies, no locale lookups for fields the pattern never names.
//!
//! ```
//! use dtfmt_compiler::{Compiler, DateFormat, Locale};
//!
//! let mut compiler = Compiler::new();
//! let format = compiler.compile("yyyy-MM-dd").unwrap();
//!
//! let mut text = String::new();
//! format.format(1_490_572_800_000, &Locale::default_locale(), "UTC", &mut text).unwrap();
//! assert_eq!(text, "2017-03-27");
//!
//! let instant = format.parse(&text, 0, text.len(), &Locale::default_locale()).unwrap();
//! assert_eq!(instant, 1_490_572_800_000);
//! ```
//!
//! The pipeline itself — [tokenizer](tokenizer), [op-list builder](oplist),
//! [dataflow analyzers](analysis), [code emitter](exec) — is internal; this
//! is the crate's compiled-executor surface, plus [`GenericDateFormat`] for
//! callers who want the reference interpreter instead of a specialized one
//! (e.g. to compile many one-off patterns where specialization cost isn't
//! worth paying).

use core::fmt;

#[macro_use]
mod util;

mod analysis;
mod calendar;
mod compile;
pub mod error;
mod exec;
mod generic;
mod locale;
mod oplist;
mod sink;
mod symbols;
mod tokenizer;

pub use compile::{CompiledFormat, Compiler};
pub use error::Error;
pub use generic::GenericDateFormat;
pub use locale::Locale;

/// What a compiled pattern can do: read an instant back out of text, and
/// write an instant into a sink. Implemented by both the specialized
/// [`CompiledFormat`] and the unspecialized [`GenericDateFormat`], so
/// callers can depend on this trait rather than on which one they compiled
/// to (spec §4.12's "either realization, identical observable contract").
pub trait DateFormat {
    /// Parse `text[lo..hi]` against this pattern, returning UTC
    /// milliseconds since the epoch. `lo`/`hi` let a pattern be matched
    /// against a slice of a larger string without an intermediate
    /// allocation, mirroring [`Compiler::compile_range`].
    fn parse(&self, text: &str, lo: usize, hi: usize, locale: &Locale) -> Result<i64, Error>;

    /// Format `instant` (UTC milliseconds since the epoch) into `sink`.
    /// `zone_label` is written verbatim wherever the pattern contains a
    /// timezone field (spec §1: time-zone *resolution* is an external
    /// collaborator this crate doesn't own; it only renders what it's
    /// given).
    fn format<W: fmt::Write>(
        &self,
        instant: i64,
        locale: &Locale,
        zone_label: &str,
        sink: &mut W,
    ) -> fmt::Result;
}
