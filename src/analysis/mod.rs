//! Dataflow analysis over a compiled op list (spec §4.4, §4.5).

pub(crate) mod format;
pub(crate) mod parse;
