//! The code emitter (spec §4.6, §4.7): resolves an op list into the two
//! specialized per-pattern action vectors and the trampoline loops that run
//! them. See [`crate::generic`] for the reference interpreter that walks
//! the same op list without this pre-resolution step.

pub(crate) mod format;
pub(crate) mod parse;
