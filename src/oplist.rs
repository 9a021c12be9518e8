//! Op-list builder and greedy promotion (spec §3, §4.3).
//!
//! An [`Op`] is either a field operation or a reference into the
//! [`DelimiterTable`]; the positive/negative encoding described in the spec
//! is modeled directly as an enum rather than as a signed integer, since this
//! port has no reason to share a single numeric representation between the
//! two cases.

use crate::symbols::Opcode;
use crate::tokenizer::{tokenize, Token};

/// Ordered table of literal delimiter strings, keyed by insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct DelimiterTable {
    entries: Vec<String>,
}

impl DelimiterTable {
    fn push(&mut self, s: &str) -> usize {
        self.entries.push(s.to_string());
        self.entries.len() - 1
    }

    pub(crate) fn get(&self, index: usize) -> &str {
        &self.entries[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// One element of the op stream: a field operation, or an index into the
/// pattern's [`DelimiterTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Field(Opcode),
    Delimiter(usize),
}

/// Build the op stream and delimiter table for `pattern[lo..hi]`, with
/// greedy promotion already applied.
pub(crate) fn build(pattern: &str, lo: usize, hi: usize) -> (Vec<Op>, DelimiterTable) {
    let tokens = tokenize(pattern, lo, hi);
    let mut delimiters = DelimiterTable::default();
    let mut ops = Vec::with_capacity(tokens.len());

    for token in &tokens {
        match *token {
            Token::Symbol(opcode) => ops.push(Op::Field(opcode)),
            Token::Literal(text) => {
                let index = delimiters.push(text);
                ops.push(Op::Delimiter(index));
            }
        }
    }

    promote_greedy(&mut ops);
    (ops, delimiters)
}

/// Promote the last field op before every delimiter boundary (and before
/// end-of-pattern) to its greedy twin, and promote the op immediately before
/// an `AM_PM` op the same way (spec §4.3: AM/PM is an end-of-field boundary
/// for the hour).
fn promote_greedy(ops: &mut [Op]) {
    for i in 0..ops.len() {
        let is_boundary = match ops.get(i) {
            Some(Op::Delimiter(_)) => true,
            None => true,
            Some(Op::Field(Opcode::AmPm)) => true,
            _ => false,
        };
        if !is_boundary {
            continue;
        }
        if i == 0 {
            continue;
        }
        if let Op::Field(opcode) = ops[i - 1] {
            if let Some(greedy) = opcode.greedy_twin() {
                ops[i - 1] = Op::Field(greedy);
            }
        }
    }
    // End-of-pattern boundary: the last op, if a promotable field op, is
    // also greedy (the loop above only handles interior/AM_PM boundaries
    // since `ops.get(ops.len())` is `None` and isn't iterated).
    if let Some(Op::Field(opcode)) = ops.last().copied() {
        if let Some(greedy) = opcode.greedy_twin() {
            *ops.last_mut().unwrap() = Op::Field(greedy);
        }
    }
}
