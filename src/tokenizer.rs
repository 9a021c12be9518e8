//! Longest-match tokenizer: splits a pattern into symbol runs and literal
//! delimiters (spec §4.2).
//!
//! Tokenization cannot fail — every character is either part of a recognized
//! symbol run or part of a literal run. Maximal unmatched runs are grouped
//! into a single literal token, mirroring the teacher's `parse_fmt_string`
//! treatment of the text between two `%`-specifiers as one `Literal` span.

use crate::symbols::{self, Opcode};

/// One token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A recognized pattern symbol, already resolved to its opcode.
    Symbol(Opcode),
    /// A maximal run of characters that did not match any pattern symbol.
    Literal(&'a str),
}

/// Tokenize `pattern[lo..hi]` left to right.
pub(crate) fn tokenize(pattern: &str, lo: usize, hi: usize) -> Vec<Token<'_>> {
    let text = &pattern[lo..hi];
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut literal_start = 0;

    while i < chars.len() {
        let (byte_pos, c) = chars[i];
        if symbols::SYMBOL_CHARS.contains(&c) {
            // Longest match: try the longest run of `c` first, shrinking
            // until a recognized (symbol, count) pair is found.
            let mut run_len = 1;
            while i + run_len < chars.len()
                && chars[i + run_len].1 == c
                && run_len < symbols::MAX_SYMBOL_REPEAT
            {
                run_len += 1;
            }
            let mut matched = None;
            while run_len > 0 {
                if let Some(opcode) = symbols::lookup(c, run_len) {
                    matched = Some((opcode, run_len));
                    break;
                }
                run_len -= 1;
            }
            if let Some((opcode, run_len)) = matched {
                if literal_start < byte_pos {
                    tokens.push(Token::Literal(&text[literal_start..byte_pos]));
                }
                tokens.push(Token::Symbol(opcode));
                i += run_len;
                let end_byte = chars
                    .get(i)
                    .map(|&(p, _)| p)
                    .unwrap_or_else(|| text.len());
                literal_start = end_byte;
                continue;
            }
        }
        i += 1;
    }
    if literal_start < text.len() {
        tokens.push(Token::Literal(&text[literal_start..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Opcode;

    #[test]
    fn splits_symbols_and_literals() {
        let toks = tokenize("yyyy-MM-dd", 0, 10);
        assert_eq!(
            toks,
            vec![
                Token::Symbol(Opcode::Year4),
                Token::Literal("-"),
                Token::Symbol(Opcode::Month2),
                Token::Literal("-"),
                Token::Symbol(Opcode::Day2),
            ]
        );
    }

    #[test]
    fn longest_match_prefers_longer_run() {
        // "HH" must resolve to one Hour24_2, not two Hour24_1 tokens.
        let toks = tokenize("HH:mm", 0, 5);
        assert_eq!(
            toks,
            vec![
                Token::Symbol(Opcode::Hour24_2),
                Token::Literal(":"),
                Token::Symbol(Opcode::Minute2),
            ]
        );
    }

    #[test]
    fn falls_back_to_shorter_match_when_longest_is_unrecognized() {
        // "ddd" isn't a valid day repeat count (only d/dd exist); the longest
        // valid prefix is "dd", leaving one residual "d" to combine with what
        // follows it (so there's no dangling single literal char in between).
        let toks = tokenize("ddd", 0, 3);
        assert_eq!(
            toks,
            vec![Token::Symbol(Opcode::Day2), Token::Symbol(Opcode::Day1)]
        );
    }

    #[test]
    fn unknown_characters_become_a_literal_run() {
        let toks = tokenize("T", 0, 1);
        assert_eq!(toks, vec![Token::Literal("T")]);
    }

    #[test]
    fn empty_pattern_has_no_tokens() {
        assert!(tokenize("", 0, 0).is_empty());
    }

    #[test]
    fn range_restricts_to_the_given_slice() {
        let toks = tokenize("xxyyyyxx", 2, 6);
        assert_eq!(toks, vec![Token::Symbol(Opcode::Year4)]);
    }
}
