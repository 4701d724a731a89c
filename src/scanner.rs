//! ANSI escape sequence scanner.
//!
//! Splits input into literal text runs and SGR directives. Only `ESC[...m`
//! sequences become directives; every other escape sequence (other CSI
//! terminators, truncated sequences, a stray ESC) is passed through as
//! literal text unchanged. Terminal output is frequently truncated or
//! corrupted by buffering, so the scanner never fails on malformed input.

use std::iter::Peekable;
use std::str::Chars;

const ESC: char = '\x1b';

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of literal text. Adjacent literal spans, including degraded
    /// escape sequences, are coalesced into one token.
    Literal(String),
    /// The parameter list of an SGR sequence (`ESC[...m`). An empty list
    /// means reset, matching the `ESC[m` == `ESC[0m` terminal convention.
    Directive(Vec<u16>),
}

/// Lazy token stream over one input string. Single-use; re-scanning
/// requires a fresh [`scan`] call.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    /// Directive recognized while a literal run was still open.
    pending: Option<Vec<u16>>,
}

/// Scan input into a stream of [`Token`]s.
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner {
        chars: input.chars().peekable(),
        pending: None,
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(codes) = self.pending.take() {
            return Some(Token::Directive(codes));
        }

        let mut literal = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == ESC {
                match self.take_sequence() {
                    Sequence::Sgr(codes) => {
                        if literal.is_empty() {
                            return Some(Token::Directive(codes));
                        }
                        self.pending = Some(codes);
                        return Some(Token::Literal(literal));
                    }
                    // Not SGR: the consumed bytes rejoin the literal run.
                    Sequence::PassThrough(text) => literal.push_str(&text),
                }
            } else {
                literal.push(c);
                self.chars.next();
            }
        }

        if literal.is_empty() {
            None
        } else {
            Some(Token::Literal(literal))
        }
    }
}

enum Sequence {
    Sgr(Vec<u16>),
    PassThrough(String),
}

impl Scanner<'_> {
    /// Consume one escape sequence starting at the ESC under the cursor.
    ///
    /// Returns the parsed SGR parameters, or the consumed characters
    /// verbatim when the sequence is not SGR. A malformed byte inside the
    /// parameter list is left unconsumed so it can be rescanned (it may
    /// itself be an ESC).
    fn take_sequence(&mut self) -> Sequence {
        self.chars.next(); // ESC
        if self.chars.peek() != Some(&'[') {
            return Sequence::PassThrough(ESC.to_string());
        }
        self.chars.next(); // '['

        let mut fields = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || c == ';' {
                fields.push(c);
                self.chars.next();
            } else if ('\x40'..='\x7e').contains(&c) {
                // CSI final byte
                self.chars.next();
                if c == 'm' {
                    return Sequence::Sgr(parse_params(&fields));
                }
                tracing::trace!(terminator = %c, "passing through non-SGR sequence");
                return Sequence::PassThrough(format!("{ESC}[{fields}{c}"));
            } else {
                tracing::trace!("passing through malformed escape sequence");
                return Sequence::PassThrough(format!("{ESC}[{fields}"));
            }
        }
        // Input ended mid-sequence.
        Sequence::PassThrough(format!("{ESC}[{fields}"))
    }
}

/// Parse `;`-separated numeric fields. Empty fields read as 0, matching
/// terminal convention; oversized values saturate and later fall into the
/// tracker's unrecognized-code path.
fn parse_params(fields: &str) -> Vec<u16> {
    if fields.is_empty() {
        return Vec::new();
    }
    fields
        .split(';')
        .map(|field| {
            field.bytes().fold(0u16, |n, digit| {
                n.saturating_mul(10).saturating_add(u16::from(digit - b'0'))
            })
        })
        .collect()
}
