//! SGR state tracking.
//!
//! Folds the scanner's token stream into runs of literal text, each stamped
//! with the style state active while it was scanned. Directives are state
//! transitions, never content.

use crate::scanner::Token;
use crate::style::{AnsiColor, StyleState};

/// A maximal span of literal text paired with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: StyleState,
}

/// Fold tokens into styled runs. Concatenating the run texts in order
/// reproduces the literal content of the input exactly.
pub fn runs(tokens: impl Iterator<Item = Token>) -> Vec<Run> {
    let mut style = StyleState::default();
    let mut out = Vec::new();
    for token in tokens {
        match token {
            Token::Literal(text) => out.push(Run { text, style }),
            Token::Directive(codes) => apply(&mut style, &codes),
        }
    }
    out
}

/// Apply one directive's codes cumulatively, left to right. Later codes win
/// on conflict for the same attribute.
fn apply(style: &mut StyleState, codes: &[u16]) {
    if codes.is_empty() {
        // ESC[m == ESC[0m
        *style = StyleState::default();
        return;
    }

    let mut codes = codes.iter().copied();
    while let Some(code) = codes.next() {
        match code {
            0 => *style = StyleState::default(),
            1 => style.bold = true,
            3 => style.italic = true,
            4 => style.underline = true,
            22 => style.bold = false,
            23 => style.italic = false,
            24 => style.underline = false,
            30..=37 => style.fg = AnsiColor::from_index((code - 30) as u8),
            39 => style.fg = None,
            40..=47 => style.bg = AnsiColor::from_index((code - 40) as u8),
            49 => style.bg = None,
            90..=97 => style.fg = AnsiColor::from_index((code - 90 + 8) as u8),
            100..=107 => style.bg = AnsiColor::from_index((code - 100 + 8) as u8),
            // Extended colors (256 and 24-bit) are out of scope, but their
            // arguments must be consumed so `38;5;31` is not misread as a
            // classic color code.
            38 | 48 => skip_extended_color(&mut codes),
            other => tracing::trace!(code = other, "ignoring unsupported SGR code"),
        }
    }
}

fn skip_extended_color(codes: &mut impl Iterator<Item = u16>) {
    match codes.next() {
        Some(5) => {
            // 256 color mode
            codes.next();
        }
        Some(2) => {
            // 24-bit RGB
            codes.next();
            codes.next();
            codes.next();
        }
        _ => {}
    }
}
