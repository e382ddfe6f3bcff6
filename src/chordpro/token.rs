//! Content line tokenization
//!
//!     This module provides the raw tokenization of song content lines using
//!     the logos lexer library. A content line is lexed into chord, incomplete
//!     chord, text and brace tokens; the segmenter turns those into AST
//!     segments.
//!
//!     The capture bounds live in the token regexes themselves: a chord body is
//!     1 to 8 characters between brackets
//!     ([MAX_CHORD_BODY](super::bounds::MAX_CHORD_BODY)), and an unterminated
//!     `[` captures at most 8 characters
//!     ([MAX_INCOMPLETE_CHORD](super::bounds::MAX_INCOMPLETE_CHORD)). logos
//!     compiles these to a DFA, so matching is single-pass with no
//!     backtracking: a megabyte of `[` characters lexes into bounded
//!     incomplete captures in linear time.
//!
//!     Longest match settles the chord/incomplete ambiguity: at a `[`, a
//!     closing `]` within the bound always yields `Chord`; otherwise the
//!     bounded prefix yields `IncompleteChord`. A literal `[` never lexes as
//!     text.

use logos::Logos;
use std::ops::Range;

/// Raw tokens of a song content line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SegmentToken {
    /// `[body]` with a 1-8 character body excluding `]` and newline.
    #[regex(r"\[[^\]\n]{1,8}\]")]
    Chord,

    /// `[` plus up to 8 captured characters, no closing `]` in reach.
    #[regex(r"\[[^\]\n]{0,8}")]
    IncompleteChord,

    /// A run of characters that are not `[`, `{`, `}` or newline.
    #[regex(r"[^\[{}\n]+")]
    Text,

    /// A stray `{` inside a content line; consumed as literal text.
    #[token("{")]
    OpenBrace,

    /// A stray `}` inside a content line; consumed as literal text.
    #[token("}")]
    CloseBrace,
}

/// Tokenize one content line with location information.
///
/// Returns tokens paired with their byte ranges in the line. The segmenter
/// operates on this output rather than calling logos directly.
pub fn tokenize_line(line: &str) -> Vec<(SegmentToken, Range<usize>)> {
    let mut lexer = SegmentToken::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
