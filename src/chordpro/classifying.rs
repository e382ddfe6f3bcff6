//! Directive classifier
//!
//!     Given a line that opens with `{`, the classifier resolves it against the
//!     closed set of directive grammars: scan the name, look it up in the alias
//!     table, then parse the argument according to the kind's shape. Directive
//!     names are pairwise distinct, so the name lookup can match at most one
//!     grammar; there is no alternation to order.
//!
//!     If no complete grammar matches (unknown name, malformed argument, or a
//!     missing closing brace), the classifier captures a bounded run of raw
//!     characters and emits an incomplete directive line. This is a first-class
//!     output, not an error: the classifier always consumes the whole line and
//!     never aborts the parse.
//!
//!     All scans are bounded by the caps in [bounds](super::bounds). The
//!     chord-definition body grammar is a statically declared regex with
//!     explicit bounded quantifiers; the regex engine is linear-time, so no
//!     body can trigger catastrophic backtracking.

use super::ast::{ChordDefinition, ChordShape, Directive, DirectiveArgument, Line, TitlesAlignment};
use super::bounds::{
    MAX_DIRECTIVE_NAME, MAX_FREE_TEXT, MAX_INCOMPLETE_DIRECTIVE, MAX_NUMBER_DIGITS,
};
use super::directives::{lookup_name, ArgumentShape, DirectiveKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// The full `define`/`chord` body: name, base fret, fret sequence, optional
/// finger sequence, single-whitespace separators, caps matching
/// [bounds](super::bounds).
static CHORD_DEFINITION_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^\s{}]{1,10})\sbase-fret\s(?P<base>\d{1,10})\sfrets\s(?P<frets>[0-9xXN\-\s]{1,50})(?:\sfingers\s(?P<fingers>[0-9\-\s]{1,20}))?$",
    )
    .unwrap()
});

/// The name-only short form, accepted for `chord` but not `define`.
static CHORD_NAME_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s{}]{1,10}$").unwrap());

/// Classify one directive line.
///
/// The line must start with `{` (the assembler dispatches on that). Returns
/// either a resolved [Line::Directive] or a [Line::IncompleteDirective]
/// carrying the bounded raw capture.
pub fn classify_directive_line(line: &str) -> Line {
    match try_directive(line) {
        Some(directive) => Line::Directive(directive),
        None => Line::IncompleteDirective(incomplete_capture(line)),
    }
}

/// Attempt a complete directive match over the whole line.
fn try_directive(line: &str) -> Option<Directive> {
    let mut cursor = Cursor::new(line);
    if !cursor.eat('{') {
        return None;
    }

    let name = cursor.take_while_bounded(MAX_DIRECTIVE_NAME, |c| {
        c.is_ascii_lowercase() || c == '_'
    });
    let kind = lookup_name(name)?;

    let argument = match kind.argument_shape() {
        ArgumentShape::None => None,
        ArgumentShape::FreeText => Some(DirectiveArgument::FreeText(free_text(&mut cursor)?)),
        ArgumentShape::OptionalFreeText => {
            if cursor.peek() == Some(':') {
                Some(DirectiveArgument::FreeText(free_text(&mut cursor)?))
            } else {
                None
            }
        }
        ArgumentShape::Number => Some(DirectiveArgument::Number(number(&mut cursor)?)),
        ArgumentShape::TitlesAlignment => {
            Some(DirectiveArgument::TitlesAlignment(alignment(&mut cursor)?))
        }
        ArgumentShape::ChordDefinition => {
            let body = argument_body(&mut cursor)?;
            Some(DirectiveArgument::ChordDefinition(chord_definition(
                &body, kind,
            )?))
        }
    };

    close(&mut cursor)?;
    Some(Directive::new(kind, argument))
}

/// `: text` with the colon's whitespace run skipped and the text bounded.
fn free_text(cursor: &mut Cursor) -> Option<String> {
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    let text = cursor.take_while_bounded(MAX_FREE_TEXT, |c| c != '{' && c != '}');
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

/// `: digits`, all digits, fitting `u32`.
fn number(cursor: &mut Cursor) -> Option<u32> {
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    let digits = cursor.take_while_bounded(MAX_NUMBER_DIGITS, |c| c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `: left|right|center`, lowercase.
fn alignment(cursor: &mut Cursor) -> Option<TitlesAlignment> {
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    let word = cursor.take_while_bounded(6, |c| c.is_ascii_lowercase());
    match word {
        "left" => Some(TitlesAlignment::Left),
        "right" => Some(TitlesAlignment::Right),
        "center" => Some(TitlesAlignment::Center),
        _ => None,
    }
}

/// The raw argument body up to the closing brace, bounded, for grammars
/// matched as a whole (chord definitions).
fn argument_body(cursor: &mut Cursor) -> Option<String> {
    if !cursor.eat(':') {
        return None;
    }
    cursor.skip_whitespace();
    let body = cursor.take_while_bounded(MAX_FREE_TEXT, |c| c != '{' && c != '}');
    if body.is_empty() {
        return None;
    }
    Some(body.to_string())
}

/// Match a chord definition body against the full grammar, falling back to the
/// name-only short form for `chord`.
fn chord_definition(body: &str, kind: DirectiveKind) -> Option<ChordDefinition> {
    if let Some(caps) = CHORD_DEFINITION_BODY.captures(body) {
        let base_fret = caps["base"].parse().ok()?;
        return Some(ChordDefinition {
            chord_name: caps["name"].to_string(),
            shape: Some(ChordShape {
                base_fret,
                frets: caps["frets"].to_string(),
                fingers: caps.name("fingers").map(|m| m.as_str().to_string()),
            }),
        });
    }
    if kind == DirectiveKind::Chord && CHORD_NAME_ONLY.is_match(body) {
        return Some(ChordDefinition {
            chord_name: body.to_string(),
            shape: None,
        });
    }
    None
}

/// The closing brace, allowing only trailing whitespace after it.
fn close(cursor: &mut Cursor) -> Option<()> {
    if cursor.eat('}') && cursor.rest_is_blank() {
        Some(())
    } else {
        None
    }
}

/// Bounded raw capture for a construct that matched no grammar: everything
/// after `{` up to `}` or line end, truncated to the cap.
fn incomplete_capture(line: &str) -> String {
    line.strip_prefix('{')
        .unwrap_or(line)
        .chars()
        .take_while(|&c| c != '}')
        .take(MAX_INCOMPLETE_DIRECTIVE)
        .collect()
}

/// A left-to-right scan position within one line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume characters while the predicate holds, stopping at the cap.
    /// Characters past the cap stay unconsumed and re-enter matching.
    fn take_while_bounded(&mut self, max_chars: usize, pred: impl Fn(char) -> bool) -> &'a str {
        let mut end = 0;
        let mut count = 0;
        for (idx, ch) in self.rest.char_indices() {
            if count == max_chars || !pred(ch) {
                break;
            }
            end = idx + ch.len_utf8();
            count += 1;
        }
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    fn rest_is_blank(&self) -> bool {
        self.rest.chars().all(char::is_whitespace)
    }
}
