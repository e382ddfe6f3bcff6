//! Document assembler
//!
//!     The assembler drives the pipeline: it consumes the scanner's line
//!     sequence, dispatches each line to the directive classifier or the
//!     content segmenter, and appends the result in input order. No reordering,
//!     deduplication or merging happens across lines; the output has exactly
//!     one [Line](super::ast::Line) per scanned input line.
//!
//!     Parsing is total. Every finite input yields a document; malformed
//!     constructs degrade into incomplete nodes local to their own line. The
//!     only fatal condition lives in the [loader](super::loader), where the
//!     input transport itself can fail.

use super::ast::{Document, Line};
use super::classifying::classify_directive_line;
use super::scanning::Scanner;
use super::segmenting::segment_line;

/// Parse one ChordPro document.
pub fn parse(source: &str) -> Document {
    let scanner = Scanner::new(source);
    let lines = scanner.lines().map(assemble_line).collect();
    Document::with_lines(lines)
}

/// Classify and resolve one scanned line.
///
/// Empty and whitespace-only lines are empty lines; a leading `{` routes to
/// the directive classifier; everything else is song content.
fn assemble_line(raw: &str) -> Line {
    if raw.chars().all(char::is_whitespace) {
        return Line::Empty;
    }
    if raw.starts_with('{') {
        return classify_directive_line(raw);
    }
    Line::Song(segment_line(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordpro::ast::Segment;
    use crate::chordpro::directives::DirectiveKind;

    #[test]
    fn test_line_kinds_dispatch() {
        let doc = parse("{title: X}\n[C]la\n\nplain\n");
        assert_eq!(doc.len(), 4);
        assert!(matches!(&doc.lines[0], Line::Directive(d) if d.kind == DirectiveKind::Title));
        assert!(matches!(&doc.lines[1], Line::Song(_)));
        assert_eq!(doc.lines[2], Line::Empty);
        assert!(matches!(&doc.lines[3], Line::Song(_)));
    }

    #[test]
    fn test_whitespace_only_line_is_empty() {
        let doc = parse("   \t \n");
        assert_eq!(doc.lines, vec![Line::Empty]);
    }

    #[test]
    fn test_order_is_preserved_one_to_one() {
        let source = "one\n{eoc}\n\n{bogus\ntwo\n";
        let doc = parse(source);
        assert_eq!(doc.len(), 5);
        assert!(matches!(&doc.lines[0], Line::Song(_)));
        assert!(matches!(&doc.lines[1], Line::Directive(_)));
        assert!(matches!(&doc.lines[2], Line::Empty));
        assert!(matches!(&doc.lines[3], Line::IncompleteDirective(raw) if raw == "bogus"));
        assert!(matches!(&doc.lines[4], Line::Song(_)));
    }

    #[test]
    fn test_malformed_line_does_not_affect_siblings() {
        let doc = parse("{nope nope\n[C]fine\n");
        assert!(matches!(&doc.lines[0], Line::IncompleteDirective(_)));
        match &doc.lines[1] {
            Line::Song(song) => {
                assert_eq!(song.segments[0], Segment::Chord("C".to_string()));
            }
            other => panic!("expected song line, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_chord_at_eof() {
        let doc = parse("[C");
        match &doc.lines[0] {
            Line::Song(song) => {
                assert_eq!(
                    song.segments,
                    vec![Segment::IncompleteChord("C".to_string())]
                );
            }
            other => panic!("expected song line, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").is_empty());
    }
}
