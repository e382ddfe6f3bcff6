//! Testing utilities for document assertions
//!
//!     Fluent assertion helpers for parsed documents. What we want for every
//!     document test is assurance on the line sequence shape and content, not
//!     generalities like node counts alone; spelling that out with nested
//!     `match` blocks buries the intent in boilerplate. The fluent API keeps a
//!     whole-document assertion readable:
//!
//! ```rust,ignore
//! use chordpro_parser::chordpro::testing::assert_document;
//!
//! assert_document(&doc)
//!     .line_count(2)
//!     .line(0, |line| {
//!         line.assert_directive()
//!             .kind(DirectiveKind::Title)
//!             .free_text("Amazing Grace");
//!     })
//!     .line(1, |line| {
//!         line.assert_song().chord(0, "C").lyric(1, "Amazing ");
//!     });
//! ```

use super::ast::{Directive, DirectiveArgument, Document, Line, Segment, SongLine, TitlesAlignment};
use super::directives::DirectiveKind;

/// Entry point for fluent document assertions.
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.len(),
            expected,
            "expected {} lines, got {}: {:?}",
            expected,
            self.doc.len(),
            self.doc.lines
        );
        self
    }

    pub fn well_formed(self) -> Self {
        assert!(
            self.doc.is_well_formed(),
            "expected a well-formed document, found {:?}",
            self.doc.incomplete_nodes()
        );
        self
    }

    pub fn line(self, index: usize, f: impl FnOnce(LineAssertion<'a>)) -> Self {
        let line = self
            .doc
            .lines
            .get(index)
            .unwrap_or_else(|| panic!("no line at index {}", index));
        f(LineAssertion { line, index });
        self
    }
}

pub struct LineAssertion<'a> {
    line: &'a Line,
    index: usize,
}

impl<'a> LineAssertion<'a> {
    pub fn assert_directive(self) -> DirectiveAssertion<'a> {
        match self.line {
            Line::Directive(directive) => DirectiveAssertion {
                directive,
                index: self.index,
            },
            other => panic!("line {}: expected directive, got {:?}", self.index, other),
        }
    }

    pub fn assert_song(self) -> SongAssertion<'a> {
        match self.line {
            Line::Song(song) => SongAssertion {
                song,
                index: self.index,
            },
            other => panic!("line {}: expected song line, got {:?}", self.index, other),
        }
    }

    pub fn assert_empty(self) {
        assert_eq!(
            self.line,
            &Line::Empty,
            "line {}: expected empty line",
            self.index
        );
    }

    pub fn assert_incomplete_directive(self, expected_raw: &str) {
        match self.line {
            Line::IncompleteDirective(raw) => assert_eq!(
                raw, expected_raw,
                "line {}: incomplete directive capture mismatch",
                self.index
            ),
            other => panic!(
                "line {}: expected incomplete directive, got {:?}",
                self.index, other
            ),
        }
    }
}

pub struct DirectiveAssertion<'a> {
    directive: &'a Directive,
    index: usize,
}

impl DirectiveAssertion<'_> {
    pub fn kind(self, expected: DirectiveKind) -> Self {
        assert_eq!(
            self.directive.kind, expected,
            "line {}: directive kind mismatch",
            self.index
        );
        self
    }

    pub fn no_argument(self) -> Self {
        assert_eq!(
            self.directive.argument, None,
            "line {}: expected no argument",
            self.index
        );
        self
    }

    pub fn free_text(self, expected: &str) -> Self {
        match &self.directive.argument {
            Some(DirectiveArgument::FreeText(text)) => {
                assert_eq!(text, expected, "line {}: free text mismatch", self.index)
            }
            other => panic!(
                "line {}: expected free text argument, got {:?}",
                self.index, other
            ),
        }
        self
    }

    pub fn number(self, expected: u32) -> Self {
        assert_eq!(
            self.directive.argument,
            Some(DirectiveArgument::Number(expected)),
            "line {}: number argument mismatch",
            self.index
        );
        self
    }

    pub fn alignment(self, expected: TitlesAlignment) -> Self {
        assert_eq!(
            self.directive.argument,
            Some(DirectiveArgument::TitlesAlignment(expected)),
            "line {}: alignment argument mismatch",
            self.index
        );
        self
    }

    pub fn chord_name(self, expected: &str) -> Self {
        match &self.directive.argument {
            Some(DirectiveArgument::ChordDefinition(definition)) => assert_eq!(
                definition.chord_name, expected,
                "line {}: chord name mismatch",
                self.index
            ),
            other => panic!(
                "line {}: expected chord definition argument, got {:?}",
                self.index, other
            ),
        }
        self
    }
}

pub struct SongAssertion<'a> {
    song: &'a SongLine,
    index: usize,
}

impl SongAssertion<'_> {
    pub fn segment_count(self, expected: usize) -> Self {
        assert_eq!(
            self.song.segments.len(),
            expected,
            "line {}: expected {} segments, got {:?}",
            self.index,
            expected,
            self.song.segments
        );
        self
    }

    fn segment(&self, index: usize) -> &Segment {
        self.song
            .segments
            .get(index)
            .unwrap_or_else(|| panic!("line {}: no segment at index {}", self.index, index))
    }

    pub fn chord(self, index: usize, expected: &str) -> Self {
        assert_eq!(
            self.segment(index),
            &Segment::Chord(expected.to_string()),
            "line {}: segment {} mismatch",
            self.index,
            index
        );
        self
    }

    pub fn lyric(self, index: usize, expected: &str) -> Self {
        assert_eq!(
            self.segment(index),
            &Segment::Lyric(expected.to_string()),
            "line {}: segment {} mismatch",
            self.index,
            index
        );
        self
    }

    pub fn incomplete_chord(self, index: usize, expected: &str) -> Self {
        assert_eq!(
            self.segment(index),
            &Segment::IncompleteChord(expected.to_string()),
            "line {}: segment {} mismatch",
            self.index,
            index
        );
        self
    }
}
