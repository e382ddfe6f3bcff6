//! AST definitions for parsed ChordPro documents
//!
//!     A document is an ordered sequence of lines; order is the only
//!     relationship between them, there is no nesting. Each line is either a
//!     resolved directive, an incomplete directive capture, a song line of
//!     chord/lyric segments, or an empty line.
//!
//!     Everything here is parse-time output: nodes are built bottom-up by the
//!     scanning/classifying/segmenting stages, assembled once, and never
//!     mutated afterwards. The document is owned by the caller; the parser
//!     keeps no state across calls.
//!
//! Incomplete constructs
//!
//!     Malformed input does not fail the parse. An unrecognized or unterminated
//!     `{...}` becomes an [IncompleteDirective](Line::IncompleteDirective) line,
//!     an unterminated `[...` becomes an [IncompleteChord](Segment::IncompleteChord)
//!     segment, and both carry their bounded raw capture. Callers that want
//!     strict validation post-process with [Document::is_well_formed] or
//!     [Document::incomplete_nodes]; the parser itself is permissive by
//!     contract.

use super::directives::DirectiveKind;

/// A parsed ChordPro document: the input's lines, in input order, 1:1.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub lines: Vec<Line>,
}

/// One input line, classified.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Line {
    /// A `{name}` or `{name: argument}` construct that matched a known grammar.
    Directive(Directive),

    /// A `{...}` construct that matched no known grammar or was unterminated.
    /// Carries the bounded raw capture (everything after `{`, up to `}` or
    /// line end).
    IncompleteDirective(String),

    /// A content line of chord and lyric segments.
    Song(SongLine),

    /// An empty or whitespace-only line.
    Empty,
}

/// A resolved directive. The argument always agrees with the kind's
/// statically known shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub argument: Option<DirectiveArgument>,
}

/// A directive argument, one variant per argument grammar.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DirectiveArgument {
    FreeText(String),
    Number(u32),
    ChordDefinition(ChordDefinition),
    TitlesAlignment(TitlesAlignment),
}

/// The body of a `define` or `chord` directive.
///
/// `chord` has a name-only short form, so the fretting block is optional as a
/// whole; `define` always carries it. Fingers without frets is not
/// representable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChordDefinition {
    pub chord_name: String,
    pub shape: Option<ChordShape>,
}

/// The `base-fret N frets <seq> [fingers <seq>]` block of a chord definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChordShape {
    pub base_fret: u32,
    pub frets: String,
    pub fingers: Option<String>,
}

/// Title placement for the `titles` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TitlesAlignment {
    Left,
    Right,
    Center,
}

impl TitlesAlignment {
    /// The literal spelling accepted by the `titles` directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            TitlesAlignment::Left => "left",
            TitlesAlignment::Right => "right",
            TitlesAlignment::Center => "center",
        }
    }
}

/// A content line: an ordered sequence of chord and lyric segments.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SongLine {
    pub segments: Vec<Segment>,
}

/// One segment of a song line.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Segment {
    /// An inline `[chord]` annotation, brackets stripped.
    Chord(String),

    /// A run of lyric text.
    Lyric(String),

    /// A `[...` that never closed; carries the bounded capture after `[`.
    IncompleteChord(String),
}

/// A reference to an incomplete construct found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteNode<'a> {
    Directive(&'a str),
    Chord(&'a str),
}

impl Document {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn with_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All resolved directives, in input order.
    pub fn iter_directives(&self) -> impl Iterator<Item = &Directive> {
        self.lines.iter().filter_map(|line| match line {
            Line::Directive(directive) => Some(directive),
            _ => None,
        })
    }

    /// All song lines, in input order.
    pub fn iter_song_lines(&self) -> impl Iterator<Item = &SongLine> {
        self.lines.iter().filter_map(|line| match line {
            Line::Song(song) => Some(song),
            _ => None,
        })
    }

    /// The first free-text argument for a directive kind, if present.
    pub fn free_text_of(&self, kind: DirectiveKind) -> Option<&str> {
        self.iter_directives().find_map(|directive| {
            if directive.kind != kind {
                return None;
            }
            match &directive.argument {
                Some(DirectiveArgument::FreeText(text)) => Some(text.as_str()),
                _ => None,
            }
        })
    }

    /// The song title, if a `{title: ...}` directive is present.
    pub fn title(&self) -> Option<&str> {
        self.free_text_of(DirectiveKind::Title)
    }

    /// The song subtitle, if a `{subtitle: ...}` directive is present.
    pub fn subtitle(&self) -> Option<&str> {
        self.free_text_of(DirectiveKind::Subtitle)
    }

    /// Every incomplete construct in the document, in input order.
    pub fn incomplete_nodes(&self) -> Vec<IncompleteNode<'_>> {
        let mut nodes = Vec::new();
        for line in &self.lines {
            match line {
                Line::IncompleteDirective(raw) => nodes.push(IncompleteNode::Directive(raw)),
                Line::Song(song) => {
                    for segment in &song.segments {
                        if let Segment::IncompleteChord(raw) = segment {
                            nodes.push(IncompleteNode::Chord(raw));
                        }
                    }
                }
                _ => {}
            }
        }
        nodes
    }

    /// True when every construct matched a known grammar.
    pub fn is_well_formed(&self) -> bool {
        self.incomplete_nodes().is_empty()
    }
}

impl SongLine {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn with_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Append a segment, merging consecutive lyric runs into one segment.
    pub fn push(&mut self, segment: Segment) {
        if let Segment::Lyric(text) = &segment {
            if let Some(Segment::Lyric(last)) = self.segments.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.segments.push(segment);
    }

    /// The chord names on this line, in order.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Chord(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The lyric text of this line with chords stripped.
    pub fn lyric_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            if let Segment::Lyric(lyric) = segment {
                text.push_str(lyric);
            }
        }
        text
    }
}

impl Directive {
    pub fn new(kind: DirectiveKind, argument: Option<DirectiveArgument>) -> Self {
        Self { kind, argument }
    }
}
