//! Emitter for parsed documents
//!
//!     Converts AST nodes back into ChordPro text. Directives print with their
//!     canonical names, so `{t: Foo}` re-emits as `{title: Foo}`: the output is
//!     semantically equivalent to the input, not byte-identical. Incomplete
//!     constructs re-emit their raw captures, which keeps malformed input
//!     visible to diagnostics instead of vanishing from the round trip.

use super::ast::{
    ChordDefinition, Directive, DirectiveArgument, Document, Line, Segment, SongLine,
};

/// Conversion of an AST node to its canonical ChordPro text.
pub trait ToChordProText {
    fn to_chordpro(&self) -> String;
}

impl ToChordProText for Segment {
    fn to_chordpro(&self) -> String {
        match self {
            Segment::Chord(name) => format!("[{}]", name),
            Segment::Lyric(text) => text.clone(),
            Segment::IncompleteChord(raw) => format!("[{}", raw),
        }
    }
}

impl ToChordProText for SongLine {
    fn to_chordpro(&self) -> String {
        self.segments
            .iter()
            .map(Segment::to_chordpro)
            .collect::<Vec<_>>()
            .join("")
    }
}

impl ToChordProText for ChordDefinition {
    fn to_chordpro(&self) -> String {
        let mut body = self.chord_name.clone();
        if let Some(shape) = &self.shape {
            body.push_str(&format!(" base-fret {} frets {}", shape.base_fret, shape.frets));
            if let Some(fingers) = &shape.fingers {
                body.push_str(&format!(" fingers {}", fingers));
            }
        }
        body
    }
}

impl ToChordProText for Directive {
    fn to_chordpro(&self) -> String {
        let name = self.kind.canonical_name();
        match &self.argument {
            None => format!("{{{}}}", name),
            Some(DirectiveArgument::FreeText(text)) => format!("{{{}: {}}}", name, text),
            Some(DirectiveArgument::Number(value)) => format!("{{{}: {}}}", name, value),
            Some(DirectiveArgument::TitlesAlignment(alignment)) => {
                format!("{{{}: {}}}", name, alignment.as_str())
            }
            Some(DirectiveArgument::ChordDefinition(definition)) => {
                format!("{{{}: {}}}", name, definition.to_chordpro())
            }
        }
    }
}

impl ToChordProText for Line {
    fn to_chordpro(&self) -> String {
        match self {
            Line::Directive(directive) => directive.to_chordpro(),
            Line::IncompleteDirective(raw) => format!("{{{}", raw),
            Line::Song(song) => song.to_chordpro(),
            Line::Empty => String::new(),
        }
    }
}

impl ToChordProText for Document {
    fn to_chordpro(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.to_chordpro());
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordpro::assembling::parse;

    #[test]
    fn test_directive_emits_canonical_name() {
        let doc = parse("{t: Foo}\n");
        assert_eq!(doc.to_chordpro(), "{title: Foo}\n");
    }

    #[test]
    fn test_song_line_round_trips() {
        let source = "[C]Amazing [G]grace\n";
        let doc = parse(source);
        assert_eq!(doc.to_chordpro(), source);
    }

    #[test]
    fn test_define_round_trips() {
        let source = "{define: C base-fret 1 frets 0 3 2 0 1 0 fingers 0 2 1 0 1 0}\n";
        let doc = parse(source);
        assert_eq!(doc.to_chordpro(), source);
    }

    #[test]
    fn test_incomplete_constructs_stay_visible() {
        let doc = parse("{titl\n[C\n");
        assert_eq!(doc.to_chordpro(), "{titl\n[C\n");
    }

    #[test]
    fn test_reparse_is_stable() {
        let doc = parse("{soc: Bridge}\nla [Am]la\n{eoc}\n");
        let emitted = doc.to_chordpro();
        assert_eq!(parse(&emitted), doc);
    }
}
