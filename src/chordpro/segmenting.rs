//! Content segmenter
//!
//!     Splits one non-directive, non-empty line into an ordered sequence of
//!     chord and lyric segments. The token layer has already settled the
//!     chord/lyric ambiguity: a `[` always attempts chord matching first, and a
//!     `[` that cannot form a chord degrades to an incomplete capture rather
//!     than lyric text, preserving the malformed input for diagnostics.
//!
//!     Stray braces inside a content line carry no directive meaning (directives
//!     are line-anchored) and are folded back into the surrounding lyric text.
//!     Consecutive lyric pieces merge into one segment.

use super::ast::{Segment, SongLine};
use super::token::{tokenize_line, SegmentToken};

/// Segment one content line into chords and lyrics.
pub fn segment_line(line: &str) -> SongLine {
    let mut song = SongLine::new();

    for (token, span) in tokenize_line(line) {
        let slice = &line[span];
        match token {
            SegmentToken::Chord => {
                // Strip the surrounding brackets.
                song.push(Segment::Chord(slice[1..slice.len() - 1].to_string()));
            }
            SegmentToken::IncompleteChord => {
                // Strip the opening bracket; there is no closing one.
                song.push(Segment::IncompleteChord(slice[1..].to_string()));
            }
            SegmentToken::Text | SegmentToken::OpenBrace | SegmentToken::CloseBrace => {
                song.push(Segment::Lyric(slice.to_string()));
            }
        }
    }

    song
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chords_and_lyrics_interleave() {
        let song = segment_line("[C]Amazing [G]grace");
        assert_eq!(
            song.segments,
            vec![
                Segment::Chord("C".to_string()),
                Segment::Lyric("Amazing ".to_string()),
                Segment::Chord("G".to_string()),
                Segment::Lyric("grace".to_string()),
            ]
        );
    }

    #[test]
    fn test_lyrics_only() {
        let song = segment_line("Hello");
        assert_eq!(song.segments, vec![Segment::Lyric("Hello".to_string())]);
    }

    #[test]
    fn test_unterminated_chord_recovers() {
        let song = segment_line("la [C");
        assert_eq!(
            song.segments,
            vec![
                Segment::Lyric("la ".to_string()),
                Segment::IncompleteChord("C".to_string()),
            ]
        );
    }

    #[test]
    fn test_overlong_chord_body_reenters_matching() {
        let song = segment_line("[abcdefghij]la");
        assert_eq!(
            song.segments,
            vec![
                Segment::IncompleteChord("abcdefgh".to_string()),
                Segment::Lyric("ij]la".to_string()),
            ]
        );
    }

    #[test]
    fn test_stray_braces_become_lyric_text() {
        let song = segment_line("ab {c} de");
        assert_eq!(song.segments, vec![Segment::Lyric("ab {c} de".to_string())]);
    }

    #[test]
    fn test_empty_brackets() {
        let song = segment_line("[]x");
        assert_eq!(
            song.segments,
            vec![
                Segment::IncompleteChord(String::new()),
                Segment::Lyric("]x".to_string()),
            ]
        );
    }
}
