//! Content line segmentation
//!
//! Integration coverage for the chord/lyric segmenter: interleaving, recovery
//! from malformed brackets, and the capture bounds.

use chordpro_parser::chordpro::assembling::parse;
use chordpro_parser::chordpro::ast::{Line, Segment, SongLine};
use chordpro_parser::chordpro::testing::assert_document;

fn song(line: &str) -> SongLine {
    let doc = parse(line);
    match doc.lines.into_iter().next() {
        Some(Line::Song(song)) => song,
        other => panic!("expected song line for {:?}, got {:?}", line, other),
    }
}

#[test]
fn test_lyrics_between_many_chords() {
    let doc = parse("[G]Amazing [G7]grace how [C]sweet the [G]sound\n");
    assert_document(&doc).line_count(1).line(0, |line| {
        line.assert_song()
            .segment_count(8)
            .chord(0, "G")
            .lyric(1, "Amazing ")
            .chord(2, "G7")
            .lyric(3, "grace how ")
            .chord(4, "C")
            .lyric(5, "sweet the ")
            .chord(6, "G")
            .lyric(7, "sound");
    });
}

#[test]
fn test_adjacent_chords() {
    assert_eq!(
        song("[C][G]").segments,
        vec![
            Segment::Chord("C".to_string()),
            Segment::Chord("G".to_string()),
        ]
    );
}

#[test]
fn test_chord_body_may_contain_symbols() {
    assert_eq!(
        song("[C#m7/G]la").segments,
        vec![
            Segment::Chord("C#m7/G".to_string()),
            Segment::Lyric("la".to_string()),
        ]
    );
}

#[test]
fn test_bracket_never_becomes_lyric() {
    // The tie-break rule: `[` always attempts a chord first and degrades to
    // an incomplete capture, keeping the malformed text out of the lyrics.
    assert_eq!(
        song("a [ b").segments,
        vec![
            Segment::Lyric("a ".to_string()),
            Segment::IncompleteChord(" b".to_string()),
        ]
    );
}

#[test]
fn test_chord_body_cap_splits_overlong_runs() {
    let line = format!("[{}]end", "x".repeat(30));
    let segments = song(&line).segments;
    assert_eq!(segments[0], Segment::IncompleteChord("x".repeat(8)));
    // The remainder re-enters matching as lyric text.
    assert_eq!(
        segments[1],
        Segment::Lyric(format!("{}]end", "x".repeat(22)))
    );
}

#[test]
fn test_braces_midline_are_literal_text() {
    assert_eq!(
        song("la {title: X} la").segments,
        vec![Segment::Lyric("la {title: X} la".to_string())]
    );
}

#[test]
fn test_chord_between_stray_braces() {
    // Mid-line braces are literal; the chord still matches between them.
    assert_eq!(
        song("a {x [C]y}").segments,
        vec![
            Segment::Lyric("a {x ".to_string()),
            Segment::Chord("C".to_string()),
            Segment::Lyric("y}".to_string()),
        ]
    );
}
