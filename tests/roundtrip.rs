//! Canonical emission round trips
//!
//! A parsed well-formed line re-emits as a semantically equivalent line:
//! same kind, same argument, same segmentation. Aliased spellings normalize
//! to their canonical names, so equivalence is checked by re-parsing.

use chordpro_parser::chordpro::assembling::parse;
use chordpro_parser::chordpro::emitting::ToChordProText;
use rstest::rstest;

#[rstest]
#[case("{title: Amazing Grace}\n")]
#[case("{artist: John Newton}\n")]
#[case("{year: 1779}\n")]
#[case("{capo: 2}\n")]
#[case("{titles: right}\n")]
#[case("{chorus}\n")]
#[case("{start_of_chorus: Chorus 1}\n")]
#[case("{end_of_chorus}\n")]
#[case("{define: C base-fret 1 frets 0 3 2 0 1 0 fingers 0 2 1 0 1 0}\n")]
#[case("{chord: Am7}\n")]
#[case("[C]Amazing [G]grace\n")]
#[case("la la la\n")]
#[case("\n")]
fn test_canonical_input_round_trips_verbatim(#[case] source: &str) {
    let doc = parse(source);
    assert_eq!(doc.to_chordpro(), source);
}

#[rstest]
#[case("{t: Foo}\n", "{title: Foo}\n")]
#[case("{soc}\n", "{start_of_chorus}\n")]
#[case("{colb}\n", "{column_break}\n")]
#[case("{chordcolor: red}\n", "{chordcolour: red}\n")]
#[case("{c:intro}\n", "{comment: intro}\n")]
fn test_aliases_normalize_to_canonical(#[case] source: &str, #[case] canonical: &str) {
    let doc = parse(source);
    assert_eq!(doc.to_chordpro(), canonical);
    // Same document either way.
    assert_eq!(parse(canonical), doc);
}

#[test]
fn test_emission_is_stable_under_reparse() {
    let source = "{title: X}\n{bogus} trailing\n[C]la [D\nplain\n\n";
    let doc = parse(source);
    let emitted = doc.to_chordpro();
    assert_eq!(parse(&emitted), doc);
}

#[test]
fn test_incomplete_constructs_reemit_their_captures() {
    let doc = parse("{titl\n[C\n");
    assert_eq!(doc.to_chordpro(), "{titl\n[C\n");
}
