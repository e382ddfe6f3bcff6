//! Directive kinds and the alias table
//!
//!     This module is the closed set of directive grammars: every directive the
//!     parser accepts is one of the [DirectiveKind] variants below, reachable by
//!     its canonical name or by an alias. Aliasing is a lookup, never a distinct
//!     kind: `{t: Foo}` and `{title: Foo}` resolve to the same variant.
//!
//!     Each kind has a fixed, statically known [ArgumentShape]. The classifier
//!     resolves the name with a single table lookup and then parses the argument
//!     per shape; there is no 70-way alternation at match time.
//!
//!     Name matching is case-sensitive and lowercase-only, as in the format's
//!     grammar. `{Title: X}` does not name a directive.
//!
//! Shapes
//!
//!     - FreeText: `{name: text}` with a bounded text argument.
//!     - OptionalFreeText: `{name}` or `{name: label}` (section openers).
//!     - Number: `{name: digits}`; non-digit content does not match.
//!     - ChordDefinition: the structured `define`/`chord` body.
//!     - TitlesAlignment: `left`, `right` or `center`.
//!     - None: `{name}` only.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The canonical directive kinds, one per directive grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DirectiveKind {
    // Song metadata
    Title,
    Subtitle,
    Artist,
    Composer,
    Lyricist,
    Copyright,
    Album,
    Year,
    Key,
    Time,
    Tempo,
    Duration,
    Capo,
    Tag,
    Meta,

    // Comments and callouts
    Comment,
    Highlight,
    CommentItalic,
    CommentBox,
    Image,

    // Section markers
    Chorus,
    StartOfChorus,
    EndOfChorus,
    StartOfVerse,
    EndOfVerse,
    StartOfBridge,
    EndOfBridge,
    StartOfTab,
    EndOfTab,
    StartOfGrid,
    EndOfGrid,

    // Embedded content blocks
    StartOfAbc,
    EndOfAbc,
    StartOfLy,
    EndOfLy,
    StartOfSvg,
    EndOfSvg,
    StartOfTextblock,
    EndOfTextblock,

    // Chord definitions
    Define,
    Chord,

    Transpose,

    // Font, size and colour settings per output area
    ChordFont,
    ChordSize,
    ChordColour,
    ChorusFont,
    ChorusSize,
    ChorusColour,
    FooterFont,
    FooterSize,
    FooterColour,
    GridFont,
    GridSize,
    GridColour,
    TabFont,
    TabSize,
    TabColour,
    LabelFont,
    LabelSize,
    LabelColour,
    TocFont,
    TocSize,
    TocColour,
    TextFont,
    TextSize,
    TextColour,
    TitleFont,
    TitleSize,
    TitleColour,

    // Page layout
    NewPage,
    NewPhysicalPage,
    ColumnBreak,
    PageType,

    // Output toggles
    Diagrams,
    Grid,
    NoGrid,
    Titles,
    Columns,
}

/// The argument grammar a directive kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentShape {
    /// `{name}` only, no argument.
    None,
    /// `{name: text}`, text required.
    FreeText,
    /// `{name}` or `{name: label}`.
    OptionalFreeText,
    /// `{name: digits}`.
    Number,
    /// The structured `define`/`chord` body.
    ChordDefinition,
    /// `{titles: left|right|center}`.
    TitlesAlignment,
}

/// Every kind, in grammar declaration order.
///
/// The order documents the grammar; names are pairwise distinct, so at most
/// one entry can ever match a given name token.
pub const ALL_KINDS: [DirectiveKind; 78] = [
    DirectiveKind::Title,
    DirectiveKind::Subtitle,
    DirectiveKind::Artist,
    DirectiveKind::Composer,
    DirectiveKind::Lyricist,
    DirectiveKind::Copyright,
    DirectiveKind::Album,
    DirectiveKind::Year,
    DirectiveKind::Key,
    DirectiveKind::Time,
    DirectiveKind::Tempo,
    DirectiveKind::Duration,
    DirectiveKind::Capo,
    DirectiveKind::Tag,
    DirectiveKind::Meta,
    DirectiveKind::Comment,
    DirectiveKind::Highlight,
    DirectiveKind::CommentItalic,
    DirectiveKind::CommentBox,
    DirectiveKind::Image,
    DirectiveKind::Chorus,
    DirectiveKind::StartOfChorus,
    DirectiveKind::EndOfChorus,
    DirectiveKind::StartOfVerse,
    DirectiveKind::EndOfVerse,
    DirectiveKind::StartOfBridge,
    DirectiveKind::EndOfBridge,
    DirectiveKind::StartOfTab,
    DirectiveKind::EndOfTab,
    DirectiveKind::StartOfGrid,
    DirectiveKind::EndOfGrid,
    DirectiveKind::StartOfAbc,
    DirectiveKind::EndOfAbc,
    DirectiveKind::StartOfLy,
    DirectiveKind::EndOfLy,
    DirectiveKind::StartOfSvg,
    DirectiveKind::EndOfSvg,
    DirectiveKind::StartOfTextblock,
    DirectiveKind::EndOfTextblock,
    DirectiveKind::Define,
    DirectiveKind::Chord,
    DirectiveKind::Transpose,
    DirectiveKind::ChordFont,
    DirectiveKind::ChordSize,
    DirectiveKind::ChordColour,
    DirectiveKind::ChorusFont,
    DirectiveKind::ChorusSize,
    DirectiveKind::ChorusColour,
    DirectiveKind::FooterFont,
    DirectiveKind::FooterSize,
    DirectiveKind::FooterColour,
    DirectiveKind::GridFont,
    DirectiveKind::GridSize,
    DirectiveKind::GridColour,
    DirectiveKind::TabFont,
    DirectiveKind::TabSize,
    DirectiveKind::TabColour,
    DirectiveKind::LabelFont,
    DirectiveKind::LabelSize,
    DirectiveKind::LabelColour,
    DirectiveKind::TocFont,
    DirectiveKind::TocSize,
    DirectiveKind::TocColour,
    DirectiveKind::TextFont,
    DirectiveKind::TextSize,
    DirectiveKind::TextColour,
    DirectiveKind::TitleFont,
    DirectiveKind::TitleSize,
    DirectiveKind::TitleColour,
    DirectiveKind::NewPage,
    DirectiveKind::NewPhysicalPage,
    DirectiveKind::ColumnBreak,
    DirectiveKind::PageType,
    DirectiveKind::Diagrams,
    DirectiveKind::Grid,
    DirectiveKind::NoGrid,
    DirectiveKind::Titles,
    DirectiveKind::Columns,
];

impl DirectiveKind {
    /// The canonical (long-form) directive name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            DirectiveKind::Title => "title",
            DirectiveKind::Subtitle => "subtitle",
            DirectiveKind::Artist => "artist",
            DirectiveKind::Composer => "composer",
            DirectiveKind::Lyricist => "lyricist",
            DirectiveKind::Copyright => "copyright",
            DirectiveKind::Album => "album",
            DirectiveKind::Year => "year",
            DirectiveKind::Key => "key",
            DirectiveKind::Time => "time",
            DirectiveKind::Tempo => "tempo",
            DirectiveKind::Duration => "duration",
            DirectiveKind::Capo => "capo",
            DirectiveKind::Tag => "tag",
            DirectiveKind::Meta => "meta",
            DirectiveKind::Comment => "comment",
            DirectiveKind::Highlight => "highlight",
            DirectiveKind::CommentItalic => "comment_italic",
            DirectiveKind::CommentBox => "comment_box",
            DirectiveKind::Image => "image",
            DirectiveKind::Chorus => "chorus",
            DirectiveKind::StartOfChorus => "start_of_chorus",
            DirectiveKind::EndOfChorus => "end_of_chorus",
            DirectiveKind::StartOfVerse => "start_of_verse",
            DirectiveKind::EndOfVerse => "end_of_verse",
            DirectiveKind::StartOfBridge => "start_of_bridge",
            DirectiveKind::EndOfBridge => "end_of_bridge",
            DirectiveKind::StartOfTab => "start_of_tab",
            DirectiveKind::EndOfTab => "end_of_tab",
            DirectiveKind::StartOfGrid => "start_of_grid",
            DirectiveKind::EndOfGrid => "end_of_grid",
            DirectiveKind::StartOfAbc => "start_of_abc",
            DirectiveKind::EndOfAbc => "end_of_abc",
            DirectiveKind::StartOfLy => "start_of_ly",
            DirectiveKind::EndOfLy => "end_of_ly",
            DirectiveKind::StartOfSvg => "start_of_svg",
            DirectiveKind::EndOfSvg => "end_of_svg",
            DirectiveKind::StartOfTextblock => "start_of_textblock",
            DirectiveKind::EndOfTextblock => "end_of_textblock",
            DirectiveKind::Define => "define",
            DirectiveKind::Chord => "chord",
            DirectiveKind::Transpose => "transpose",
            DirectiveKind::ChordFont => "chordfont",
            DirectiveKind::ChordSize => "chordsize",
            DirectiveKind::ChordColour => "chordcolour",
            DirectiveKind::ChorusFont => "chorusfont",
            DirectiveKind::ChorusSize => "chorussize",
            DirectiveKind::ChorusColour => "choruscolour",
            DirectiveKind::FooterFont => "footerfont",
            DirectiveKind::FooterSize => "footersize",
            DirectiveKind::FooterColour => "footercolour",
            DirectiveKind::GridFont => "gridfont",
            DirectiveKind::GridSize => "gridsize",
            DirectiveKind::GridColour => "gridcolour",
            DirectiveKind::TabFont => "tabfont",
            DirectiveKind::TabSize => "tabsize",
            DirectiveKind::TabColour => "tabcolour",
            DirectiveKind::LabelFont => "labelfont",
            DirectiveKind::LabelSize => "labelsize",
            DirectiveKind::LabelColour => "labelcolour",
            DirectiveKind::TocFont => "tocfont",
            DirectiveKind::TocSize => "tocsize",
            DirectiveKind::TocColour => "toccolour",
            DirectiveKind::TextFont => "textfont",
            DirectiveKind::TextSize => "textsize",
            DirectiveKind::TextColour => "textcolour",
            DirectiveKind::TitleFont => "titlefont",
            DirectiveKind::TitleSize => "titlesize",
            DirectiveKind::TitleColour => "titlecolour",
            DirectiveKind::NewPage => "new_page",
            DirectiveKind::NewPhysicalPage => "new_physical_page",
            DirectiveKind::ColumnBreak => "column_break",
            DirectiveKind::PageType => "pagetype",
            DirectiveKind::Diagrams => "diagrams",
            DirectiveKind::Grid => "grid",
            DirectiveKind::NoGrid => "no_grid",
            DirectiveKind::Titles => "titles",
            DirectiveKind::Columns => "columns",
        }
    }

    /// The alternate spelling, for kinds that have one.
    pub fn alias(self) -> Option<&'static str> {
        let alias = match self {
            DirectiveKind::Title => "t",
            DirectiveKind::Subtitle => "st",
            DirectiveKind::Comment => "c",
            DirectiveKind::CommentItalic => "ci",
            DirectiveKind::CommentBox => "cb",
            DirectiveKind::StartOfChorus => "soc",
            DirectiveKind::EndOfChorus => "eoc",
            DirectiveKind::StartOfVerse => "sov",
            DirectiveKind::EndOfVerse => "eov",
            DirectiveKind::StartOfBridge => "sob",
            DirectiveKind::EndOfBridge => "eob",
            DirectiveKind::StartOfTab => "sot",
            DirectiveKind::EndOfTab => "eot",
            DirectiveKind::StartOfGrid => "sog",
            DirectiveKind::EndOfGrid => "eog",
            DirectiveKind::ChordColour => "chordcolor",
            DirectiveKind::ChorusColour => "choruscolor",
            DirectiveKind::FooterColour => "footercolor",
            DirectiveKind::GridColour => "gridcolor",
            DirectiveKind::TabColour => "tabcolor",
            DirectiveKind::LabelColour => "labelcolor",
            DirectiveKind::TocColour => "toccolor",
            DirectiveKind::TextColour => "textcolor",
            DirectiveKind::TitleColour => "titlecolor",
            DirectiveKind::NewPage => "np",
            DirectiveKind::NewPhysicalPage => "npp",
            DirectiveKind::ColumnBreak => "colb",
            DirectiveKind::Columns => "col",
            _ => return None,
        };
        Some(alias)
    }

    /// The argument grammar this kind accepts.
    pub fn argument_shape(self) -> ArgumentShape {
        use DirectiveKind::*;
        match self {
            Title | Subtitle | Artist | Composer | Lyricist | Copyright | Album | Key | Time
            | Tempo | Duration | Tag | Meta | Comment | Highlight | CommentItalic | CommentBox
            | Image | Transpose | ChordFont | ChordColour | ChorusFont | ChorusColour
            | FooterFont | FooterColour | GridFont | GridColour | TabFont | TabColour
            | LabelFont | LabelColour | TocFont | TocColour | TextFont | TextColour | TitleFont
            | TitleColour | PageType | Diagrams => ArgumentShape::FreeText,

            Year | Capo | ChordSize | ChorusSize | FooterSize | GridSize | TabSize | LabelSize
            | TocSize | TextSize | TitleSize | Columns => ArgumentShape::Number,

            Chorus | StartOfChorus | StartOfVerse | StartOfBridge | StartOfTab | StartOfGrid
            | StartOfAbc | StartOfLy => ArgumentShape::OptionalFreeText,

            EndOfChorus | EndOfVerse | EndOfBridge | EndOfTab | EndOfGrid | EndOfAbc | EndOfLy
            | StartOfSvg | EndOfSvg | StartOfTextblock | EndOfTextblock | NewPage
            | NewPhysicalPage | ColumnBreak | Grid | NoGrid => ArgumentShape::None,

            Define | Chord => ArgumentShape::ChordDefinition,

            Titles => ArgumentShape::TitlesAlignment,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Name/alias to kind lookup, built once and read-only thereafter.
///
/// This is the only process-wide state the parser holds; independent parse
/// calls share it without locking.
static NAME_TO_KIND: Lazy<HashMap<&'static str, DirectiveKind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for kind in ALL_KINDS {
        map.insert(kind.canonical_name(), kind);
        if let Some(alias) = kind.alias() {
            map.insert(alias, kind);
        }
    }
    map
});

/// Resolve a directive name or alias to its kind.
pub fn lookup_name(name: &str) -> Option<DirectiveKind> {
    NAME_TO_KIND.get(name).copied()
}
