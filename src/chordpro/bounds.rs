//! Capture bounds
//!
//!     Every variable-length token in the grammar has a fixed maximum length.
//!     Matching loops and token regexes must not capture past these caps, which
//!     keeps a single line's parse linear in time and constant in auxiliary
//!     space regardless of content. A file made of megabytes of `[` or `{`
//!     parses in one pass with bounded buffers.
//!
//!     When real content runs past a cap, the excess is not dropped from the
//!     scan: it is left unconsumed and re-enters matching as the next token.
//!     For directives this means the closing brace is no longer reachable and
//!     the construct resolves as an incomplete capture.
//!
//!     Conforming implementations must size these identically to preserve
//!     output parity.

/// Maximum length of a free-text directive argument.
pub const MAX_FREE_TEXT: usize = 200;

/// Maximum length of a chord name in a chord definition body.
pub const MAX_CHORD_NAME: usize = 10;

/// Maximum length of a fret sequence in a chord definition body.
pub const MAX_FRET_SEQUENCE: usize = 50;

/// Maximum length of a finger sequence in a chord definition body.
pub const MAX_FINGER_SEQUENCE: usize = 20;

/// Maximum length of an inline chord body (between `[` and `]`).
pub const MAX_CHORD_BODY: usize = 8;

/// Maximum raw capture for an unrecognized or unterminated directive.
pub const MAX_INCOMPLETE_DIRECTIVE: usize = 100;

/// Maximum raw capture for an unterminated inline chord.
pub const MAX_INCOMPLETE_CHORD: usize = 8;

/// Maximum length of the directive name scan.
///
/// The longest canonical name is `start_of_textblock` (18 characters); a
/// longer run cannot name any directive, so the scan stops here and the
/// construct flows to the incomplete capture.
pub const MAX_DIRECTIVE_NAME: usize = 24;

/// Maximum digits scanned for a numeric directive argument.
///
/// Ten digits cover the `u32` range; anything longer cannot parse.
pub const MAX_NUMBER_DIGITS: usize = 10;
