//! # chordpro-parser
//!
//! A parser for the ChordPro song sheet format.
//!
//! ChordPro interleaves lyric lines with inline chord annotations (`[C]`) and
//! brace-delimited metadata directives (`{title: ...}`). This crate turns such
//! text into a structured [Document](chordpro::ast::Document) for downstream
//! renderers, transposers and diagram tools.
//!
//! The parser is line oriented and total: every finite input produces a
//! document. Malformed constructs degrade locally into incomplete nodes
//! instead of failing the parse, and every variable-length capture has a
//! fixed cap, so adversarial input cannot cause unbounded buffering or
//! catastrophic backtracking. See [bounds](chordpro::bounds) for the caps and
//! [parse](chordpro::assembling::parse) for the entry point.

#![allow(rustdoc::invalid_html_tags)]

pub mod chordpro;

pub use chordpro::assembling::parse;
pub use chordpro::ast::Document;
