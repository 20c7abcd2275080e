//! Report rendering
//!
//! Text only: the tool writes a fixed human-readable report to stdout and
//! nothing else.

pub mod text;
