//! Word pairs and the in-memory word pool.
//!
//! The pool file format is one pair per line, fields separated by a single
//! character (`,` by default). Blank lines and lines starting with `#` are
//! ignored, and surrounding whitespace is trimmed.

pub mod line_format;
pub mod pair;
pub mod pool;
