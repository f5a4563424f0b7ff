//! Font resolution for Lottie-style animation documents.
//!
//! Text layers reference fonts indirectly: by declared name, by
//! (family, style) pair from embedded glyph records, or not at all (leaving
//! the platform to supply something usable). This crate parses the document's
//! font declarations into an insertion-ordered registry and resolves every
//! entry to a typeface through a deterministic fallback ladder, tolerating
//! malformed individual entries without abandoning the animation.

pub mod error;
pub mod font;
pub mod glyph;
mod json;
pub mod resolve;
pub mod shape;
pub mod style;

pub use error::GlyphPathError;
pub use font::{FontInfo, FontRegistry};
pub use resolve::FontResolver;
