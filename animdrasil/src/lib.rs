//! Common font types shared across the animation engine.
//!
//! Particularly the opaque typeface value handed around between the font
//! resolver and the text layer machinery, plus the narrow seams onto the
//! host environment (font loading, system font matching, path evaluation).

pub mod services;
pub mod style;
pub mod typeface;
pub mod types;
