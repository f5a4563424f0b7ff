use thiserror::Error;

/// Why a glyph outline could not be extracted.
///
/// These abort the one glyph, never the surrounding pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphPathError {
    #[error("shape group has no \"it\" items")]
    MalformedShapeGroup,
    #[error("unparseable path value")]
    BadPathValue,
    #[error("glyph path is animated; glyph outlines must be static")]
    AnimatedPath,
}
