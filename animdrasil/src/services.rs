//! Seams onto the host environment.
//!
//! The resolver core never talks to the filesystem, the platform font
//! stack, or the animation engine directly; it consumes these three narrow
//! traits so any embedder can supply its own implementations.

use kurbo::BezPath;
use serde_json::Value;

use crate::{style::FontStyle, typeface::Typeface};

/// Supplies externally-loaded font bytes, keyed by declared font name plus
/// the optional path hint from the font declaration.
pub trait FontResourceProvider {
    fn load_font(&self, name: &str, path_hint: Option<&str>) -> Option<Vec<u8>>;
}

/// A provider with nothing to provide. Embedders without external font
/// payloads can plug this in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResourceProvider;

impl FontResourceProvider for NullResourceProvider {
    fn load_font(&self, _name: &str, _path_hint: Option<&str>) -> Option<Vec<u8>> {
        None
    }
}

/// Platform font matching, treated as an opaque service.
pub trait SystemFontService {
    /// Best system match for a (family, style) request.
    fn match_family_style(&self, family: &str, style: FontStyle) -> Option<Typeface>;

    /// The platform's last-resort default face, styled as requested.
    /// Font-free environments may have none.
    fn legacy_default(&self, style: FontStyle) -> Option<Typeface>;

    /// Instantiate a typeface from raw font-file bytes.
    fn typeface_from_bytes(&self, bytes: Vec<u8>) -> Option<Typeface>;
}

/// Result of probing an animatable path value for a static path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathValue {
    pub path: BezPath,
    /// True when the property carried animation (keyframes). Glyph outlines
    /// reject such values outright.
    pub animated: bool,
}

/// Evaluates a path-valued animatable property from the document tree.
///
/// Glyph outlines reuse the shape-layer path schema, so the evaluator is the
/// same machinery the animation engine uses; here it only ever needs to
/// report the static path plus whether animators would have been created.
pub trait PathEvaluator {
    fn evaluate_static_path(&self, value: &Value) -> Option<PathValue>;
}
