//! Opaque typeface values.
//!
//! A [Typeface] is whatever the renderer can pull glyph outlines from: an
//! unparsed font blob handed over by the embedder or the system matcher, or
//! a custom glyph set assembled from outlines embedded in the animation
//! document itself.

use std::{collections::HashMap, sync::Arc};

use kurbo::BezPath;

use crate::types::GlyphId;

/// A cheaply clonable glyph-rendering source.
///
/// Once installed on a font entry a typeface is never replaced; resolution
/// is monotonic.
#[derive(Debug, Clone)]
pub struct Typeface(Arc<TypefaceKind>);

#[derive(Debug)]
enum TypefaceKind {
    /// Raw font-file bytes plus a face index within the collection.
    Data { bytes: Arc<[u8]>, index: u32 },
    /// Built from embedded per-glyph outlines.
    Custom(CustomTypeface),
}

impl Typeface {
    pub fn from_data(bytes: Vec<u8>, index: u32) -> Typeface {
        Typeface(Arc::new(TypefaceKind::Data {
            bytes: bytes.into(),
            index,
        }))
    }

    /// The underlying font-file bytes, if this face wraps a font blob.
    pub fn font_data(&self) -> Option<(&[u8], u32)> {
        match self.0.as_ref() {
            TypefaceKind::Data { bytes, index } => Some((bytes, *index)),
            TypefaceKind::Custom(..) => None,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomTypeface> {
        match self.0.as_ref() {
            TypefaceKind::Custom(custom) => Some(custom),
            TypefaceKind::Data { .. } => None,
        }
    }
}

/// One glyph of a custom typeface: a static outline in per-point units and
/// the matching advance.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomGlyph {
    pub advance: f32,
    pub path: BezPath,
}

/// A typeface whose glyphs were supplied as vector outlines keyed directly
/// by code point.
#[derive(Debug, Default)]
pub struct CustomTypeface {
    glyphs: HashMap<GlyphId, CustomGlyph>,
}

impl CustomTypeface {
    pub fn glyph(&self, id: GlyphId) -> Option<&CustomGlyph> {
        self.glyphs.get(&id)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// Accumulates embedded glyphs for one font, then converts to a [Typeface]
/// exactly once.
#[derive(Debug, Default)]
pub struct CustomTypefaceBuilder {
    glyphs: HashMap<GlyphId, CustomGlyph>,
    detached: bool,
}

impl CustomTypefaceBuilder {
    pub fn new() -> CustomTypefaceBuilder {
        Default::default()
    }

    /// Add or replace a glyph. Advance and outline are expected to already
    /// be normalized to per-point units.
    pub fn set_glyph(&mut self, id: GlyphId, advance: f32, path: BezPath) {
        debug_assert!(!self.detached, "set_glyph on a spent builder");
        self.glyphs.insert(id, CustomGlyph { advance, path });
    }

    /// Consume the accumulated glyphs into a typeface.
    ///
    /// Returns `None` when no glyphs were ever set. The builder is spent
    /// afterwards; further use is a logic error.
    pub fn detach(&mut self) -> Option<Typeface> {
        debug_assert!(!self.detached, "custom typeface builder detached twice");
        self.detached = true;
        let glyphs = std::mem::take(&mut self.glyphs);
        if glyphs.is_empty() {
            return None;
        }
        Some(Typeface(Arc::new(TypefaceKind::Custom(CustomTypeface {
            glyphs,
        }))))
    }
}
