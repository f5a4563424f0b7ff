//! The font registry: declared fonts and their resolution state.

use animdrasil::{
    typeface::{CustomTypefaceBuilder, Typeface},
    types::FontName,
};
use indexmap::IndexMap;

/// Everything known about one declared font.
///
/// Keyed in the registry by declared name; glyph records instead address
/// fonts by exact (family, style) match, see [FontInfo::matches].
#[derive(Debug)]
pub struct FontInfo {
    pub family: String,
    pub style: String,
    /// Hint for external font loading, straight from the declaration.
    pub path: Option<String>,
    pub ascent: f32,
    typeface: Option<Typeface>,
    custom_builder: CustomTypefaceBuilder,
}

impl FontInfo {
    pub fn new(family: String, style: String, path: Option<String>, ascent: f32) -> FontInfo {
        FontInfo {
            family,
            style,
            path,
            ascent,
            typeface: None,
            custom_builder: CustomTypefaceBuilder::new(),
        }
    }

    /// Exact-string secondary identity used by embedded glyph records.
    pub fn matches(&self, family: &str, style: &str) -> bool {
        self.family == family && self.style == style
    }

    pub fn typeface(&self) -> Option<&Typeface> {
        self.typeface.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.typeface.is_some()
    }

    /// Install the resolved typeface. Resolution is monotonic; the first
    /// installed face sticks.
    pub(crate) fn set_typeface(&mut self, typeface: Typeface) {
        debug_assert!(self.typeface.is_none(), "font resolved twice");
        self.typeface.get_or_insert(typeface);
    }

    pub(crate) fn add_custom_glyph(
        &mut self,
        id: animdrasil::types::GlyphId,
        advance: f32,
        path: kurbo::BezPath,
    ) {
        self.custom_builder.set_glyph(id, advance, path);
    }

    /// Detach the accumulated custom glyphs into this font's typeface.
    /// False when no glyphs were ever submitted.
    pub(crate) fn finalize_custom_glyphs(&mut self) -> bool {
        match self.custom_builder.detach() {
            Some(typeface) => {
                self.set_typeface(typeface);
                true
            }
            None => false,
        }
    }
}

/// Insertion-ordered collection of declared fonts.
///
/// Small by nature (a handful of entries per animation), so the secondary
/// (family, style) lookup is a linear scan; callers that process
/// font-clustered records cache the last hit instead of re-scanning.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: IndexMap<FontName, FontInfo>,
}

impl FontRegistry {
    pub fn new() -> FontRegistry {
        Default::default()
    }

    /// Register a font under its declared name. A repeated name replaces
    /// the earlier declaration, keeping its original position.
    pub fn insert(&mut self, name: FontName, info: FontInfo) {
        self.fonts.insert(name, info);
    }

    pub fn font_by_name(&self, name: &str) -> Option<&FontInfo> {
        self.fonts.get(name)
    }

    /// Position of the first entry matching (family, style), in insertion
    /// order.
    pub fn position_by_family_style(&self, family: &str, style: &str) -> Option<usize> {
        self.fonts
            .values()
            .position(|font| font.matches(family, style))
    }

    pub(crate) fn font_at(&self, position: usize) -> &FontInfo {
        let (_, font) = self.fonts.get_index(position).expect("position in bounds");
        font
    }

    pub(crate) fn font_at_mut(&mut self, position: usize) -> &mut FontInfo {
        let (_, font) = self
            .fonts
            .get_index_mut(position)
            .expect("position in bounds");
        font
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FontName, &FontInfo)> {
        self.fonts.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&FontName, &mut FontInfo)> {
        self.fonts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
