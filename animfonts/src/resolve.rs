//! Typeface resolution passes and their orchestration.
//!
//! Every declared font has to end up with a usable typeface. Three sources
//! compete, in a fixed order per pass:
//!
//!   1) externally-loaded font bytes (provided by the embedder)
//!   2) a system font matched on (family, style)
//!   3) the system's legacy default face
//!
//! plus a custom typeface assembled from glyph outlines embedded in the
//! document. A caller flag decides whether embedded glyphs are tried before
//! or after the native ladder. Individual malformed entries are logged and
//! skipped; a pass only reports an advisory aggregate verdict.

use animdrasil::{
    services::{FontResourceProvider, PathEvaluator, SystemFontService},
    types::GlyphId,
};
use kurbo::Affine;
use log::error;
use serde_json::Value;

use crate::{
    font::{FontInfo, FontRegistry},
    glyph::parse_glyph_path,
    json,
    style::parse_font_style,
};

/// Glyph outlines and advances are authored in percentage-of-em units;
/// scale down to per-point units.
const PT_SCALE: f64 = 0.01;

/// Runs the parse/resolve pipeline against a registry.
pub struct FontResolver<'a> {
    registry: &'a mut FontRegistry,
    resource_provider: &'a dyn FontResourceProvider,
    font_service: &'a dyn SystemFontService,
    path_evaluator: &'a dyn PathEvaluator,
    prefer_embedded: bool,
}

impl<'a> FontResolver<'a> {
    pub fn new(
        registry: &'a mut FontRegistry,
        resource_provider: &'a dyn FontResourceProvider,
        font_service: &'a dyn SystemFontService,
        path_evaluator: &'a dyn PathEvaluator,
        prefer_embedded: bool,
    ) -> FontResolver<'a> {
        FontResolver {
            registry,
            resource_provider,
            font_service,
            path_evaluator,
            prefer_embedded,
        }
    }

    /// Parse the document's font declarations and resolve every entry.
    ///
    /// `jfonts` is the document's `"fonts"` object (its `"list"` array holds
    /// the declarations), `jchars` the optional `"chars"` array of embedded
    /// glyph records. Absent inputs are no-ops, not errors.
    ///
    /// The returned verdict is advisory: true when the first checked pass
    /// resolved every font. Callers proceed regardless, accepting fallback
    /// or missing glyph rendering for whatever stayed unresolved.
    pub fn parse_fonts(&mut self, jfonts: Option<&Value>, jchars: Option<&Value>) -> bool {
        // Optional array of font entries, referenced (by name) from text
        // layer documents. E.g.
        // "fonts": {
        //     "list": [
        //         {
        //             "ascent": 75,
        //             "fFamily": "Roboto",
        //             "fName": "Roboto-Regular",
        //             "fPath": "https://fonts.googleapis.com/css?family=Roboto",
        //             "fStyle": "Regular"
        //         }
        //     ]
        // }
        let jlist = jfonts.and_then(|fonts| json::arr_field(fonts, "list"));
        let Some(jlist) = jlist else {
            return true;
        };

        // First pass: collect font info.
        for jfont in jlist {
            let name = json::non_empty_str(jfont, "fName");
            let family = json::non_empty_str(jfont, "fFamily");
            let style = json::non_empty_str(jfont, "fStyle");
            let (Some(name), Some(family), Some(style)) = (name, family, style) else {
                error!("Invalid font: {jfont}.");
                continue;
            };
            let path = json::non_empty_str(jfont, "fPath").map(str::to_owned);
            let ascent = json::f64_or(jfont, "ascent", 0.0) as f32;

            self.registry.insert(
                name.into(),
                FontInfo::new(family.to_owned(), style.to_owned(), path, ascent),
            );
        }

        let jchars = jchars.and_then(Value::as_array).map(Vec::as_slice);

        // Optional pass.
        if let Some(chars) = jchars {
            if self.prefer_embedded && self.resolve_embedded_typefaces(chars) {
                return true;
            }
        }

        // Native typeface resolution.
        if self.resolve_native_typefaces() {
            return true;
        }

        // Embedded typeface fallback; best effort, verdict not re-checked.
        if let Some(chars) = jchars {
            if !self.prefer_embedded {
                self.resolve_embedded_typefaces(chars);
            }
        }

        false
    }

    /// Resolve every still-unresolved font through the native ladder:
    /// embedder bytes, then system match, then legacy default.
    ///
    /// True when no font is left unresolved. Fonts are attempted
    /// independently; one failure does not abort the rest.
    pub fn resolve_native_typefaces(&mut self) -> bool {
        let mut has_unresolved = false;

        for (name, font) in self.registry.iter_mut() {
            if font.is_resolved() {
                // Already resolved from glyph outlines.
                continue;
            }

            let external = self
                .resource_provider
                .load_font(name.as_str(), font.path.as_deref())
                .and_then(|bytes| self.font_service.typeface_from_bytes(bytes));
            if let Some(typeface) = external {
                font.set_typeface(typeface);
                continue;
            }

            let style = parse_font_style(&font.style);
            if let Some(typeface) = self.font_service.match_family_style(&font.family, style) {
                font.set_typeface(typeface);
                continue;
            }

            error!(
                "Could not create typeface for {}|{}.",
                font.family, font.style
            );
            // Last resort.
            match self.font_service.legacy_default(style) {
                Some(typeface) => font.set_typeface(typeface),
                None => has_unresolved = true,
            }
        }

        !has_unresolved
    }

    /// Build custom typefaces from embedded glyph records.
    ///
    /// Optional array of glyphs, each associated with one of the declared
    /// fonts. E.g.
    /// "chars": [
    ///     {
    ///         "ch": "t",
    ///         "data": { "shapes": [...] },   // shape-layer-like geometry
    ///         "fFamily": "Roboto",           // part of the font key
    ///         "size": 50,                    // ignored/reserved
    ///         "style": "Regular",            // part of the font key
    ///         "w": 32.67                     // advance (1/100 units)
    ///     }
    /// ]
    ///
    /// True when every font ends the pass resolved. Bad records are logged
    /// and skipped, never fatal to the pass.
    pub fn resolve_embedded_typefaces(&mut self, jchars: &[Value]) -> bool {
        // Glyph records reference fonts by (family, style), not by name, and
        // are typically clustered per font; remember the last hit to skip
        // the registry scan for runs of glyphs from one font.
        let mut current_font: Option<usize> = None;

        for jchar in jchars {
            // A record with no "ch" at all carries nothing to key a glyph
            // by; skip it quietly rather than flag it as invalid.
            let Some(ch) = json::str_field(jchar, "ch") else {
                continue;
            };

            let family = json::str_field(jchar, "fFamily");
            // "style" here, unlike the font list's "fStyle".
            let style = json::str_field(jchar, "style");

            let ((Some(family), Some(style)), Some(code_point)) =
                ((family, style), single_code_point(ch))
            else {
                error!("Invalid glyph: {jchar}.");
                continue;
            };

            // Custom typeface keys are glyph ids; code points are mapped
            // onto them directly.
            let Ok(glyph_id) = GlyphId::try_from(code_point as u32) else {
                error!("Unsupported glyph ID: {}.", code_point as u32);
                continue;
            };

            let matched = current_font
                .filter(|&position| self.registry.font_at(position).matches(family, style))
                .or_else(|| self.registry.position_by_family_style(family, style));
            let Some(position) = matched else {
                current_font = None;
                error!(
                    "Font not found for codepoint ({}, {family}, {style}).",
                    code_point as u32
                );
                continue;
            };
            current_font = Some(position);

            let Ok(mut path) = parse_glyph_path(jchar.get("data"), self.path_evaluator) else {
                continue;
            };

            let advance = json::f64_or(jchar, "w", 0.0);

            // Glyph geometry is authored in a percentage-based space
            // regardless of the declared glyph size; normalize path and
            // advance for 1pt.
            path.apply_affine(Affine::scale(PT_SCALE));
            self.registry.font_at_mut(position).add_custom_glyph(
                glyph_id,
                (advance * PT_SCALE) as f32,
                path,
            );
        }

        // Final pass to commit custom typefaces.
        let mut has_unresolved = false;
        for (_, font) in self.registry.iter_mut() {
            if font.is_resolved() {
                continue;
            }
            has_unresolved |= !font.finalize_custom_glyphs();
        }

        !has_unresolved
    }
}

/// The glyph's character, provided it decodes to exactly one code point.
fn single_code_point(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
