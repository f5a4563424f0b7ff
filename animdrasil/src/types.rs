//! Basic types useful for font resolution.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Key used by custom typefaces; embedded glyphs map code points directly
/// onto glyph ids, so a usable code point must fit this range.
pub type GlyphId = u16;

/// The declared name of a font, as referenced by text layer documents.
///
/// Distinct from the (family, style) pair: glyph records address fonts by
/// the latter, text layers by the former.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontName(SmolStr);

impl FontName {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(SmolStr::new(s))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> SmolStr {
        self.0
    }
}

impl From<String> for FontName {
    fn from(value: String) -> Self {
        FontName(value.into())
    }
}

impl From<&str> for FontName {
    fn from(value: &str) -> Self {
        FontName(value.into())
    }
}

impl From<SmolStr> for FontName {
    fn from(value: SmolStr) -> Self {
        FontName(value)
    }
}

impl Debug for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FontName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// this means if you have an IndexMap<FontName, _> you can look entries up
// with a plain &str
impl std::borrow::Borrow<str> for FontName {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq<&str> for FontName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
