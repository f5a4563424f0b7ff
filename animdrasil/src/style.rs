//! Font style descriptors.
//!
//! Weight values follow the usWeightClass scale so any system font matcher
//! can consume them directly.
//! <https://docs.microsoft.com/en-gb/typography/opentype/spec/os2#usweightclass>

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weight {
    Thin = 100,
    ExtraLight = 200,
    Light = 300,
    Normal = 400,
    Medium = 500,
    SemiBold = 600,
    Bold = 700,
    ExtraBold = 800,
    Black = 900,
    ExtraBlack = 1000,
}

impl Weight {
    pub fn value(&self) -> u16 {
        *self as u16
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::Normal
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Only the normal width is ever produced by style string parsing; the full
/// scale exists so the descriptor round-trips through system matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    #[default]
    Normal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slant {
    #[default]
    Upright,
    Italic,
    Oblique,
}

impl Display for Slant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A (weight, width, slant) triple describing one face within a family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub weight: Weight,
    pub width: Width,
    pub slant: Slant,
}

impl FontStyle {
    pub fn new(weight: Weight, slant: Slant) -> Self {
        FontStyle {
            weight,
            width: Width::Normal,
            slant,
        }
    }
}

impl Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.weight, self.slant)
    }
}
