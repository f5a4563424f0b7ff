//! Best-effort parsing of font style strings such as "ExtraBoldItalic".
//!
//! Documents carry the style as one free-form token; we peel a weight name
//! off the front, then a slant name off what remains. Anything left over is
//! warned about and ignored, never fatal.

use animdrasil::style::{FontStyle, Slant, Weight};
use log::warn;

// Table order is the tie-break: the first matching prefix wins. Note that
// "Extra" sits ahead of "ExtraBold"/"ExtraLight"/..., so "ExtraLightItalic"
// parses as ExtraBold weight with a "LightItalic" residual warning. That
// matches how After Effects exports have always been interpreted.
const WEIGHT_TOKENS: &[(&str, Weight)] = &[
    ("Regular", Weight::Normal),
    ("Medium", Weight::Medium),
    ("Bold", Weight::Bold),
    ("Light", Weight::Light),
    ("Black", Weight::Black),
    ("Thin", Weight::Thin),
    ("Extra", Weight::ExtraBold),
    ("ExtraBold", Weight::ExtraBold),
    ("ExtraLight", Weight::ExtraLight),
    ("ExtraBlack", Weight::ExtraBlack),
    ("SemiBold", Weight::SemiBold),
    ("Hairline", Weight::Thin),
    ("Normal", Weight::Normal),
    ("Plain", Weight::Normal),
    ("Standard", Weight::Normal),
    ("Roman", Weight::Normal),
    ("Heavy", Weight::Black),
    ("Demi", Weight::SemiBold),
    ("DemiBold", Weight::SemiBold),
    ("Ultra", Weight::ExtraBold),
    ("UltraBold", Weight::ExtraBold),
    ("UltraBlack", Weight::ExtraBlack),
    ("UltraHeavy", Weight::ExtraBlack),
    ("UltraLight", Weight::ExtraLight),
];

const SLANT_TOKENS: &[(&str, Slant)] = &[("Italic", Slant::Italic), ("Oblique", Slant::Oblique)];

/// Extract a (weight, slant) descriptor from a declared style string.
///
/// Never fails: unrecognized content falls back to normal/upright with a
/// warning.
pub fn parse_font_style(style: &str) -> FontStyle {
    let mut weight = Weight::Normal;
    let mut rest = style;
    for (token, value) in WEIGHT_TOKENS {
        if let Some(suffix) = rest.strip_prefix(token) {
            weight = *value;
            rest = suffix;
            break;
        }
    }

    let mut slant = Slant::Upright;
    if !rest.is_empty() {
        for (token, value) in SLANT_TOKENS {
            if let Some(suffix) = rest.strip_prefix(token) {
                slant = *value;
                rest = suffix;
                break;
            }
        }
    }

    if !rest.is_empty() {
        warn!("Unknown font style: {rest}.");
    }

    FontStyle::new(weight, slant)
}

#[cfg(test)]
mod tests {
    use animdrasil::style::{Slant, Weight};

    use super::parse_font_style;

    #[test]
    fn empty_style_is_normal_upright() {
        let style = parse_font_style("");
        assert_eq!(Weight::Normal, style.weight);
        assert_eq!(Slant::Upright, style.slant);
    }

    #[test]
    fn plain_weights() {
        assert_eq!(Weight::Normal, parse_font_style("Regular").weight);
        assert_eq!(Weight::Medium, parse_font_style("Medium").weight);
        assert_eq!(Weight::SemiBold, parse_font_style("DemiBold").weight);
        assert_eq!(Weight::Black, parse_font_style("Heavy").weight);
        assert_eq!(Weight::Thin, parse_font_style("Hairline").weight);
    }

    #[test]
    fn weight_with_slant_suffix() {
        let style = parse_font_style("BoldItalic");
        assert_eq!(Weight::Bold, style.weight);
        assert_eq!(Slant::Italic, style.slant);

        let style = parse_font_style("LightOblique");
        assert_eq!(Weight::Light, style.weight);
        assert_eq!(Slant::Oblique, style.slant);
    }

    #[test]
    fn slant_only_string() {
        // No weight token at the front; the whole string is the slant.
        let style = parse_font_style("Italic");
        assert_eq!(Weight::Normal, style.weight);
        assert_eq!(Slant::Italic, style.slant);
    }

    #[test]
    fn trailing_junk_keeps_recovered_weight_and_slant_defaults() {
        // Residual text after the weight is not a slant: weight sticks,
        // slant stays upright.
        let style = parse_font_style("BoldCondensed");
        assert_eq!(Weight::Bold, style.weight);
        assert_eq!(Slant::Upright, style.slant);
    }

    #[test]
    fn residual_after_slant_is_warned_and_ignored() {
        let _ = env_logger::builder().is_test(true).try_init();
        // Weight and slant both peel off; the "Foo" residual only warns.
        let style = parse_font_style("BoldItalicFoo");
        assert_eq!(Weight::Bold, style.weight);
        assert_eq!(Slant::Italic, style.slant);
    }

    #[test]
    fn extra_prefix_shadows_longer_tokens() {
        // "Extra" wins the prefix race over "ExtraLight"; documented quirk.
        let style = parse_font_style("ExtraLight");
        assert_eq!(Weight::ExtraBold, style.weight);
    }

    #[test]
    fn unknown_style_falls_back_to_defaults() {
        let style = parse_font_style("Wibble");
        assert_eq!(Weight::Normal, style.weight);
        assert_eq!(Slant::Upright, style.slant);
    }
}
