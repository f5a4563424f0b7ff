//! Extraction of static glyph outlines from embedded glyph data.

use animdrasil::services::{PathEvaluator, PathValue};
use kurbo::BezPath;
use serde_json::Value;

use crate::{error::GlyphPathError, json};

/// Build one combined outline from a glyph's `data` object.
///
/// Glyph outline encoding:
///
/// ```json
/// "data": {
///     "shapes": [                         // follows the shape layer format
///         {
///             "ty": "gr",                 // group shape type
///             "it": [                     // group items
///                 {
///                     "ty": "sh",         // actual shape
///                     "ks": <path data>   // animatable path format, but always static
///                 },
///                 ...
///             ]
///         },
///         ...
///     ]
/// }
/// ```
///
/// Absent `data` or absent `shapes` is a space/blank glyph: success with an
/// empty path. Any item whose path fails to evaluate, or evaluates to an
/// animated value, fails the whole glyph; outlines must be static.
pub fn parse_glyph_path(
    data: Option<&Value>,
    evaluator: &dyn PathEvaluator,
) -> Result<BezPath, GlyphPathError> {
    let mut combined = BezPath::new();

    let Some(data) = data else {
        return Ok(combined);
    };
    let Some(shapes) = json::arr_field(data, "shapes") else {
        return Ok(combined);
    };

    for group in shapes {
        let items = json::arr_field(group, "it").ok_or(GlyphPathError::MalformedShapeGroup)?;
        for item in items {
            let value = item.get("ks").ok_or(GlyphPathError::BadPathValue)?;
            let PathValue { path, animated } = evaluator
                .evaluate_static_path(value)
                .ok_or(GlyphPathError::BadPathValue)?;
            if animated {
                return Err(GlyphPathError::AnimatedPath);
            }
            combined.extend(path);
        }
    }

    Ok(combined)
}
