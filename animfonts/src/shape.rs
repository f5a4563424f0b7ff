//! Evaluation of path-valued animatable properties.
//!
//! A path property looks like
//!
//! ```json
//! {
//!     "a": 0,                               // 1 when keyframed
//!     "k": {
//!         "c": true,                        // closed contour
//!         "v": [[x, y], ...],               // vertices
//!         "i": [[dx, dy], ...],             // in tangents, relative to v
//!         "o": [[dx, dy], ...]              // out tangents, relative to v
//!     }
//! }
//! ```
//!
//! When keyframed, `k` is instead an array of keyframe objects. Glyph
//! outlines reuse this schema but must never actually animate, so the
//! evaluator reports whether animation was present alongside whatever
//! static path it can produce.

use animdrasil::services::{PathEvaluator, PathValue};
use kurbo::{BezPath, Point, Vec2};
use serde_json::Value;

/// [PathEvaluator] for the document's native path encoding.
///
/// The full animation engine evaluates these properties over time; for font
/// work only the static snapshot and the animated-ness verdict matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShapePathEvaluator;

impl PathEvaluator for ShapePathEvaluator {
    fn evaluate_static_path(&self, value: &Value) -> Option<PathValue> {
        let declared_animated = value.get("a").and_then(Value::as_i64).unwrap_or(0) != 0;
        let k = value.get("k")?;

        // Keyframed values carry an array of frames; some exporters do this
        // without flipping "a", so the shape of "k" is authoritative.
        if let Some(frames) = k.as_array() {
            let geometry = frames
                .first()
                .and_then(|frame| frame.get("s"))
                .and_then(Value::as_array)
                .and_then(|s| s.first())?;
            return Some(PathValue {
                path: bezier_geometry(geometry)?,
                animated: true,
            });
        }

        Some(PathValue {
            path: bezier_geometry(k)?,
            animated: declared_animated,
        })
    }
}

fn bezier_geometry(value: &Value) -> Option<BezPath> {
    let vertices = point_list(value.get("v")?)?;
    let mut path = BezPath::new();
    if vertices.is_empty() {
        return Some(path);
    }

    let in_tangents = vec2_list(value.get("i")?)?;
    let out_tangents = vec2_list(value.get("o")?)?;
    if in_tangents.len() != vertices.len() || out_tangents.len() != vertices.len() {
        return None;
    }
    let closed = value.get("c").and_then(Value::as_bool).unwrap_or(false);

    path.move_to(vertices[0]);
    for i in 1..vertices.len() {
        path.curve_to(
            vertices[i - 1] + out_tangents[i - 1],
            vertices[i] + in_tangents[i],
            vertices[i],
        );
    }
    if closed {
        let last = vertices.len() - 1;
        path.curve_to(
            vertices[last] + out_tangents[last],
            vertices[0] + in_tangents[0],
            vertices[0],
        );
        path.close_path();
    }
    Some(path)
}

fn point_list(value: &Value) -> Option<Vec<Point>> {
    value
        .as_array()?
        .iter()
        .map(|p| Some(Point::new(coord(p, 0)?, coord(p, 1)?)))
        .collect()
}

fn vec2_list(value: &Value) -> Option<Vec<Vec2>> {
    value
        .as_array()?
        .iter()
        .map(|p| Some(Vec2::new(coord(p, 0)?, coord(p, 1)?)))
        .collect()
}

fn coord(point: &Value, idx: usize) -> Option<f64> {
    point.get(idx).and_then(Value::as_f64)
}
