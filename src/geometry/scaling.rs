use super::{Position, centroid};
use crate::error::EditorResult;

/// Uniformly scales `point` about `center`: `center + (point - center) * factor`.
///
/// Plain vector arithmetic, so it is defined for every direction including
/// axis-aligned offsets.
pub fn scale_point_about_center(point: Position, center: Position, factor: f64) -> Position {
    center + (point - center) * factor
}

/// Scales a set of points about their own centroid, in place.
///
/// Returns the pivot that was used.
pub fn scale_about_centroid(points: &mut [Position], factor: f64) -> EditorResult<Position> {
    let pivot = centroid(points)?;
    for point in points.iter_mut() {
        *point = scale_point_about_center(*point, pivot, factor);
    }
    Ok(pivot)
}
