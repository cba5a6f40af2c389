use super::{Position, distance};

/// True when `pos` lies inside or on a circle around `center`
pub fn point_in_circle(pos: Position, center: Position, radius: f64) -> bool {
    distance(center, pos) <= radius
}

/// True when `pos` lies inside or on an axis-aligned ellipse.
///
/// Ellipses with a non-positive radius contain nothing.
pub fn point_in_ellipse(pos: Position, center: Position, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }

    let dx = (pos.x - center.x) / rx;
    let dy = (pos.y - center.y) / ry;
    dx * dx + dy * dy <= 1.0
}
