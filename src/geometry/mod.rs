//! Geometry kernel: positions, distances, centroids and pivot scaling.
//!
//! Everything here works in `f64` canvas coordinates. Conversion to egui's
//! `f32` types only happens at the render boundary.

pub mod hit_testing;
pub mod scaling;

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::error::{EditorError, EditorResult};

pub use hit_testing::{point_in_circle, point_in_ellipse};
pub use scaling::{scale_about_centroid, scale_point_about_center};

/// A point (or offset) on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Length of this position taken as a vector from the origin
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<egui::Pos2> for Position {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(f64::from(pos.x), f64::from(pos.y))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, factor: f64) -> Position {
        Position::new(self.x * factor, self.y * factor)
    }
}

/// Euclidean distance between two positions
pub fn distance(a: Position, b: Position) -> f64 {
    (b - a).length()
}

/// Arithmetic mean of a non-empty set of positions
pub fn centroid(points: &[Position]) -> EditorResult<Position> {
    if points.is_empty() {
        return Err(EditorError::InvalidGeometry(
            "centroid of an empty point set".to_string(),
        ));
    }

    let sum = points
        .iter()
        .fold(Position::ZERO, |acc, point| acc + *point);
    Ok(sum * (1.0 / points.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_centroid_of_square() {
        let points = [
            Position::new(3.0, 3.0),
            Position::new(1.0, 3.0),
            Position::new(1.0, 1.0),
            Position::new(3.0, 1.0),
        ];
        assert_eq!(centroid(&points).unwrap(), Position::new(2.0, 2.0));
    }

    #[test]
    fn test_centroid_single_point() {
        let point = Position::new(-7.5, 12.0);
        assert_eq!(centroid(&[point]).unwrap(), point);
    }

    #[test]
    fn test_centroid_empty_is_invalid_geometry() {
        let result = centroid(&[]);
        assert!(matches!(result, Err(EditorError::InvalidGeometry(_))));
    }

    #[test]
    fn test_egui_conversion() {
        let pos = Position::from(egui::pos2(10.5, -2.0));
        assert_eq!(pos, Position::new(10.5, -2.0));
        assert_eq!(pos.to_pos2(), egui::pos2(10.5, -2.0));
    }
}
