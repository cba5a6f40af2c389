use super::common::{validate_position, validate_size};
use super::{Point, Shape, ShapeCore, ShapeKind};
use crate::color::ShapeColor;
use crate::error::EditorResult;
use crate::geometry::{Position, centroid, distance, scale_point_about_center};
use crate::renderer::Surface;

/// Line segment between two endpoints.
///
/// The center is the anchor the segment scales around. It is set at creation
/// time and need not be the true midpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    core: ShapeCore,
    p1: Point,
    p2: Point,
    scale_factor: f64,
}

impl Section {
    pub fn new(
        center: Position,
        p1: Position,
        p2: Position,
        scale_factor: f64,
        color: ShapeColor,
    ) -> Self {
        Self {
            core: ShapeCore::new(center, color),
            p1: Point::new(p1, color),
            p2: Point::new(p2, color),
            scale_factor,
        }
    }

    /// Builds a section anchored at the centroid of its endpoints
    pub fn from_endpoints(
        p1: Position,
        p2: Position,
        scale_factor: f64,
        color: ShapeColor,
    ) -> EditorResult<Self> {
        let center = centroid(&[p1, p2])?;
        Ok(Self::new(center, p1, p2, scale_factor, color))
    }

    pub fn endpoints(&self) -> (Position, Position) {
        (self.p1.position(), self.p2.position())
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl Shape for Section {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Section
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    /// Distance from the anchor to the farther endpoint
    fn hit_radius(&self) -> f64 {
        let center = self.core.center;
        distance(center, self.p1.position()).max(distance(center, self.p2.position()))
    }

    fn move_by(&mut self, delta: Position) {
        self.p1.move_by(delta);
        self.p2.move_by(delta);
        self.core.center += delta;
    }

    /// Scales both endpoints about the anchor. Only the sign of `delta` is
    /// used: positive grows by the scale factor, negative shrinks by its
    /// reciprocal.
    fn resize(&mut self, delta: f64) -> EditorResult<()> {
        let factor = if delta > 0.0 {
            self.scale_factor
        } else if delta < 0.0 {
            self.scale_factor.recip()
        } else {
            return Ok(());
        };

        let center = self.core.center;
        let p1 = scale_point_about_center(self.p1.position(), center, factor);
        let p2 = scale_point_about_center(self.p2.position(), center, factor);
        validate_position(p1)?;
        validate_position(p2)?;
        validate_size(
            distance(center, p1).max(distance(center, p2)),
            "section half-length",
        )?;

        self.p1.set_position(p1);
        self.p2.set_position(p2);
        Ok(())
    }

    fn set_color(&mut self, color: ShapeColor) {
        self.core.color = color;
        self.p1.set_color(color);
        self.p2.set_color(color);
    }

    fn paint(&self, surface: &mut dyn Surface) {
        surface.line(self.p1.position(), self.p2.position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_at(x: f64, y: f64) -> Section {
        let center = Position::new(x, y);
        Section::new(
            center,
            Position::new(x - 50.0, y - 50.0),
            Position::new(x + 50.0, y + 50.0),
            1.5,
            ShapeColor::RED,
        )
    }

    #[test]
    fn test_grow_preserves_direction_and_ratio() {
        let mut section = section_at(100.0, 100.0);
        section.resize(10.0).unwrap();

        let (p1, p2) = section.endpoints();
        assert!((p1.x - 25.0).abs() < 1e-9 && (p1.y - 25.0).abs() < 1e-9);
        assert!((p2.x - 175.0).abs() < 1e-9 && (p2.y - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_shrink_undoes_grow() {
        let mut section = section_at(0.0, 0.0);
        let before = section.endpoints();
        section.resize(10.0).unwrap();
        section.resize(-3.0).unwrap();
        let after = section.endpoints();
        assert!((before.0.x - after.0.x).abs() < 1e-9);
        assert!((before.1.y - after.1.y).abs() < 1e-9);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut section = section_at(0.0, 0.0);
        let before = section.endpoints();
        section.resize(0.0).unwrap();
        assert_eq!(section.endpoints(), before);
    }

    #[test]
    fn test_vertical_section_scales() {
        let mut section = Section::new(
            Position::new(0.0, 0.0),
            Position::new(0.0, -10.0),
            Position::new(0.0, 20.0),
            2.0,
            ShapeColor::RED,
        );
        section.resize(1.0).unwrap();
        assert_eq!(
            section.endpoints(),
            (Position::new(0.0, -20.0), Position::new(0.0, 40.0))
        );
    }

    #[test]
    fn test_move_carries_endpoints() {
        let mut section = section_at(100.0, 100.0);
        section.move_by(Position::new(40.0, -40.0));
        assert_eq!(section.center(), Position::new(140.0, 60.0));
        assert_eq!(
            section.endpoints(),
            (Position::new(90.0, 10.0), Position::new(190.0, 110.0))
        );
    }

    #[test]
    fn test_from_endpoints_uses_midpoint() {
        let section = Section::from_endpoints(
            Position::new(0.0, 0.0),
            Position::new(10.0, 20.0),
            1.5,
            ShapeColor::RED,
        )
        .unwrap();
        assert_eq!(section.center(), Position::new(5.0, 10.0));
    }

    #[test]
    fn test_shrink_past_minimum_is_refused() {
        let mut section = Section::new(
            Position::new(0.0, 0.0),
            Position::new(-1.0, 0.0),
            Position::new(1.0, 0.0),
            1.5,
            ShapeColor::RED,
        );
        assert!(section.resize(-1.0).is_err());
        assert_eq!(
            section.endpoints(),
            (Position::new(-1.0, 0.0), Position::new(1.0, 0.0))
        );
    }
}
