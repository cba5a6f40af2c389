use super::common::validate_size;
use super::{Shape, ShapeCore, ShapeKind};
use crate::color::ShapeColor;
use crate::error::EditorResult;
use crate::geometry::Position;
use crate::renderer::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    core: ShapeCore,
    radius: f64,
}

impl Circle {
    pub fn new(center: Position, radius: f64, color: ShapeColor) -> Self {
        Self {
            core: ShapeCore::new(center, color),
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn hit_radius(&self) -> f64 {
        self.radius
    }

    fn resize(&mut self, delta: f64) -> EditorResult<()> {
        let radius = self.radius + delta;
        validate_size(radius, "circle radius")?;
        self.radius = radius;
        Ok(())
    }

    fn paint(&self, surface: &mut dyn Surface) {
        surface.circle(self.core.center, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;

    #[test]
    fn test_contains_tracks_current_radius() {
        let mut circle = Circle::new(Position::new(0.0, 0.0), 70.0, ShapeColor::RED);
        let probe = Position::new(75.0, 0.0);
        assert!(!circle.contains(probe));

        circle.resize(10.0).unwrap();
        assert_eq!(circle.radius(), 80.0);
        assert!(circle.contains(probe));
    }

    #[test]
    fn test_shrink_below_minimum_is_refused() {
        let mut circle = Circle::new(Position::new(0.0, 0.0), 5.0, ShapeColor::RED);
        let result = circle.resize(-10.0);
        assert!(matches!(result, Err(EditorError::InvalidGeometry(_))));
        assert_eq!(circle.radius(), 5.0);
    }
}
