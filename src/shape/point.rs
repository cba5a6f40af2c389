use super::{Shape, ShapeCore, ShapeKind};
use crate::color::ShapeColor;
use crate::error::EditorResult;
use crate::geometry::Position;
use crate::renderer::Surface;

/// A bare position. Only used as a section endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    core: ShapeCore,
}

impl Point {
    pub fn new(at: Position, color: ShapeColor) -> Self {
        Self {
            core: ShapeCore::new(at, color),
        }
    }

    pub fn position(&self) -> Position {
        self.core.center
    }

    pub(crate) fn set_position(&mut self, at: Position) {
        self.core.center = at;
    }
}

impl Shape for Point {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn hit_radius(&self) -> f64 {
        0.0
    }

    /// Points have no extent to grow
    fn resize(&mut self, _delta: f64) -> EditorResult<()> {
        Ok(())
    }

    /// Endpoints are drawn as part of their section's line
    fn paint(&self, _surface: &mut dyn Surface) {}
}
