use super::{Shape, ShapeCore, ShapeKind};
use crate::color::ShapeColor;
use crate::error::EditorResult;
use crate::geometry::Position;
use crate::renderer::Surface;

/// A shape kind whose geometry is not defined yet (rectangle, square,
/// triangle). It keeps an anchor so it can be moved and recolored, but it
/// never hits, never paints, and resizing it does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    core: ShapeCore,
    kind: ShapeKind,
}

impl Placeholder {
    pub fn new(kind: ShapeKind, anchor: Position, color: ShapeColor) -> Self {
        Self {
            core: ShapeCore::new(anchor, color),
            kind,
        }
    }
}

impl Shape for Placeholder {
    fn kind(&self) -> ShapeKind {
        self.kind
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

    fn contains(&self, _pos: Position) -> bool {
        false
    }

    fn resize(&mut self, _delta: f64) -> EditorResult<()> {
        Ok(())
    }

    fn paint(&self, _surface: &mut dyn Surface) {}
}
