use super::common::validate_size;
use super::{Shape, ShapeCore, ShapeKind};
use crate::color::ShapeColor;
use crate::error::EditorResult;
use crate::geometry::{Position, point_in_ellipse};
use crate::renderer::Surface;

/// Axis-aligned ellipse with independent horizontal and vertical radii
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    core: ShapeCore,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    pub fn new(center: Position, rx: f64, ry: f64, color: ShapeColor) -> Self {
        Self {
            core: ShapeCore::new(center, color),
            rx,
            ry,
        }
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }
}

impl Shape for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    /// Outer reach along the major axis. Hits use the ellipse equation in
    /// `contains` instead.
    fn hit_radius(&self) -> f64 {
        self.rx.max(self.ry)
    }

    fn contains(&self, pos: Position) -> bool {
        point_in_ellipse(pos, self.core.center, self.rx, self.ry)
    }

    fn resize(&mut self, delta: f64) -> EditorResult<()> {
        let (rx, ry) = (self.rx + delta, self.ry + delta);
        validate_size(rx.min(ry), "ellipse radius")?;
        self.rx = rx;
        self.ry = ry;
        Ok(())
    }

    fn paint(&self, surface: &mut dyn Surface) {
        surface.ellipse(self.core.center, self.rx, self.ry);
    }
}
