//! The shape model.
//!
//! Every drawable kind implements [`Shape`]; the collection stores them as the
//! closed [`ShapeType`] enum so dispatch stays exhaustive.

use std::fmt;

use crate::color::ShapeColor;
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::geometry::{Position, point_in_circle};
use crate::renderer::Surface;

mod circle;
mod common;
mod ellipse;
mod placeholder;
mod point;
mod section;

pub use circle::Circle;
pub use common::{MIN_SHAPE_SIZE, ShapeCore, ShapeId};
pub use ellipse::Ellipse;
pub use placeholder::Placeholder;
pub use point::Point;
pub use section::Section;

/// Every kind of shape the editor knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Circle,
    Ellipse,
    Section,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Section => "Section",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Kinds that exist as creation modes but have no geometry yet
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common trait that all shapes implement
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn core(&self) -> &ShapeCore;

    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Radius around the center within which a click counts as a hit
    fn hit_radius(&self) -> f64;

    /// Grow (positive) or shrink (negative) the shape.
    ///
    /// Fails without changing the shape if the result would be degenerate.
    fn resize(&mut self, delta: f64) -> EditorResult<()>;

    /// Draw the shape with the surface's current pen
    fn paint(&self, surface: &mut dyn Surface);

    /// Pure hit query; selection is left to the caller
    fn contains(&self, pos: Position) -> bool {
        point_in_circle(pos, self.center(), self.hit_radius())
    }

    fn move_by(&mut self, delta: Position) {
        self.core_mut().center += delta;
    }

    fn id(&self) -> ShapeId {
        self.core().id
    }

    fn center(&self) -> Position {
        self.core().center
    }

    fn color(&self) -> ShapeColor {
        self.core().color
    }

    fn set_color(&mut self, color: ShapeColor) {
        self.core_mut().color = color;
    }

    fn is_selected(&self) -> bool {
        self.core().selected
    }

    fn select(&mut self) {
        self.core_mut().selected = true;
    }

    fn deselect(&mut self) {
        self.core_mut().selected = false;
    }
}

/// Enumeration of all shapes that can live in a collection
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Circle(Circle),
    Ellipse(Ellipse),
    Section(Section),
    Placeholder(Placeholder),
}

impl ShapeType {
    /// Creates a shape of `kind` anchored at `at`, sized from `config`.
    ///
    /// Points cannot be placed on their own.
    pub fn create(kind: ShapeKind, at: Position, config: &EditorConfig) -> EditorResult<Self> {
        common::validate_position(at)?;
        let color = config.default_color;

        let shape = match kind {
            ShapeKind::Circle => ShapeType::Circle(Circle::new(at, config.radius, color)),
            ShapeKind::Ellipse => ShapeType::Ellipse(Ellipse::new(
                at,
                config.radius + config.ellipse_spread,
                config.radius - config.ellipse_spread,
                color,
            )),
            ShapeKind::Section => {
                let offset = Position::new(config.section_offset, config.section_offset);
                ShapeType::Section(Section::new(
                    at,
                    at - offset,
                    at + offset,
                    config.section_scale_factor,
                    color,
                ))
            }
            ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => {
                ShapeType::Placeholder(Placeholder::new(kind, at, color))
            }
            ShapeKind::Point => {
                return Err(EditorError::InvalidGeometry(
                    "a point cannot be placed as a standalone shape".to_string(),
                ));
            }
        };
        Ok(shape)
    }

    /// Hit-test that selects the shape on success.
    ///
    /// Other shapes are left alone; clearing them is the controller's job.
    pub fn hit_test(&mut self, pos: Position) -> bool {
        let hit = self.contains(pos);
        if hit {
            self.select();
        }
        hit
    }

    fn inner(&self) -> &dyn Shape {
        match self {
            ShapeType::Circle(s) => s,
            ShapeType::Ellipse(s) => s,
            ShapeType::Section(s) => s,
            ShapeType::Placeholder(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Shape {
        match self {
            ShapeType::Circle(s) => s,
            ShapeType::Ellipse(s) => s,
            ShapeType::Section(s) => s,
            ShapeType::Placeholder(s) => s,
        }
    }
}

impl Shape for ShapeType {
    fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    fn core(&self) -> &ShapeCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        self.inner_mut().core_mut()
    }

    fn hit_radius(&self) -> f64 {
        self.inner().hit_radius()
    }

    fn resize(&mut self, delta: f64) -> EditorResult<()> {
        self.inner_mut().resize(delta)
    }

    fn paint(&self, surface: &mut dyn Surface) {
        self.inner().paint(surface)
    }

    fn contains(&self, pos: Position) -> bool {
        self.inner().contains(pos)
    }

    fn move_by(&mut self, delta: Position) {
        self.inner_mut().move_by(delta)
    }

    fn set_color(&mut self, color: ShapeColor) {
        self.inner_mut().set_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EditorConfig {
        EditorConfig::default()
    }

    #[test]
    fn test_create_circle_uses_configured_radius() {
        let shape = ShapeType::create(ShapeKind::Circle, Position::new(200.0, 200.0), &config())
            .unwrap();
        match &shape {
            ShapeType::Circle(circle) => assert_eq!(circle.radius(), 70.0),
            other => panic!("expected a circle, got {other:?}"),
        }
        assert_eq!(shape.center(), Position::new(200.0, 200.0));
        assert_eq!(shape.color(), ShapeColor::RED);
        assert!(!shape.is_selected());
    }

    #[test]
    fn test_create_ellipse_spreads_radii() {
        let shape = ShapeType::create(ShapeKind::Ellipse, Position::new(0.0, 0.0), &config())
            .unwrap();
        match shape {
            ShapeType::Ellipse(ellipse) => assert_eq!(ellipse.radii(), (90.0, 50.0)),
            other => panic!("expected an ellipse, got {other:?}"),
        }
    }

    #[test]
    fn test_create_section_offsets_endpoints() {
        let shape = ShapeType::create(ShapeKind::Section, Position::new(100.0, 100.0), &config())
            .unwrap();
        match shape {
            ShapeType::Section(section) => assert_eq!(
                section.endpoints(),
                (Position::new(50.0, 50.0), Position::new(150.0, 150.0))
            ),
            other => panic!("expected a section, got {other:?}"),
        }
    }

    #[test]
    fn test_create_placeholders() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Square, ShapeKind::Triangle] {
            let mut shape = ShapeType::create(kind, Position::new(10.0, 10.0), &config()).unwrap();
            assert_eq!(shape.kind(), kind);
            assert!(kind.is_placeholder());
            assert!(!shape.contains(Position::new(10.0, 10.0)));
            assert!(shape.resize(10.0).is_ok());
            shape.move_by(Position::new(5.0, 0.0));
            assert_eq!(shape.center(), Position::new(15.0, 10.0));
        }
    }

    #[test]
    fn test_point_is_not_creatable() {
        assert!(ShapeType::create(ShapeKind::Point, Position::ZERO, &config()).is_err());
    }

    #[test]
    fn test_non_finite_position_is_rejected() {
        let result = ShapeType::create(ShapeKind::Circle, Position::new(f64::NAN, 0.0), &config());
        assert!(matches!(result, Err(EditorError::InvalidGeometry(_))));
    }

    #[test]
    fn test_hit_test_selects_on_hit_only() {
        let mut shape =
            ShapeType::create(ShapeKind::Circle, Position::new(0.0, 0.0), &config()).unwrap();
        assert!(!shape.hit_test(Position::new(100.0, 0.0)));
        assert!(!shape.is_selected());
        assert!(shape.hit_test(Position::new(0.0, 0.0)));
        assert!(shape.is_selected());
    }

    #[test]
    fn test_set_color_reaches_section_endpoints() {
        let mut shape =
            ShapeType::create(ShapeKind::Section, Position::new(0.0, 0.0), &config()).unwrap();
        let blue = ShapeColor::from_rgb(0, 0, 255);
        shape.set_color(blue);
        assert_eq!(shape.color(), blue);
    }
}
