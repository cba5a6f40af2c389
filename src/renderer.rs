// src/renderer.rs
use eframe::egui;

use crate::collection::ShapeCollection;
use crate::color::ShapeColor;
use crate::config::EditorConfig;
use crate::geometry::Position;
use crate::shape::Shape;

/// Number of straight segments an ellipse outline is approximated with
const ELLIPSE_SEGMENTS: usize = 64;

/// Drawing target for shapes.
///
/// Coordinates are canvas coordinates; every primitive is stroked with the
/// pen set by the last call to [`Surface::set_pen`].
pub trait Surface {
    fn set_pen(&mut self, color: ShapeColor, width: f32);

    fn line(&mut self, from: Position, to: Position);

    fn circle(&mut self, center: Position, radius: f64);

    fn ellipse(&mut self, center: Position, rx: f64, ry: f64);
}

/// [`Surface`] backed by an egui painter.
///
/// Canvas coordinates are relative to `origin`, usually the top-left corner
/// of the allocated canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Vec2,
    pen: egui::Stroke,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            pen: egui::Stroke::new(1.0, egui::Color32::RED),
        }
    }

    fn to_screen(&self, pos: Position) -> egui::Pos2 {
        pos.to_pos2() + self.origin
    }
}

impl Surface for PainterSurface<'_> {
    fn set_pen(&mut self, color: ShapeColor, width: f32) {
        self.pen = egui::Stroke::new(width, color.color32());
    }

    fn line(&mut self, from: Position, to: Position) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.pen);
    }

    fn circle(&mut self, center: Position, radius: f64) {
        self.painter
            .circle_stroke(self.to_screen(center), radius as f32, self.pen);
    }

    fn ellipse(&mut self, center: Position, rx: f64, ry: f64) {
        let points = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
                let offset = Position::new(rx * angle.cos(), ry * angle.sin());
                self.to_screen(center + offset)
            })
            .collect();
        self.painter.add(egui::Shape::closed_line(points, self.pen));
    }
}

/// Walks a shape collection in paint order and draws each shape
#[derive(Debug, Clone)]
pub struct Renderer {
    selection_color: ShapeColor,
    stroke_width: f32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            selection_color: config.selection_color,
            stroke_width: config.stroke_width,
        }
    }

    /// Draws every shape in collection order.
    ///
    /// Selected shapes use the highlight color, the rest their own color.
    pub fn render(&self, shapes: &ShapeCollection, surface: &mut dyn Surface) {
        for shape in shapes.iter() {
            let color = if shape.is_selected() {
                self.selection_color
            } else {
                shape.color()
            };
            surface.set_pen(color, self.stroke_width);
            shape.paint(surface);
        }
    }

    pub fn selection_color(&self) -> ShapeColor {
        self.selection_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
}
