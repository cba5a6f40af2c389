use std::fmt;

use uuid::Uuid;

use crate::color::ShapeColor;
use crate::error::{EditorError, EditorResult};
use crate::geometry::Position;

/// Smallest radius (or section half-length) a shape may be resized to
pub const MIN_SHAPE_SIZE: f64 = 1.0;

/// Identity of a shape inside a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State every shape carries regardless of its geometry.
///
/// Cloning mints a new [`ShapeId`]: a copy is a different shape that
/// happens to look the same.
#[derive(Debug, PartialEq)]
pub struct ShapeCore {
    pub(crate) id: ShapeId,
    pub(crate) center: Position,
    pub(crate) color: ShapeColor,
    pub(crate) selected: bool,
}

impl ShapeCore {
    pub fn new(center: Position, color: ShapeColor) -> Self {
        Self {
            id: ShapeId::new(),
            center,
            color,
            selected: false,
        }
    }
}

impl Clone for ShapeCore {
    fn clone(&self) -> Self {
        Self {
            id: ShapeId::new(),
            center: self.center,
            color: self.color,
            selected: self.selected,
        }
    }
}

/// Rejects sizes a resize must never produce
pub(crate) fn validate_size(size: f64, what: &str) -> EditorResult<()> {
    if !size.is_finite() || size < MIN_SHAPE_SIZE {
        Err(EditorError::InvalidGeometry(format!(
            "{what} would become {size} (min: {MIN_SHAPE_SIZE})"
        )))
    } else {
        Ok(())
    }
}

pub(crate) fn validate_position(pos: Position) -> EditorResult<()> {
    if pos.is_finite() {
        Ok(())
    } else {
        Err(EditorError::InvalidGeometry(format!(
            "non-finite position ({}, {})",
            pos.x, pos.y
        )))
    }
}
