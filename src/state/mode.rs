use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;
use crate::shape::ShapeKind;

/// How the editor interprets a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Select,
    Circle,
    Ellipse,
    Section,
    Rectangle,
    Square,
    Triangle,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Select,
        Mode::Circle,
        Mode::Ellipse,
        Mode::Section,
        Mode::Rectangle,
        Mode::Square,
        Mode::Triangle,
    ];

    /// Creation modes in the order they appear on the toolbar
    pub const CREATION: [Mode; 6] = [
        Mode::Ellipse,
        Mode::Circle,
        Mode::Section,
        Mode::Rectangle,
        Mode::Square,
        Mode::Triangle,
    ];

    /// The kind of shape a press creates, `None` in select mode
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Mode::Select => None,
            Mode::Circle => Some(ShapeKind::Circle),
            Mode::Ellipse => Some(ShapeKind::Ellipse),
            Mode::Section => Some(ShapeKind::Section),
            Mode::Rectangle => Some(ShapeKind::Rectangle),
            Mode::Square => Some(ShapeKind::Square),
            Mode::Triangle => Some(ShapeKind::Triangle),
        }
    }

    pub fn is_creation(&self) -> bool {
        self.shape_kind().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self.shape_kind() {
            Some(kind) => kind.name(),
            None => "Select",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownMode(s.to_string()))
    }
}
