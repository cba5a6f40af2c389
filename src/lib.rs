#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod collection;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;

pub use app::ShapeEditorApp;
pub use collection::ShapeCollection;
pub use color::ShapeColor;
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use geometry::Position;
pub use input::{InputEvent, Key};
pub use renderer::{PainterSurface, Renderer, Surface};
pub use shape::{Shape, ShapeId, ShapeKind, ShapeType};
pub use state::{EditorContext, KeyOutcome, Mode, PointerOutcome};
