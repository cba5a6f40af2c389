//! The interaction controller of the shape editor.
//!
//! `EditorContext` owns the configuration, the shape collection and the
//! interaction state. The UI shell forwards pointer presses, key presses,
//! mode changes and recolor requests into it and asks it to render itself
//! onto a [`Surface`].
//!
//! Only the `&mut self` event methods mutate shapes; [`EditorContext::render`]
//! takes `&self`, so painting always reflects the last processed event.
//!
//! # Example
//!
//! ```rust
//! use shape_editor::{EditorConfig, EditorContext, Key, Mode};
//!
//! let mut editor = EditorContext::new(EditorConfig::default()).unwrap();
//! editor.set_mode(Mode::Circle);
//! editor.on_pointer_down(200.0, 200.0);
//! assert_eq!(editor.mode(), Mode::Select);
//!
//! editor.on_pointer_down(200.0, 200.0);
//! editor.on_key_down(Key::Right);
//! assert_eq!(editor.shapes().len(), 1);
//! ```
use log::{debug, info, warn};

use super::{EditorState, Mode};
use crate::collection::ShapeCollection;
use crate::color::ShapeColor;
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::geometry::Position;
use crate::input::{InputEvent, Key};
use crate::renderer::{Renderer, Surface};
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeType};

/// What a pointer press did
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// A new shape was appended
    Created { id: ShapeId, kind: ShapeKind },
    /// These shapes were hit and are now selected
    Selected(Vec<ShapeId>),
    /// Nothing was under the cursor
    Missed,
    /// The press could not be processed (e.g. non-finite coordinates)
    Rejected,
}

/// What a key press or release did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Moved(usize),
    Resized { resized: usize, refused: usize },
    Deleted(usize),
    MultiSelect(bool),
    IntersectSelect(bool),
    SelectionCleared,
    Ignored,
}

#[derive(Debug)]
pub struct EditorContext {
    config: EditorConfig,
    shapes: ShapeCollection,
    state: EditorState,
    renderer: Renderer,
}

impl Default for EditorContext {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self {
            renderer: Renderer::new(&config),
            config,
            shapes: ShapeCollection::new(),
            state: EditorState::new(),
        }
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer: Renderer::new(&config),
            config,
            shapes: ShapeCollection::new(),
            state: EditorState::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.mode() != mode {
            info!("Mode changed: {} -> {}", self.state.mode(), mode);
        }
        self.state.set_mode(mode);
    }

    pub fn set_intersect_select(&mut self, enabled: bool) {
        self.state.set_intersect_select(enabled);
    }

    /// Returns whether a redraw was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        self.state.take_redraw()
    }

    /// Dispatches one shell event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => {
                self.on_pointer_down(position.x, position.y);
            }
            InputEvent::KeyDown { key } => {
                self.on_key_down(key);
            }
            InputEvent::KeyUp { key } => {
                self.on_key_up(key);
            }
        }
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> PointerOutcome {
        let pos = Position::new(x, y);
        if !pos.is_finite() {
            warn!("Ignoring pointer press at non-finite position ({x}, {y})");
            return PointerOutcome::Rejected;
        }

        let outcome = match self.state.mode().shape_kind() {
            None => self.select_at(pos),
            Some(kind) => self.create_at(kind, pos),
        };
        self.state.request_redraw();
        outcome
    }

    fn select_at(&mut self, pos: Position) -> PointerOutcome {
        let additive = self.state.multi_select_held();

        let hits: Vec<ShapeId> = if self.state.intersect_select() {
            if !additive {
                self.shapes.clear_selection();
            }
            let mut hits = Vec::new();
            for shape in self.shapes.iter_mut() {
                if shape.hit_test(pos) {
                    hits.push(shape.id());
                }
            }
            hits
        } else {
            let hit = self
                .shapes
                .iter_mut()
                .find_map(|shape| shape.hit_test(pos).then(|| shape.id()));
            if let Some(id) = hit {
                if !additive {
                    for other in self.shapes.iter_mut().filter(|shape| shape.id() != id) {
                        other.deselect();
                    }
                }
            }
            hit.into_iter().collect()
        };

        debug!(
            "Select at ({}, {}): {} hit(s), additive: {}",
            pos.x,
            pos.y,
            hits.len(),
            additive
        );

        if hits.is_empty() {
            PointerOutcome::Missed
        } else {
            info!("Selected {} shape(s)", hits.len());
            PointerOutcome::Selected(hits)
        }
    }

    fn create_at(&mut self, kind: ShapeKind, pos: Position) -> PointerOutcome {
        let shape = match ShapeType::create(kind, pos, &self.config) {
            Ok(shape) => shape,
            Err(err) => {
                warn!("Could not create {kind}: {err}");
                return PointerOutcome::Rejected;
            }
        };

        self.shapes.clear_selection();
        let id = self.shapes.push(shape);
        info!("Created {kind} {id} at ({}, {})", pos.x, pos.y);

        self.set_mode(Mode::Select);
        PointerOutcome::Created { id, kind }
    }

    pub fn on_key_down(&mut self, key: Key) -> KeyOutcome {
        debug!("Key pressed: {key:?}");
        let step = self.config.move_dist;

        let outcome = match key {
            Key::Up => self.move_selection(Position::new(0.0, -step)),
            Key::Down => self.move_selection(Position::new(0.0, step)),
            Key::Left => self.move_selection(Position::new(-step, 0.0)),
            Key::Right => self.move_selection(Position::new(step, 0.0)),
            Key::Minus => self.resize_selection(-self.config.scale_increment),
            Key::Equals => self.resize_selection(self.config.scale_increment),
            Key::Delete => self.delete_selection(),
            Key::Control => {
                self.state.set_multi_select_held(true);
                return KeyOutcome::MultiSelect(true);
            }
            Key::ToggleIntersect => {
                let enabled = self.state.toggle_intersect_select();
                info!("Intersect select {}", if enabled { "on" } else { "off" });
                return KeyOutcome::IntersectSelect(enabled);
            }
            Key::Escape => {
                self.shapes.clear_selection();
                KeyOutcome::SelectionCleared
            }
            Key::Other => return KeyOutcome::Ignored,
        };

        self.state.request_redraw();
        outcome
    }

    pub fn on_key_up(&mut self, key: Key) -> KeyOutcome {
        if key == Key::Control {
            self.state.set_multi_select_held(false);
            KeyOutcome::MultiSelect(false)
        } else {
            KeyOutcome::Ignored
        }
    }

    fn move_selection(&mut self, delta: Position) -> KeyOutcome {
        let mut moved = 0;
        for shape in self.shapes.selected_mut() {
            shape.move_by(delta);
            moved += 1;
        }
        KeyOutcome::Moved(moved)
    }

    /// Resizes every selected shape. A refused resize leaves that shape
    /// unchanged and does not stop the others.
    fn resize_selection(&mut self, delta: f64) -> KeyOutcome {
        let (mut resized, mut refused) = (0, 0);
        for shape in self.shapes.selected_mut() {
            match shape.resize(delta) {
                Ok(()) => resized += 1,
                Err(err) => {
                    warn!("Resize of {} {} refused: {err}", shape.kind(), shape.id());
                    refused += 1;
                }
            }
        }
        KeyOutcome::Resized { resized, refused }
    }

    fn delete_selection(&mut self) -> KeyOutcome {
        let removed = self.shapes.remove_selected();
        if !removed.is_empty() {
            info!("Deleted {} shape(s)", removed.len());
        }
        KeyOutcome::Deleted(removed.len())
    }

    /// Sets the color of every selected shape and returns how many changed
    pub fn set_color_of_selection(&mut self, color: ShapeColor) -> usize {
        let mut count = 0;
        for shape in self.shapes.selected_mut() {
            shape.set_color(color);
            count += 1;
        }
        if count > 0 {
            info!("Recolored {count} shape(s) to {color}");
            self.state.request_redraw();
        }
        count
    }

    /// Draws all shapes in collection order
    pub fn render(&self, surface: &mut dyn Surface) {
        self.renderer.render(&self.shapes, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(kinds: &[(Mode, f64, f64)]) -> (EditorContext, Vec<ShapeId>) {
        let mut editor = EditorContext::default();
        let mut ids = Vec::new();
        for &(mode, x, y) in kinds {
            editor.set_mode(mode);
            match editor.on_pointer_down(x, y) {
                PointerOutcome::Created { id, .. } => ids.push(id),
                other => panic!("expected creation, got {other:?}"),
            }
        }
        (editor, ids)
    }

    fn selected_ids(editor: &EditorContext) -> Vec<ShapeId> {
        editor.shapes().selected().map(|s| s.id()).collect()
    }

    #[test]
    fn test_create_reverts_to_select_and_deselects() {
        let (mut editor, ids) = editor_with(&[(Mode::Circle, 0.0, 0.0)]);
        editor.on_pointer_down(0.0, 0.0);
        assert_eq!(selected_ids(&editor), ids);

        editor.set_mode(Mode::Ellipse);
        editor.on_pointer_down(500.0, 500.0);
        assert_eq!(editor.mode(), Mode::Select);
        assert_eq!(editor.shapes().len(), 2);
        assert!(selected_ids(&editor).is_empty());
    }

    #[test]
    fn test_first_hit_wins() {
        let (mut editor, ids) =
            editor_with(&[(Mode::Circle, 100.0, 100.0), (Mode::Circle, 120.0, 100.0)]);
        let outcome = editor.on_pointer_down(110.0, 100.0);
        assert_eq!(outcome, PointerOutcome::Selected(vec![ids[0]]));
        assert_eq!(selected_ids(&editor), vec![ids[0]]);
    }

    #[test]
    fn test_intersect_selects_all_hits() {
        let (mut editor, ids) = editor_with(&[
            (Mode::Circle, 100.0, 100.0),
            (Mode::Circle, 120.0, 100.0),
            (Mode::Circle, 600.0, 600.0),
        ]);
        editor.on_pointer_down(600.0, 600.0);
        assert_eq!(editor.on_key_down(Key::ToggleIntersect), KeyOutcome::IntersectSelect(true));

        editor.on_pointer_down(110.0, 100.0);
        assert_eq!(selected_ids(&editor), vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_intersect_with_modifier_is_additive() {
        let (mut editor, ids) = editor_with(&[
            (Mode::Circle, 100.0, 100.0),
            (Mode::Circle, 120.0, 100.0),
            (Mode::Circle, 600.0, 600.0),
        ]);
        editor.on_pointer_down(600.0, 600.0);
        editor.set_intersect_select(true);
        editor.on_key_down(Key::Control);

        let outcome = editor.on_pointer_down(110.0, 100.0);
        assert_eq!(outcome, PointerOutcome::Selected(vec![ids[0], ids[1]]));
        assert_eq!(selected_ids(&editor), ids.to_vec());

        editor.on_key_up(Key::Control);
        editor.on_pointer_down(110.0, 100.0);
        assert_eq!(selected_ids(&editor), vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_intersect_miss_clears_and_creates_nothing() {
        let (mut editor, _) = editor_with(&[(Mode::Circle, 100.0, 100.0)]);
        editor.on_pointer_down(100.0, 100.0);
        editor.set_intersect_select(true);

        assert_eq!(editor.on_pointer_down(900.0, 900.0), PointerOutcome::Missed);
        assert_eq!(editor.shapes().len(), 1);
        assert!(selected_ids(&editor).is_empty());
    }

    #[test]
    fn test_miss_in_select_mode_changes_nothing() {
        let (mut editor, ids) = editor_with(&[(Mode::Circle, 100.0, 100.0)]);
        editor.on_pointer_down(100.0, 100.0);
        assert_eq!(editor.on_pointer_down(900.0, 900.0), PointerOutcome::Missed);
        assert_eq!(editor.shapes().len(), 1);
        assert_eq!(selected_ids(&editor), ids);
    }

    #[test]
    fn test_non_finite_press_is_rejected() {
        let mut editor = EditorContext::default();
        editor.set_mode(Mode::Circle);
        assert_eq!(editor.on_pointer_down(f64::NAN, 1.0), PointerOutcome::Rejected);
        assert!(editor.shapes().is_empty());
        assert_eq!(editor.mode(), Mode::Circle);
    }

    #[test]
    fn test_resize_reports_refusals() {
        let (mut editor, _) = editor_with(&[(Mode::Circle, 100.0, 100.0)]);
        editor.on_pointer_down(100.0, 100.0);

        for _ in 0..6 {
            assert_eq!(
                editor.on_key_down(Key::Minus),
                KeyOutcome::Resized { resized: 1, refused: 0 }
            );
        }
        // 70 - 60 = 10, one more step would reach zero
        assert_eq!(
            editor.on_key_down(Key::Minus),
            KeyOutcome::Resized { resized: 0, refused: 1 }
        );
    }

    #[test]
    fn test_escape_clears_selection() {
        let (mut editor, _) = editor_with(&[(Mode::Circle, 100.0, 100.0)]);
        editor.on_pointer_down(100.0, 100.0);
        assert_eq!(editor.on_key_down(Key::Escape), KeyOutcome::SelectionCleared);
        assert!(selected_ids(&editor).is_empty());
    }

    #[test]
    fn test_control_toggles_multi_select() {
        let mut editor = EditorContext::default();
        editor.on_key_down(Key::Control);
        assert!(editor.state().multi_select_held());
        editor.on_key_up(Key::Control);
        assert!(!editor.state().multi_select_held());
    }

    #[test]
    fn test_key_actions_request_redraw() {
        let (mut editor, _) = editor_with(&[(Mode::Circle, 100.0, 100.0)]);
        editor.take_redraw();
        editor.on_key_down(Key::Up);
        assert!(editor.take_redraw());
        editor.on_key_down(Key::Other);
        assert!(!editor.take_redraw());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EditorConfig {
            radius: -5.0,
            ..EditorConfig::default()
        };
        assert!(EditorContext::new(config).is_err());
    }
}
