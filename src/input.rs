use egui::{Context, Pos2, PointerButton, Rect};

use crate::geometry::Position;

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Shrink the selection
    Minus,
    /// Grow the selection
    Equals,
    Delete,
    /// Multi-select modifier
    Control,
    /// Flips intersect-select
    ToggleIntersect,
    /// Clears the selection
    Escape,
    Other,
}

impl From<egui::Key> for Key {
    fn from(key: egui::Key) -> Self {
        match key {
            egui::Key::ArrowUp => Key::Up,
            egui::Key::ArrowDown => Key::Down,
            egui::Key::ArrowLeft => Key::Left,
            egui::Key::ArrowRight => Key::Right,
            egui::Key::Minus => Key::Minus,
            egui::Key::Equals | egui::Key::Plus => Key::Equals,
            egui::Key::Delete | egui::Key::Backspace => Key::Delete,
            egui::Key::I => Key::ToggleIntersect,
            egui::Key::Escape => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Events the shell forwards into the editor core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at a canvas position
    PointerDown { position: Position },
    KeyDown { key: Key },
    KeyUp { key: Key },
}

/// Converts raw egui input for one canvas into [`InputEvent`]s.
///
/// Pointer positions are translated into canvas coordinates (relative to the
/// canvas rect's top-left corner). The Ctrl modifier has no key event of its
/// own in egui, so its press and release are derived from modifier changes.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    ctrl_down: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            ctrl_down: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_canvas(&self, pos: Pos2) -> Position {
        Position::from(pos - self.canvas_rect.min.to_vec2())
    }

    /// Process raw egui input and generate editor events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            self.translate(
                input.modifiers.ctrl,
                input
                    .pointer
                    .button_pressed(PointerButton::Primary)
                    .then(|| input.pointer.interact_pos())
                    .flatten(),
                &input.raw.events,
            )
        })
    }

    fn translate(
        &mut self,
        ctrl: bool,
        pressed_at: Option<Pos2>,
        raw_events: &[egui::Event],
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if ctrl != self.ctrl_down {
            self.ctrl_down = ctrl;
            events.push(if ctrl {
                InputEvent::KeyDown { key: Key::Control }
            } else {
                InputEvent::KeyUp { key: Key::Control }
            });
        }

        for event in raw_events {
            if let egui::Event::Key { key, pressed, .. } = event {
                let key = Key::from(*key);
                if key == Key::Other {
                    continue;
                }
                events.push(if *pressed {
                    InputEvent::KeyDown { key }
                } else {
                    InputEvent::KeyUp { key }
                });
            }
        }

        if let Some(pos) = pressed_at {
            if self.canvas_rect.contains(pos) {
                events.push(InputEvent::PointerDown {
                    position: self.to_canvas(pos),
                });
            }
        }

        events
    }
}
