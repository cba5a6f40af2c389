use super::Mode;

/// Interaction state of the editor.
///
/// The mode decides what a pointer press means:
/// ```text
///   ┌──────────┐  set_mode(kind)  ┌──────────────┐
///   │          ├─────────────────►│              │
///   │  Select  │                  │  Create kind │
///   │          │◄─────────────────┤              │
///   └──────────┘  press (creates  └──────────────┘
///                 one shape)
/// ```
/// The two selection flags only matter in select mode: `multi_select_held`
/// makes selection additive, `intersect_select` selects every shape under the
/// cursor instead of the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    mode: Mode,
    multi_select_held: bool,
    intersect_select: bool,
    needs_redraw: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn is_selecting(&self) -> bool {
        self.mode == Mode::Select
    }

    pub fn multi_select_held(&self) -> bool {
        self.multi_select_held
    }

    pub fn set_multi_select_held(&mut self, held: bool) {
        self.multi_select_held = held;
    }

    pub fn intersect_select(&self) -> bool {
        self.intersect_select
    }

    pub fn set_intersect_select(&mut self, enabled: bool) {
        self.intersect_select = enabled;
    }

    /// Flips intersect-select and returns the new value
    pub fn toggle_intersect_select(&mut self) -> bool {
        self.intersect_select = !self.intersect_select;
        self.intersect_select
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw was pending and clears the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
