use egui::Color32;

use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::EditorContext;

/// Thin eframe shell around [`EditorContext`].
///
/// It owns the event source and the drawing surface; every editing decision
/// is made by the editor core.
pub struct ShapeEditorApp {
    editor: EditorContext,
    input: InputHandler,
    /// Last color chosen in the color picker
    picked_color: Color32,
    canvas_size: egui::Vec2,
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_config(config)
    }

    /// Builds the app without a creation context
    pub fn with_config(config: EditorConfig) -> Self {
        let editor = EditorContext::new(config).unwrap_or_else(|err| {
            log::warn!("Invalid editor config ({err}), using defaults");
            EditorContext::default()
        });
        let picked_color = editor.config().default_color.color32();

        Self {
            editor,
            input: InputHandler::new(egui::Rect::NOTHING),
            picked_color,
            canvas_size: egui::Vec2::ZERO,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn picked_color_mut(&mut self) -> &mut Color32 {
        &mut self.picked_color
    }

    pub fn picked_color(&self) -> Color32 {
        self.picked_color
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: egui::Vec2) {
        if size != self.canvas_size {
            log::debug!("Canvas size: {} {}", size.x, size.y);
            self.canvas_size = size;
        }
    }
}

impl Default for ShapeEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
