use egui::{Color32, Sense};

use crate::ShapeEditorApp;
use crate::input::InputEvent;
use crate::renderer::PainterSurface;

const HELP_TEXT: &str = "Hold CTRL to select multiple\n\
                         Use ARROWS to move objects, -/= to resize\n\
                         Press DELETE to delete selected, I to toggle intersect select";

pub fn central_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        let editor = app.editor();
        ui.horizontal(|ui| {
            ui.label(format!("Current mode: {}", editor.mode()));
            ui.separator();
            ui.label(format!(
                "Shapes: {} ({} selected)",
                editor.shapes().len(),
                editor.shapes().selected_count()
            ));
            ui.separator();
            let size = app.canvas_size();
            ui.label(format!("Canvas size: {:.0} {:.0}", size.x, size.y));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.label(HELP_TEXT);

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        app.set_canvas_size(rect.size());

        app.input_mut().set_canvas_rect(rect);
        // Presses under a popup (e.g. the color picker) belong to the popup
        let hovered = response.hovered();
        for event in app.input_mut().process_input(ctx) {
            if !hovered && matches!(event, InputEvent::PointerDown { .. }) {
                continue;
            }
            app.editor_mut().handle_event(event);
        }

        painter.rect_filled(rect, 0.0, Color32::WHITE);
        let mut surface = PainterSurface::new(&painter, rect.min);
        app.editor().render(&mut surface);

        if app.editor_mut().take_redraw() {
            ctx.request_repaint();
        }
    });
}
