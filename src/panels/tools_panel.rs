use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::ShapeEditorApp;
use crate::color::ShapeColor;
use crate::state::Mode;

pub fn tools_panel(app: &mut ShapeEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.menu_button("Menu", |ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.separator();

            let current = app.editor().mode();

            ui.label("Creation:");
            for mode in Mode::CREATION {
                if ui.selectable_label(current == mode, mode.name()).clicked() {
                    log::info!("Mode selected from UI: {}", mode);
                    app.editor_mut().set_mode(mode);
                }
            }
            ui.separator();

            ui.label("Editing:");
            if ui
                .selectable_label(current == Mode::Select, Mode::Select.name())
                .clicked()
            {
                app.editor_mut().set_mode(Mode::Select);
            }

            ui.label("Color:");
            if color_edit_button_srgba(ui, app.picked_color_mut(), Alpha::Opaque).changed() {
                let color = ShapeColor::from(app.picked_color());
                app.editor_mut().set_color_of_selection(color);
            }

            let mut intersect = app.editor().state().intersect_select();
            if ui.checkbox(&mut intersect, "Intersect select (I)").changed() {
                app.editor_mut().set_intersect_select(intersect);
            }
        });
    });
}
