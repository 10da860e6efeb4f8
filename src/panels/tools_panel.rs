use crate::SketchApp;
use crate::state::{THICK_WIDTH, THIN_WIDTH, Tool};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            // Brush width selection
            let is_thin = matches!(app.tool(), Tool::Brush { width } if *width == THIN_WIDTH);
            let is_thick = matches!(app.tool(), Tool::Brush { width } if *width == THICK_WIDTH);
            ui.horizontal(|ui| {
                if ui.selectable_label(is_thin, "🖌 Thin").clicked() {
                    log::info!("tool selected from UI: thin brush");
                    app.select_brush(THIN_WIDTH);
                }
                if ui.selectable_label(is_thick, "🖌 Thick").clicked() {
                    log::info!("tool selected from UI: thick brush");
                    app.select_brush(THICK_WIDTH);
                }
            });

            ui.separator();

            ui.label("Stickers:");
            ui.horizontal_wrapped(|ui| {
                for glyph in app.sticker_choices().to_vec() {
                    let selected =
                        matches!(app.tool(), Tool::Sticker { glyph: active } if *active == glyph);
                    if ui.selectable_label(selected, &glyph).clicked() {
                        log::info!("tool selected from UI: sticker {glyph:?}");
                        app.select_sticker(&glyph);
                    }
                }
                if ui.button("➕").on_hover_text("Add a custom sticker").clicked() {
                    app.open_sticker_entry();
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.can_undo();
                let can_redo = app.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            if ui.button("Clear Drawing").clicked() {
                app.request_clear();
            }

            ui.separator();

            if ui.button("Export PNG").clicked() {
                app.request_export();
            }
            if let Some(status) = app.export_status() {
                ui.label(status.to_owned());
            }
        });
}
