use crate::SketchApp;
use crate::renderer::CANVAS_SIZE;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketch On Me");
        ui.add_space(8.0);

        let (response, painter) =
            ui.allocate_painter(egui::vec2(CANVAS_SIZE, CANVAS_SIZE), egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_canvas_input(ctx, canvas_rect);

        // Render the canvas
        app.render_canvas(&painter, canvas_rect);
    });
}
