use std::path::Path;

use egui::{Key, Modifiers, PointerButton};
use log::info;

use crate::document::Document;
use crate::export;
use crate::input::{InputEvent, InputHandler};
use crate::renderer::{CANVAS_SIZE, Renderer};
use crate::state::{EditorState, THIN_WIDTH, Tool};

/// Sticker glyphs offered out of the box.
pub const DEFAULT_STICKERS: [&str; 3] = ["🍎", "⭐", "🎉"];

/// We derive Deserialize/Serialize so we can persist UI preferences on
/// shutdown. The drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    editor: EditorState,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,

    // Persisted preferences
    sticker_choices: Vec<String>,
    brush_width: f32,

    // Modal state
    #[serde(skip)]
    show_clear_confirm: bool,
    #[serde(skip)]
    show_export_confirm: bool,
    #[serde(skip)]
    show_sticker_entry: bool,
    #[serde(skip)]
    sticker_entry: String,
    #[serde(skip)]
    export_status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            document: Document::new(),
            editor: EditorState::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::ZERO),
            sticker_choices: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            brush_width: THIN_WIDTH,
            show_clear_confirm: false,
            show_export_confirm: false,
            show_sticker_entry: false,
            sticker_entry: String::new(),
            export_status: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: SketchApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let width = app.brush_width;
        app.editor.select_brush(width, &mut app.document);
        app
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool(&self) -> &Tool {
        self.editor.tool()
    }

    pub fn sticker_choices(&self) -> &[String] {
        &self.sticker_choices
    }

    pub fn export_status(&self) -> Option<&str> {
        self.export_status.as_deref()
    }

    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.can_redo()
    }

    pub fn undo(&mut self) {
        if self.document.undo() {
            info!("undo ({} drawables left)", self.document.drawables().len());
        }
    }

    pub fn redo(&mut self) {
        if self.document.redo() {
            info!("redo ({} drawables)", self.document.drawables().len());
        }
    }

    pub fn select_brush(&mut self, width: f32) {
        self.brush_width = width;
        self.editor.select_brush(width, &mut self.document);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.editor.select_sticker(glyph, &mut self.document);
    }

    pub fn request_clear(&mut self) {
        self.show_clear_confirm = true;
    }

    pub fn request_export(&mut self) {
        self.show_export_confirm = true;
    }

    pub fn open_sticker_entry(&mut self) {
        self.show_sticker_entry = true;
    }

    /// Translate this frame's raw input into editor transitions and refresh
    /// the renderer's preview state.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::PointerDown {
                    location,
                    button: PointerButton::Primary,
                } if location.is_in_canvas => {
                    self.editor.on_pointer_down(location.position, &mut self.document);
                }
                InputEvent::PointerMove {
                    location,
                    primary_down,
                } => {
                    if location.is_in_canvas {
                        self.editor
                            .on_pointer_move(location.position, primary_down, &mut self.document);
                    } else {
                        // Off the surface only the cursor preview goes away.
                        self.editor.on_pointer_leave();
                    }
                }
                // Releases are honored wherever they happen, so a drag that
                // wandered off the canvas still commits.
                InputEvent::PointerUp {
                    button: PointerButton::Primary,
                    ..
                } => {
                    self.editor.on_pointer_up(&mut self.document);
                }
                InputEvent::PointerLeave => self.editor.on_pointer_leave(),
                InputEvent::KeyDown { key, modifiers } => self.handle_shortcut(key, modifiers),
                _ => {}
            }
        }
        self.editor.update_preview(&mut self.renderer);
    }

    pub fn render_canvas(&self, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(painter, rect, &self.document);
    }

    fn handle_shortcut(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.command && key == Key::Z && modifiers.shift {
            self.redo();
        } else if modifiers.command && key == Key::Z {
            self.undo();
        } else if modifiers.command && key == Key::Y {
            self.redo();
        }
    }

    fn show_clear_modal(&mut self, ctx: &egui::Context) {
        if !self.show_clear_confirm {
            return;
        }
        egui::Window::new("Clear Drawing")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Erase the whole drawing? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.document.clear();
                        info!("cleared drawing");
                        self.show_clear_confirm = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_clear_confirm = false;
                    }
                });
            });
    }

    fn show_export_modal(&mut self, ctx: &egui::Context) {
        if !self.show_export_confirm {
            return;
        }
        egui::Window::new("Export Drawing")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Save the drawing as {}?", export::EXPORT_FILE_NAME));
                ui.horizontal(|ui| {
                    if ui.button("Export").clicked() {
                        let logical = CANVAS_SIZE as u32;
                        let result = export::write_png(
                            &self.document,
                            self.renderer.background(),
                            [logical, logical],
                            Path::new(export::EXPORT_FILE_NAME),
                        );
                        self.export_status = Some(match result {
                            Ok(()) => format!("Saved {}", export::EXPORT_FILE_NAME),
                            Err(err) => {
                                log::error!("export failed: {err}");
                                format!("Export failed: {err}")
                            }
                        });
                        self.show_export_confirm = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_export_confirm = false;
                    }
                });
            });
    }

    fn show_sticker_entry_modal(&mut self, ctx: &egui::Context) {
        if !self.show_sticker_entry {
            return;
        }
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Sticker text:");
                ui.text_edit_singleline(&mut self.sticker_entry);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        let glyph = self.sticker_entry.trim().to_owned();
                        if !glyph.is_empty() {
                            if !self.sticker_choices.contains(&glyph) {
                                info!("added custom sticker {glyph:?}");
                                self.sticker_choices.push(glyph.clone());
                            }
                            self.editor.select_sticker(glyph, &mut self.document);
                        }
                        self.sticker_entry.clear();
                        self.show_sticker_entry = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.sticker_entry.clear();
                        self.show_sticker_entry = false;
                    }
                });
            });
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::panels::tools_panel(self, ctx);
        crate::panels::central_panel(self, ctx);

        self.show_clear_modal(ctx);
        self.show_export_modal(ctx);
        self.show_sticker_entry_modal(ctx);
    }
}
