use egui::{Color32, Painter, Rect};

use crate::document::Document;
use crate::drawable::{CursorPreview, Drawable};

/// Logical size of the square drawing surface, in points.
pub const CANVAS_SIZE: f32 = 256.0;

/// Replays the whole document onto the canvas every frame. Rendering is a
/// pure function of current state; there is no incremental diffing.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
    preview: Option<Drawable>,
    cursor: Option<CursorPreview>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
            preview: None,
            cursor: None,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Set the in-progress drawable shown on top of committed content,
    /// or clear it.
    pub fn set_preview_drawable(&mut self, preview: Option<Drawable>) {
        self.preview = preview;
    }

    /// Set the tool ghost following the pointer, or clear it.
    pub fn set_cursor_preview(&mut self, cursor: Option<CursorPreview>) {
        self.cursor = cursor;
    }

    /// Clear the surface and replay everything in paint order: committed
    /// drawables first, then the in-progress preview, then the cursor
    /// preview topmost.
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        let origin = rect.min;
        for drawable in document.drawables() {
            drawable.draw(&painter, origin);
        }
        if let Some(preview) = &self.preview {
            preview.draw(&painter, origin);
        }
        if let Some(cursor) = &self.cursor {
            cursor.draw(&painter, origin);
        }
    }
}
