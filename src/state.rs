//! The interaction state machine for the sketchpad editor.
//!
//! Pointer input drives one of two flows depending on the active tool:
//!
//! ```text
//! brush:    Idle ──down──► DrawingStroke ──up──► Idle   (stroke committed)
//! sticker:  Idle ──down──► PlacingSticker ──up──► Idle  (sticker committed)
//!           Idle ──down on existing──► DraggingSticker ──up──► Idle
//! ```
//!
//! Leaving the surface discards only the cursor preview; an in-progress
//! stroke survives and keeps collecting points when the pointer returns.

use egui::Pos2;
use log::debug;

use crate::document::Document;
use crate::drawable::{CursorMode, CursorPreview, Drawable};
use crate::renderer::Renderer;
use crate::sticker::Sticker;
use crate::stroke::MutableStroke;

/// Brush width selected by the "thin" marker button.
pub const THIN_WIDTH: f32 = 2.0;
/// Brush width selected by the "thick" marker button.
pub const THICK_WIDTH: f32 = 6.0;

/// The active tool. A closed set; the UI switches between them.
#[derive(Clone, Debug, PartialEq)]
pub enum Tool {
    Brush { width: f32 },
    Sticker { glyph: String },
}

/// What the pointer is currently doing on the canvas.
#[derive(Debug, Default)]
pub enum Interaction {
    #[default]
    Idle,
    DrawingStroke(MutableStroke),
    PlacingSticker(Sticker),
    DraggingSticker {
        index: usize,
    },
}

/// Owns the active tool, the pointer interaction state and the cursor
/// preview. All transitions happen synchronously inside input handling.
#[derive(Debug)]
pub struct EditorState {
    tool: Tool,
    interaction: Interaction,
    cursor: Option<CursorPreview>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            tool: Tool::Brush { width: THIN_WIDTH },
            interaction: Interaction::Idle,
            cursor: None,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    pub fn cursor(&self) -> Option<&CursorPreview> {
        self.cursor.as_ref()
    }

    /// Switch to the brush tool with the given width. Finishes any
    /// in-progress interaction first.
    pub fn select_brush(&mut self, width: f32, document: &mut Document) {
        self.finish_interaction(document);
        self.tool = Tool::Brush { width };
    }

    /// Switch to the sticker tool with the given glyph.
    pub fn select_sticker(&mut self, glyph: impl Into<String>, document: &mut Document) {
        self.finish_interaction(document);
        self.tool = Tool::Sticker {
            glyph: glyph.into(),
        };
    }

    /// Pointer pressed on the canvas: start a stroke, pick up a sticker
    /// under the pointer, or start placing a new one.
    pub fn on_pointer_down(&mut self, pos: Pos2, document: &mut Document) {
        // A down event while something is still in progress means the
        // matching up event never reached us; finish the old work first.
        self.finish_interaction(document);

        self.interaction = match &self.tool {
            Tool::Brush { width } => {
                let mut stroke = MutableStroke::new(*width);
                stroke.add_point(pos);
                Interaction::DrawingStroke(stroke)
            }
            Tool::Sticker { glyph } => match document.sticker_at(pos) {
                Some(index) => {
                    debug!("picked up sticker {index} at {pos:?}");
                    Interaction::DraggingSticker { index }
                }
                None => Interaction::PlacingSticker(Sticker::new(glyph.clone(), pos)),
            },
        };
        self.refresh_cursor(pos);
    }

    /// Pointer moved over the canvas. Extends the interaction while the
    /// primary button is held and recreates the cursor preview.
    pub fn on_pointer_move(&mut self, pos: Pos2, primary_down: bool, document: &mut Document) {
        if primary_down {
            match &mut self.interaction {
                Interaction::Idle => {}
                Interaction::DrawingStroke(stroke) => stroke.add_point(pos),
                Interaction::PlacingSticker(sticker) => sticker.set_position(pos),
                Interaction::DraggingSticker { index } => document.move_sticker(*index, pos),
            }
        } else {
            // The release happened where we could not see it.
            self.finish_interaction(document);
        }
        self.refresh_cursor(pos);
    }

    /// Pointer released: commit whatever was in progress and return to idle.
    pub fn on_pointer_up(&mut self, document: &mut Document) {
        self.finish_interaction(document);
    }

    /// Pointer left the surface. Cancels the cursor preview only; an
    /// in-progress stroke or drag stays live.
    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }

    /// Push the in-progress drawable and cursor preview into the renderer
    /// for this frame.
    pub fn update_preview(&self, renderer: &mut Renderer) {
        let preview = match &self.interaction {
            Interaction::DrawingStroke(stroke) if !stroke.is_empty() => {
                Some(Drawable::Stroke(stroke.to_stroke_ref()))
            }
            Interaction::PlacingSticker(sticker) => Some(Drawable::Sticker(sticker.clone())),
            _ => None,
        };
        renderer.set_preview_drawable(preview);
        renderer.set_cursor_preview(self.cursor.clone());
    }

    fn refresh_cursor(&mut self, pos: Pos2) {
        let mode = match &self.tool {
            Tool::Brush { width } => CursorMode::Brush { width: *width },
            Tool::Sticker { glyph } => CursorMode::Sticker {
                glyph: glyph.clone(),
            },
        };
        self.cursor = Some(CursorPreview {
            position: pos,
            mode,
        });
    }

    fn finish_interaction(&mut self, document: &mut Document) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::DrawingStroke(stroke) => {
                if !stroke.is_empty() {
                    debug!("committing stroke with {} points", stroke.points().len());
                    document.commit(Drawable::Stroke(stroke.to_stroke_ref()));
                }
            }
            Interaction::PlacingSticker(sticker) => {
                debug!(
                    "committing sticker {:?} at {:?}",
                    sticker.glyph(),
                    sticker.position()
                );
                document.commit(Drawable::Sticker(sticker));
            }
            // The dragged sticker is already committed; its position was
            // overwritten in place during the drag.
            Interaction::DraggingSticker { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_stroke_commits_on_release() {
        let mut doc = Document::new();
        let mut editor = EditorState::new();

        editor.on_pointer_down(pos2(10.0, 10.0), &mut doc);
        editor.on_pointer_move(pos2(20.0, 20.0), true, &mut doc);
        assert!(doc.is_empty());

        editor.on_pointer_up(&mut doc);
        assert_eq!(doc.drawables().len(), 1);
        assert!(editor.is_idle());
    }

    #[test]
    fn test_pointer_leave_keeps_stroke_in_progress() {
        let mut doc = Document::new();
        let mut editor = EditorState::new();

        editor.on_pointer_down(pos2(10.0, 10.0), &mut doc);
        editor.on_pointer_leave();
        assert!(editor.cursor().is_none());
        assert!(!editor.is_idle());

        editor.on_pointer_move(pos2(30.0, 30.0), true, &mut doc);
        editor.on_pointer_up(&mut doc);
        assert_eq!(doc.drawables().len(), 1);
    }

    #[test]
    fn test_move_without_button_finishes_missed_release() {
        let mut doc = Document::new();
        let mut editor = EditorState::new();

        editor.on_pointer_down(pos2(10.0, 10.0), &mut doc);
        editor.on_pointer_move(pos2(20.0, 20.0), false, &mut doc);
        assert!(editor.is_idle());
        assert_eq!(doc.drawables().len(), 1);
    }

    #[test]
    fn test_tool_width_is_captured_per_stroke() {
        let mut doc = Document::new();
        let mut editor = EditorState::new();

        editor.select_brush(THIN_WIDTH, &mut doc);
        editor.on_pointer_down(pos2(1.0, 1.0), &mut doc);
        editor.on_pointer_up(&mut doc);

        editor.select_brush(THICK_WIDTH, &mut doc);
        editor.on_pointer_down(pos2(5.0, 5.0), &mut doc);
        editor.on_pointer_up(&mut doc);

        let widths: Vec<f32> = doc
            .drawables()
            .iter()
            .map(|d| match d {
                Drawable::Stroke(s) => s.width(),
                _ => panic!("expected strokes"),
            })
            .collect();
        assert_eq!(widths, vec![THIN_WIDTH, THICK_WIDTH]);
    }
}
