use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke as EguiStroke};

use crate::sticker::{STICKER_SIZE, Sticker};
use crate::stroke::StrokeRef;

/// Color all strokes are drawn with.
pub const STROKE_COLOR: Color32 = Color32::BLACK;

/// Color sticker glyphs are drawn with.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A unit of visual content that knows how to render itself onto a surface.
///
/// The set of variants is closed; rendering dispatches over the tag rather
/// than going through trait objects.
#[derive(Clone, Debug)]
pub enum Drawable {
    Stroke(StrokeRef),
    Sticker(Sticker),
}

impl Drawable {
    /// Draw this unit onto the painter. `origin` is the top-left corner of
    /// the canvas rect; drawable coordinates are surface-relative.
    pub fn draw(&self, painter: &Painter, origin: Pos2) {
        match self {
            Drawable::Stroke(stroke) => {
                let points: Vec<Pos2> = stroke
                    .points()
                    .iter()
                    .map(|p| origin + p.to_vec2())
                    .collect();
                match points.len() {
                    0 => {}
                    // A click without movement still leaves a dot
                    1 => {
                        painter.circle_filled(points[0], stroke.width() / 2.0, STROKE_COLOR);
                    }
                    _ => {
                        painter.add(egui::Shape::line(
                            points,
                            EguiStroke::new(stroke.width(), STROKE_COLOR),
                        ));
                    }
                }
            }
            Drawable::Sticker(sticker) => {
                painter.text(
                    origin + sticker.position().to_vec2(),
                    Align2::CENTER_CENTER,
                    sticker.glyph(),
                    FontId::proportional(STICKER_SIZE),
                    STICKER_COLOR,
                );
            }
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }

    pub fn as_sticker_mut(&mut self) -> Option<&mut Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

/// What the cursor preview should look like for the active tool.
#[derive(Clone, Debug, PartialEq)]
pub enum CursorMode {
    Brush { width: f32 },
    Sticker { glyph: String },
}

/// Ephemeral ghost of the current tool following the pointer. Recreated on
/// every pointer move and discarded when the pointer leaves the surface;
/// never committed to history.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorPreview {
    pub position: Pos2,
    pub mode: CursorMode,
}

impl CursorPreview {
    pub fn draw(&self, painter: &Painter, origin: Pos2) {
        let center = origin + self.position.to_vec2();
        match &self.mode {
            CursorMode::Brush { width } => {
                painter.circle_stroke(
                    center,
                    (width / 2.0).max(1.0),
                    EguiStroke::new(1.0, Color32::GRAY),
                );
            }
            CursorMode::Sticker { glyph } => {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(STICKER_SIZE),
                    Color32::from_black_alpha(140),
                );
            }
        }
    }
}
