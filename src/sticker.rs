use egui::Pos2;

/// Font size a sticker glyph is rendered at, in surface pixels.
pub const STICKER_SIZE: f32 = 32.0;

/// Maximum distance from a sticker's center that still counts as a hit
/// when picking one up for a drag. Scales with the rendered glyph size.
pub const PICK_RADIUS: f32 = STICKER_SIZE * 0.5 + 4.0;

/// A placeable, draggable glyph at a fixed position on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    glyph: String,
    position: Pos2,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2) -> Self {
        Self {
            glyph: glyph.into(),
            position,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    /// Euclidean-distance hit test against the pick radius.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.position.distance(pos) <= PICK_RADIUS
    }
}
