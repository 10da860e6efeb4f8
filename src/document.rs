use egui::Pos2;

use crate::drawable::Drawable;

/// The drawing history: an ordered sequence of committed drawables plus a
/// redo buffer. The committed sequence in order is exactly what renders;
/// insertion order is paint order, later entries on top.
#[derive(Debug, Default)]
pub struct Document {
    committed: Vec<Drawable>,
    redo_stack: Vec<Drawable>,
}

impl Document {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Finalize a drawable into permanent history. Any new work invalidates
    /// the redo buffer.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the most recent drawable onto the redo buffer. No-op on an
    /// empty history; returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        if let Some(drawable) = self.committed.pop() {
            self.redo_stack.push(drawable);
            true
        } else {
            false
        }
    }

    /// Move the top of the redo buffer back onto the committed sequence.
    /// No-op when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(drawable) = self.redo_stack.pop() {
            self.committed.push(drawable);
            true
        } else {
            false
        }
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Empty both sequences. There is no way back from this; callers gate it
    /// behind a confirmation.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// Index of the topmost committed sticker within pick radius of `pos`,
    /// if any. Later entries paint on top, so they are checked first.
    pub fn sticker_at(&self, pos: Pos2) -> Option<usize> {
        self.committed
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, drawable)| match drawable.as_sticker() {
                Some(sticker) if sticker.hit_test(pos) => Some(index),
                _ => None,
            })
    }

    /// Overwrite a committed sticker's position in place. Dragging does not
    /// create a history entry and leaves the redo buffer untouched.
    pub fn move_sticker(&mut self, index: usize, pos: Pos2) {
        if let Some(sticker) = self
            .committed
            .get_mut(index)
            .and_then(|drawable| drawable.as_sticker_mut())
        {
            sticker.set_position(pos);
        }
    }
}
