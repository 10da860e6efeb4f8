use egui::Pos2;
use std::sync::Arc;

// Immutable stroke for sharing
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
}

// Mutable stroke for editing while the pointer is down
#[derive(Debug)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    width: f32,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    // Create a new immutable stroke. Width is captured once; later width
    // selections never change strokes already drawn.
    pub fn new(width: f32, points: Vec<Pos2>) -> Self {
        Self { points, width }
    }

    // Create a new reference-counted Stroke
    pub fn new_ref(width: f32, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(width, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl MutableStroke {
    // Create a new mutable stroke for editing
    pub fn new(width: f32) -> Self {
        Self {
            points: Vec::new(),
            width,
        }
    }

    // Add a point to the mutable stroke
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // Convert to an immutable Stroke
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.width, self.points.clone())
    }

    // Convert to a reference-counted StrokeRef
    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }

    // Get a reference to the points for preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_finalized_stroke_keeps_points_and_width() {
        let mut stroke = MutableStroke::new(6.0);
        stroke.add_point(pos2(1.0, 2.0));
        stroke.add_point(pos2(3.0, 4.0));

        let finished = stroke.to_stroke();
        assert_eq!(finished.points(), &[pos2(1.0, 2.0), pos2(3.0, 4.0)]);
        assert_eq!(finished.width(), 6.0);
    }
}
