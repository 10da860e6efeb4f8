#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod renderer;
pub mod document;
pub mod drawable;
pub mod stroke;
pub mod sticker;
pub mod state;
pub mod input;
pub mod panels;
pub mod export;
pub mod error;

pub use app::SketchApp;
pub use renderer::Renderer;
pub use document::Document;
pub use drawable::{CursorMode, CursorPreview, Drawable};
pub use stroke::{MutableStroke, Stroke, StrokeRef};
pub use sticker::Sticker;
pub use state::{EditorState, Interaction, Tool};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use error::ExportError;
