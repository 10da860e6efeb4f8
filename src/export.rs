//! PNG export: a one-shot CPU rasterization of the document onto an
//! off-screen image, independent of the live canvas painter.

use std::path::Path;

use ab_glyph::{Font, FontVec, ScaleFont, point};
use egui::{Color32, Pos2, pos2};
use image::{Rgba, RgbaImage};
use log::{info, warn};

use crate::document::Document;
use crate::drawable::{Drawable, STICKER_COLOR, STROKE_COLOR};
use crate::error::ExportError;
use crate::sticker::STICKER_SIZE;

/// Exported images are rendered at this multiple of the logical canvas size.
pub const EXPORT_SCALE: u32 = 4;

/// Fixed output filename the export is offered under.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Rasterize the document at `scale`× the logical size over a solid
/// background. Strokes become stamped-disc polylines; sticker glyphs are
/// drawn through ab_glyph using egui's bundled font data.
pub fn render_image(
    document: &Document,
    background: Color32,
    logical_size: [u32; 2],
    scale: u32,
) -> RgbaImage {
    let [width, height] = logical_size;
    let [r, g, b, a] = background.to_array();
    let mut img = RgbaImage::from_pixel(width * scale, height * scale, Rgba([r, g, b, a]));

    let s = scale as f32;
    for drawable in document.drawables() {
        match drawable {
            Drawable::Stroke(stroke) => {
                let points: Vec<Pos2> = stroke
                    .points()
                    .iter()
                    .map(|p| pos2(p.x * s, p.y * s))
                    .collect();
                let width = stroke.width() * s;
                if points.len() == 1 {
                    draw_circle(&mut img, points[0], width / 2.0, STROKE_COLOR);
                }
                for segment in points.windows(2) {
                    draw_line(&mut img, segment[0], segment[1], STROKE_COLOR, width);
                }
            }
            Drawable::Sticker(sticker) => {
                let center = pos2(sticker.position().x * s, sticker.position().y * s);
                match glyph_font(sticker.glyph()) {
                    Some(font) => draw_text_centered(
                        &mut img,
                        &font,
                        center,
                        sticker.glyph(),
                        STICKER_SIZE * s,
                        STICKER_COLOR,
                    ),
                    None => warn!("no font covers sticker glyph {:?}", sticker.glyph()),
                }
            }
        }
    }
    img
}

/// Render the document and write it as a PNG.
pub fn write_png(
    document: &Document,
    background: Color32,
    logical_size: [u32; 2],
    path: &Path,
) -> Result<(), ExportError> {
    let img = render_image(document, background, logical_size, EXPORT_SCALE);
    img.save(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "exported {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

/// Pick the first of egui's bundled proportional fonts that covers the
/// glyph's first character, falling back to the head of the family.
fn glyph_font(glyph: &str) -> Option<FontVec> {
    let definitions = egui::FontDefinitions::default();
    let family = definitions.families.get(&egui::FontFamily::Proportional)?;
    let target = glyph.chars().next();

    let mut fallback = None;
    for name in family {
        let Some(data) = definitions.font_data.get(name) else {
            continue;
        };
        let bytes = data.font.clone().into_owned();
        let Ok(font) = FontVec::try_from_vec_and_index(bytes, data.index) else {
            continue;
        };
        match target {
            Some(ch) if font.glyph_id(ch).0 != 0 => return Some(font),
            _ => {
                if fallback.is_none() {
                    fallback = Some(font);
                }
            }
        }
    }
    fallback
}

fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Color32) {
    let [r, g, b, a] = color.to_array();
    if a == 0 {
        return;
    }
    let dst = img.get_pixel(x, y).0;
    let src_a = a as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    let blend = |src: u8, dst: u8| {
        let src_f = src as f32 / 255.0;
        let dst_f = dst as f32 / 255.0;
        ((src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    img.put_pixel(
        x,
        y,
        Rgba([
            blend(r, dst[0]),
            blend(g, dst[1]),
            blend(b, dst[2]),
            (out_a * 255.0) as u8,
        ]),
    );
}

fn draw_circle(img: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    if radius <= 0.0 {
        return;
    }
    let radius_sq = radius * radius;
    let width = img.width() as i32;
    let height = img.height() as i32;
    let min_x = (center.x - radius).floor().max(0.0) as i32;
    let max_x = (center.x + radius).ceil().min((width - 1) as f32) as i32;
    let min_y = (center.y - radius).floor().max(0.0) as i32;
    let max_y = (center.y + radius).ceil().min((height - 1) as f32) as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                blend_pixel(img, x as u32, y as u32, color);
            }
        }
    }
}

fn draw_line(img: &mut RgbaImage, start: Pos2, end: Pos2, color: Color32, thickness: f32) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
    let radius = (thickness / 2.0).max(0.5);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let point = pos2(start.x + dx * t, start.y + dy * t);
        draw_circle(img, point, radius, color);
    }
}

fn draw_text_centered(
    img: &mut RgbaImage,
    font: &FontVec,
    center: Pos2,
    text: &str,
    size: f32,
    color: Color32,
) {
    if text.is_empty() {
        return;
    }
    let scaled = font.as_scaled(size);
    let total_width: f32 = text
        .chars()
        .map(|ch| scaled.h_advance(font.glyph_id(ch)))
        .sum();
    let baseline = center.y + (scaled.ascent() + scaled.descent()) / 2.0;
    let mut caret = point(center.x - total_width / 2.0, baseline);

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px >= 0
                    && py >= 0
                    && (px as u32) < img.width()
                    && (py as u32) < img.height()
                {
                    let alpha = (color.a() as f32 * coverage).round().clamp(0.0, 255.0) as u8;
                    let shaded =
                        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);
                    blend_pixel(img, px as u32, py as u32, shaded);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Drawable;
    use crate::sticker::Sticker;
    use crate::stroke::Stroke;
    use egui::pos2;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_export_dimensions_are_scaled() {
        let doc = Document::new();
        let img = render_image(&doc, Color32::WHITE, [256, 256], EXPORT_SCALE);
        assert_eq!(img.width(), 1024);
        assert_eq!(img.height(), 1024);
    }

    #[test]
    fn test_empty_document_is_solid_background() {
        let doc = Document::new();
        let img = render_image(&doc, Color32::WHITE, [64, 64], 2);
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_stroke_leaves_marks_at_scaled_positions() {
        let mut doc = Document::new();
        doc.commit(Drawable::Stroke(Stroke::new_ref(
            4.0,
            vec![pos2(10.0, 10.0), pos2(50.0, 10.0)],
        )));

        let img = render_image(&doc, Color32::WHITE, [64, 64], 4);
        // Middle of the segment, scaled by 4.
        assert_ne!(*img.get_pixel(120, 40), WHITE);
        // Far away from the segment the background is untouched.
        assert_eq!(*img.get_pixel(120, 200), WHITE);
    }

    #[test]
    fn test_sticker_glyph_leaves_marks_near_center() {
        let mut doc = Document::new();
        doc.commit(Drawable::Sticker(Sticker::new("A", pos2(32.0, 32.0))));

        let img = render_image(&doc, Color32::WHITE, [64, 64], 4);
        let center = 32 * 4;
        let touched = (center - 64..center + 64).any(|x| {
            (center - 64..center + 64).any(|y| *img.get_pixel(x as u32, y as u32) != WHITE)
        });
        assert!(touched);
    }

    #[test]
    fn test_render_is_pure() {
        let mut doc = Document::new();
        doc.commit(Drawable::Stroke(Stroke::new_ref(
            2.0,
            vec![pos2(5.0, 5.0), pos2(20.0, 20.0)],
        )));

        let first = render_image(&doc, Color32::WHITE, [32, 32], 2);
        let second = render_image(&doc, Color32::WHITE, [32, 32], 2);
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
