use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};

use crate::model::{FontSource, Layout};

/// Rendered extent of one line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineSize {
    pub width: u32,
    pub height: u32,
}

/// Measures a line of text as it would be drawn. Pagination and rendering
/// must share one measurer so both passes agree on line heights.
pub trait LineMeasurer {
    fn measure(&self, text: &str) -> LineSize;
}

pub trait GlyphPainter: LineMeasurer {
    /// Draw `text` with the top of its line box at `(x, y)`. Pixels outside
    /// the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str);
}

const BUILTIN_CELL: u32 = 8;

pub enum FontFace {
    Outline { font: FontArc, scale: PxScale },
    /// 8x8 bitmap glyphs, each pixel drawn as a `scale`-sized square.
    Builtin { scale: u32 },
}

impl FontFace {
    /// `size` is the em size in pixels; it is converted to the ab_glyph
    /// pixel scale, which covers ascent to descent.
    pub fn outline(font: FontArc, size: f32) -> Self {
        let px = font
            .units_per_em()
            .map(|upem| size * font.height_unscaled() / upem)
            .unwrap_or(size);
        FontFace::Outline {
            font,
            scale: PxScale::from(px),
        }
    }

    pub fn builtin(size: f32) -> Self {
        let scale = (size / BUILTIN_CELL as f32).round().max(1.0) as u32;
        FontFace::Builtin { scale }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin { .. })
    }
}

fn builtin_glyph(ch: char) -> Option<[u8; 8]> {
    ch.is_ascii().then(|| BASIC_LEGACY[ch as usize])
}

fn measure_builtin(text: &str, scale: u32) -> LineSize {
    let mut columns = 0u32;
    let mut top = u32::MAX;
    let mut bottom = 0u32;
    for ch in text.chars() {
        columns += 1;
        let Some(rows) = builtin_glyph(ch) else {
            continue;
        };
        for (r, bits) in rows.iter().enumerate() {
            if *bits != 0 {
                top = top.min(r as u32);
                bottom = bottom.max(r as u32 + 1);
            }
        }
    }
    let ink_rows = if top < bottom { bottom - top } else { 0 };
    LineSize {
        width: columns * BUILTIN_CELL * scale,
        height: ink_rows * scale,
    }
}

fn draw_builtin(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str, scale: u32) {
    let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);
    let s = scale as i64;
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = builtin_glyph(ch) else {
            continue;
        };
        let cell_x = x as i64 + i as i64 * BUILTIN_CELL as i64 * s;
        for (r, bits) in rows.iter().enumerate() {
            for bit in 0..BUILTIN_CELL as i64 {
                if bits & (1u8 << bit) == 0 {
                    continue;
                }
                let px0 = cell_x + bit * s;
                let py0 = y as i64 + r as i64 * s;
                for py in py0.max(0)..(py0 + s).min(canvas_h) {
                    for px in px0.max(0)..(px0 + s).min(canvas_w) {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}

/// Width comes from imageproc's own text layout so it matches what
/// `draw_text_mut` paints; height is the ink box of all glyphs.
fn measure_outline(font: &FontArc, scale: PxScale, text: &str) -> LineSize {
    let (width, _) = imageproc::drawing::text_size(scale, font, text);
    let scaled = font.as_scaled(scale);
    let mut top = f32::MAX;
    let mut bottom = f32::MIN;
    for ch in text.chars() {
        let glyph = scaled
            .glyph_id(ch)
            .with_scale_and_position(scale, point(0.0, scaled.ascent()));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            top = top.min(bounds.min.y);
            bottom = bottom.max(bounds.max.y);
        }
    }
    let height = if bottom > top {
        (bottom - top).ceil() as u32
    } else {
        0
    };
    LineSize { width, height }
}

impl LineMeasurer for FontFace {
    fn measure(&self, text: &str) -> LineSize {
        match self {
            FontFace::Outline { font, scale } => measure_outline(font, *scale, text),
            FontFace::Builtin { scale } => measure_builtin(text, *scale),
        }
    }
}

impl GlyphPainter for FontFace {
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match self {
            FontFace::Outline { font, scale } => {
                imageproc::drawing::draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            FontFace::Builtin { scale } => draw_builtin(canvas, x, y, color, text, *scale),
        }
    }
}

/// Main text face and the smaller page-marker face, cut from the same font.
pub struct FontSet {
    pub main: FontFace,
    pub marker: FontFace,
}

impl FontSet {
    /// Resolve `source` to a font; an unusable source is never an error, it
    /// degrades to the built-in bitmap font for both faces.
    pub fn load(source: &FontSource, layout: &Layout) -> Self {
        let t0 = std::time::Instant::now();
        let set = match resolve_font(source) {
            Some(font) => FontSet {
                main: FontFace::outline(font.clone(), layout.main_font_size),
                marker: FontFace::outline(font, layout.marker_font_size),
            },
            None => FontSet::builtin(layout),
        };
        log::debug!(
            "FontSet::load: builtin={} -> {:.1}ms",
            set.main.is_builtin(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );
        set
    }

    pub fn builtin(layout: &Layout) -> Self {
        FontSet {
            main: FontFace::builtin(layout.main_font_size),
            marker: FontFace::builtin(layout.marker_font_size),
        }
    }
}

fn resolve_font(source: &FontSource) -> Option<FontArc> {
    let path = source.path.as_ref()?;
    match read_font_file(path) {
        Ok(font) => {
            log::debug!("Using font file {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::warn!(
                "Font not loaded from {}: {e} -- falling back to the built-in bitmap font",
                path.display()
            );
            None
        }
    }
}

fn read_font_file(path: &Path) -> Result<FontArc, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    FontArc::try_from_vec(data).map_err(|e| e.to_string())
}
