use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Error;
use crate::fonts::{GlyphPainter, LineSize};
use crate::model::{Layout, is_blank};

/// Footer text identifying a page among the whole set, e.g. `"2/5"`.
pub fn page_marker(page_number: usize, total_pages: usize) -> String {
    format!("{page_number}/{total_pages}")
}

/// Width of a page: the widest line plus padding on both sides.
pub fn page_width(sizes: &[LineSize], padding: u32) -> u32 {
    let widest = sizes.iter().map(|s| s.width).max().unwrap_or(0);
    widest.saturating_add(padding.saturating_mul(2)).max(1)
}

/// Render one page. The image is always `layout.max_image_height` tall no
/// matter how much of it the lines fill; its width follows the page's own
/// widest line. Text is top-aligned, the marker sits in the bottom-right
/// corner inside the padding.
pub fn render_page(
    lines: &[String],
    page_number: usize,
    total_pages: usize,
    main: &impl GlyphPainter,
    marker: &impl GlyphPainter,
    layout: &Layout,
) -> RgbImage {
    let sizes: Vec<LineSize> = lines.iter().map(|l| main.measure(l)).collect();
    let width = page_width(&sizes, layout.padding);
    let height = layout.max_image_height;

    let mut img = RgbImage::from_pixel(width, height, Rgb(layout.background));
    let color = Rgb(layout.text_color);
    let padding = layout.padding as i64;

    let mut y = padding;
    for (line, size) in lines.iter().zip(&sizes) {
        if !is_blank(line) {
            main.draw(&mut img, padding as i32, y as i32, color, line);
        }
        y += (size.height + layout.spacing.for_line(line)) as i64;
    }

    let marker_text = page_marker(page_number, total_pages);
    let marker_size = marker.measure(&marker_text);
    let marker_x = width as i64 - padding - marker_size.width as i64;
    let marker_y = height as i64 - padding - marker_size.height as i64;
    marker.draw(&mut img, marker_x as i32, marker_y as i32, color, &marker_text);

    log::debug!(
        "render_page: page {page_number}/{total_pages}, {} lines, {width}x{height}, text ends at y={y}",
        lines.len(),
    );
    img
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
