mod error;
mod fonts;
mod model;
mod output;
mod paginate;
mod render;
mod text;

pub use error::Error;
pub use fonts::{FontFace, FontSet, GlyphPainter, LineMeasurer, LineSize};
pub use model::{Config, FontSource, Layout, Page, Spacing, is_blank};
pub use output::{clear_output_dir, page_file_name, page_path, prepare_output_dir, write_page};
pub use paginate::paginate;
pub use render::{encode_png, page_marker, page_width, render_page};
pub use text::{normalize, normalize_newlines, wrap_article, wrap_paragraph};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of a conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub output_dir: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} page(s) in '{}'.",
            self.pages,
            self.output_dir.display()
        )
    }
}

/// Wrap and paginate an article without touching the filesystem.
pub fn paginate_article(article: &str, measurer: &impl LineMeasurer, layout: &Layout) -> Vec<Page> {
    let lines = wrap_article(article, layout.column_width);
    paginate(
        lines,
        measurer,
        layout.spacing,
        layout.max_image_height,
        layout.padding,
    )
}

pub fn convert_article(config: &Config) -> Result<Summary, Error> {
    let t0 = Instant::now();

    config.layout.validate()?;
    let article = read_article(&config.input)?;
    let t_read = t0.elapsed();

    let fonts = FontSet::load(&config.font, &config.layout);
    let pages = paginate_article(&article, &fonts.main, &config.layout);
    let t_paginate = t0.elapsed();

    prepare_output_dir(&config.output_dir)?;

    let total = pages.len();
    let mut bytes_written = 0usize;
    for (i, page) in pages.iter().enumerate() {
        let img = render_page(
            &page.lines,
            i + 1,
            total,
            &fonts.main,
            &fonts.marker,
            &config.layout,
        );
        let bytes = encode_png(&img)?;
        write_page(&config.output_dir, i + 1, &bytes)?;
        bytes_written += bytes.len();
    }
    let t_total = t0.elapsed();

    log::info!(
        "Timing: read={:.1}ms, paginate={:.1}ms, render={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_read.as_secs_f64() * 1000.0,
        (t_paginate - t_read).as_secs_f64() * 1000.0,
        (t_total - t_paginate).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        total,
        bytes_written,
    );

    Ok(Summary {
        pages: total,
        output_dir: config.output_dir.clone(),
    })
}

/// Read the article with universal newlines, so `\r\n` and lone `\r` line
/// endings still separate paragraphs.
fn read_article(path: &Path) -> Result<String, Error> {
    let raw = std::fs::read_to_string(path).map_err(|e| error::with_path(e, path))?;
    Ok(normalize_newlines(&raw))
}
