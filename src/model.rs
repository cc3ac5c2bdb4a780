use std::path::PathBuf;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    pub line: u32,      // after a text line, in pixels
    pub paragraph: u32, // after a blank separator line, in pixels
}

impl Spacing {
    pub fn for_line(&self, line: &str) -> u32 {
        if is_blank(line) {
            self.paragraph
        } else {
            self.line
        }
    }
}

/// Blank lines are paragraph separators: empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub column_width: usize,
    pub max_image_height: u32,
    pub padding: u32,
    pub spacing: Spacing,
    pub main_font_size: f32,   // pixels per em
    pub marker_font_size: f32, // pixels per em
    pub background: [u8; 3],
    pub text_color: [u8; 3],
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            column_width: 70,
            max_image_height: 1200,
            padding: 20,
            spacing: Spacing {
                line: 4,
                paragraph: 25,
            },
            main_font_size: 36.0,
            marker_font_size: 18.0,
            background: [250, 250, 250],
            text_color: [0, 0, 0],
        }
    }
}

impl Layout {
    /// Vertical space available for lines on one page.
    pub fn content_budget(&self) -> u32 {
        self.max_image_height.saturating_sub(self.padding.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.column_width == 0 {
            return Err(Error::InvalidLayout("column width must be at least 1".into()));
        }
        if self.max_image_height == 0 {
            return Err(Error::InvalidLayout("page height must be at least 1 pixel".into()));
        }
        if self.padding.checked_mul(2).is_none() {
            return Err(Error::InvalidLayout(format!("padding {} is too large", self.padding)));
        }
        for (what, size) in [
            ("main font size", self.main_font_size),
            ("marker font size", self.marker_font_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(Error::InvalidLayout(format!("{what} must be positive, got {size}")));
            }
        }
        Ok(())
    }
}

/// Where to look for the rendering font. A missing or unreadable file
/// degrades to the built-in bitmap font.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontSource {
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub font: FontSource,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("article.txt"),
            output_dir: PathBuf::from("images"),
            font: FontSource::default(),
            layout: Layout::default(),
        }
    }
}

/// An ordered, non-empty group of wrapped lines that share one page image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
    /// Sum of measured line heights plus their spacing.
    pub height: u32,
}
