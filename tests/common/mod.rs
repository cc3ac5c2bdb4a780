use std::fs;
use std::path::PathBuf;

use text_pages::{LineMeasurer, LineSize};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create test output dir");
    dir
}

/// Deterministic stand-in for a real font: every visible character is
/// `char_width` wide and every non-blank line is `line_height` tall.
/// Lines starting with `TALL` measure `tall_height` instead.
pub struct FixedMeasurer {
    pub char_width: u32,
    pub line_height: u32,
    pub tall_height: u32,
}

impl FixedMeasurer {
    pub fn new(line_height: u32) -> Self {
        Self {
            char_width: 10,
            line_height,
            tall_height: line_height,
        }
    }
}

impl LineMeasurer for FixedMeasurer {
    fn measure(&self, text: &str) -> LineSize {
        let width = text.chars().count() as u32 * self.char_width;
        let height = if text.trim().is_empty() {
            0
        } else if text.starts_with("TALL") {
            self.tall_height
        } else {
            self.line_height
        };
        LineSize { width, height }
    }
}

/// Pseudo-random article with a fixed seed, so failures reproduce.
pub fn sample_article(seed: u64, paragraphs: usize) -> String {
    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "pagination",
        "is", "a", "greedy", "process", "it’s", "“quoted”", "em—dash", "and…",
        "supercalifragilisticexpialidocious-antidisestablishmentarianism-extra-long-token",
        "café", "naïve", "x",
    ];
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move |bound: usize| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % bound
    };
    let mut paras = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        let count = next(120);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(WORDS[next(WORDS.len())]);
        }
        let sep = if next(4) == 0 { "\n" } else { " " };
        paras.push(words.join(sep));
    }
    paras.join("\n\n")
}
