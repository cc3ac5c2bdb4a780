use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use text_pages::{Config, FontSource, Layout, Spacing};

/// Turn a plain-text article into fixed-height PNG pages.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Article to paginate; paragraphs are separated by a blank line
    #[arg(default_value = "article.txt")]
    input: PathBuf,

    /// Directory for the page images (existing files in it are deleted)
    #[arg(short, long, default_value = "images")]
    output: PathBuf,

    /// TrueType/OpenType font file
    #[arg(long, default_value = "Roboto-Regular.ttf")]
    font: PathBuf,

    /// Wrap width in characters
    #[arg(long, default_value_t = 70)]
    columns: usize,

    /// Height of every page image in pixels
    #[arg(long, default_value_t = 1200)]
    height: u32,

    #[arg(long, default_value_t = 20)]
    padding: u32,

    /// Space after each text line in pixels
    #[arg(long, default_value_t = 4)]
    line_spacing: u32,

    /// Space after each paragraph separator in pixels
    #[arg(long, default_value_t = 25)]
    paragraph_spacing: u32,

    #[arg(long, default_value_t = 36.0)]
    font_size: f32,

    /// Font size of the page marker
    #[arg(long, default_value_t = 18.0)]
    marker_size: f32,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            input: self.input,
            output_dir: self.output,
            font: FontSource {
                path: Some(self.font),
            },
            layout: Layout {
                column_width: self.columns,
                max_image_height: self.height,
                padding: self.padding,
                spacing: Spacing {
                    line: self.line_spacing,
                    paragraph: self.paragraph_spacing,
                },
                main_font_size: self.font_size,
                marker_font_size: self.marker_size,
                ..Layout::default()
            },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    match text_pages::convert_article(&config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
