use clap::Parser;
use image::Rgb;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use needlematch::io::load_rgb_image;
use needlematch::{MatchConfig, MatchResult, Matcher, OwnedImage};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Searches a needle image in a haystack image and reports a match value from 0 to 1"
)]
struct Cli {
    /// Path to the haystack (larger) image.
    haystack: PathBuf,
    /// Path to the needle (smaller) image.
    needle: PathBuf,
    /// Write the haystack with a rectangle drawn at the match to this path.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Print the result as JSON instead of plain text.
    #[arg(long)]
    json: bool,
    /// Number of candidates kept by the pruning scan.
    #[arg(long, default_value_t = 50)]
    candidates: usize,
    /// Scan haystack rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    confidence: f32,
    x: Option<usize>,
    y: Option<usize>,
}

impl From<MatchResult> for Output {
    fn from(value: MatchResult) -> Self {
        Self {
            confidence: value.confidence,
            x: value.location.map(|pos| pos.x),
            y: value.location.map(|pos| pos.y),
        }
    }
}

fn annotate(
    haystack: &OwnedImage,
    needle_width: usize,
    needle_height: usize,
    x: usize,
    y: usize,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = image::RgbImage::from_raw(
        haystack.width() as u32,
        haystack.height() as u32,
        haystack.data().to_vec(),
    )
    .ok_or("haystack buffer does not match its dimensions")?;

    let rect = Rect::at(x as i32, y as i32).of_size(needle_width as u32, needle_height as u32);
    draw_hollow_rect_mut(&mut canvas, rect, Rgb([0, 0, 0]));
    canvas.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("needlematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let haystack = load_rgb_image(&cli.haystack)?;
    let needle = load_rgb_image(&cli.needle)?;

    let matcher = Matcher::with_config(MatchConfig {
        candidate_capacity: cli.candidates,
        parallel: cli.parallel,
        ..MatchConfig::default()
    });
    let result = matcher.find(haystack.view(), needle.view())?;
    tracing::info!(confidence = f64::from(result.confidence), "match complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Output::from(result))?);
    } else {
        println!("Result: {}", result.confidence);
        if let Some(pos) = result.location {
            println!("Found at [{},{}]", pos.x, pos.y);
        }
    }

    if let (Some(path), Some(pos)) = (&cli.output, result.location) {
        annotate(
            &haystack,
            needle.width(),
            needle.height(),
            pos.x,
            pos.y,
            path,
        )?;
    }

    Ok(())
}
