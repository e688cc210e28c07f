use clap::Parser;
use std::path::PathBuf;
use webshrink::{OptimizeParams, Quality, optimize, output};

#[derive(Parser)]
#[command(name = "webshrink")]
#[command(about = "Resize and re-encode an image for web delivery")]
#[command(long_about = "\
Resize and re-encode an image for web delivery

The destination file's extension selects the output format:
jpg/jpeg, png, tif/tiff, webp, avif.

Images larger than the bounding box are downsampled to fit it, preserving
aspect ratio; smaller images are never enlarged. Sources with transparency
are flattened onto white for JPEG output.

Examples:

  # JPEG photo to a web-sized WebP
  webshrink photo.jpg photo.webp

  # AVIF at quality 75 in a 1600px box
  webshrink photo.jpg photo.avif --quality 75 --max-width 1600 --max-height 1600

  # Re-encode only, keep original dimensions
  webshrink scan.png scan.jpg --no-resize")]
#[command(version)]
struct Cli {
    /// Source image file
    input: PathBuf,

    /// Destination file; its extension selects the output format
    output: PathBuf,

    /// Bounding box width in pixels
    #[arg(long, default_value_t = 1200)]
    max_width: u32,

    /// Bounding box height in pixels
    #[arg(long, default_value_t = 1200)]
    max_height: u32,

    /// Keep original dimensions — skip the bounding box entirely
    #[arg(long)]
    no_resize: bool,

    /// Encoding quality for lossy formats
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: u32,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let params = OptimizeParams {
        source: cli.input,
        output: cli.output,
        max_size: (!cli.no_resize).then_some((cli.max_width, cli.max_height)),
        quality: Quality::new(cli.quality),
    };

    match optimize(&params) {
        Ok(report) => {
            if cli.json {
                // A plain struct of numbers and strings always serializes
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                output::print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Error processing image: {e}");
            std::process::exit(1);
        }
    }
}
