//! # pixel-hide Binary Entry Point
//!
//! Thin wrapper exposing each library operation as a subcommand.
//!
//! ## Usage
//!
//! ```bash
//! pixel-hide gray TUX.png TUX_gray.png
//! pixel-hide rotate TUX.png TUX_90.png --angle 90
//! pixel-hide hide TUX.png TUX_hidden.png --message HACK
//! pixel-hide extract TUX.png TUX_hidden.png --length 4
//! pixel-hide demo --config config/demo.toml --report report.json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pixel_hide::common::config::{load_config, PipelineConfig};
use pixel_hide::pipeline::run_demo;
use pixel_hide::{extract, grayscale, hide, rotate, FileCodec, ImageCodec};

/// Command-line arguments for the pixel-hide binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a grayscale copy of an image
    Gray { input: PathBuf, output: PathBuf },

    /// Rotate an image by a quarter turn
    Rotate {
        input: PathBuf,
        output: PathBuf,

        /// 90 (clockwise) or -90 (counter-clockwise)
        #[arg(short, long, allow_hyphen_values = true)]
        angle: i32,
    },

    /// Hide the letters of a message in the red channel
    Hide {
        input: PathBuf,
        output: PathBuf,

        #[arg(short, long)]
        message: String,
    },

    /// Recover a hidden message by comparing against the original image
    Extract {
        original: PathBuf,
        modified: PathBuf,

        /// Number of letters to read
        #[arg(short, long)]
        length: usize,
    },

    /// Run every operation on one image
    Demo {
        /// Path to the pipeline configuration file (TOML format)
        ///
        /// Example: config/demo.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cover image, overrides the config
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Message to hide, overrides the config
        #[arg(short, long)]
        message: Option<String>,

        /// Path to write the JSON run report (optional)
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}

fn load(codec: &FileCodec, path: &Path) -> anyhow::Result<pixel_hide::PixelBuffer> {
    codec
        .load(path)
        .with_context(|| format!("failed to load {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let codec = FileCodec::new();

    match args.command {
        Command::Gray { input, output } => {
            let image = load(&codec, &input)?;
            codec.save(&grayscale(&image), &output)?;
            info!("Grayscale image written to {}", output.display());
        }
        Command::Rotate {
            input,
            output,
            angle,
        } => {
            let image = load(&codec, &input)?;
            let rotated = rotate(&image, angle)?;
            codec.save(&rotated, &output)?;
            info!("Rotated image written to {}", output.display());
        }
        Command::Hide {
            input,
            output,
            message,
        } => {
            let image = load(&codec, &input)?;
            let modified = hide(&image, &message)?;
            codec.save(&modified, &output)?;
            info!(
                "Hid {} letters in {}",
                pixel_hide::encode_message(&message).len(),
                output.display()
            );
        }
        Command::Extract {
            original,
            modified,
            length,
        } => {
            let original = load(&codec, &original)?;
            let modified = load(&codec, &modified)?;
            println!("{}", extract(&original, &modified, length)?);
        }
        Command::Demo {
            config,
            input,
            message,
            report,
        } => {
            let mut config: PipelineConfig = match config {
                Some(path) => load_config(&path)?,
                None => PipelineConfig::default(),
            };
            if let Some(input) = input {
                config.input.path = input;
            }
            if let Some(message) = message {
                config.message.text = message;
            }

            fs::create_dir_all(&config.output.dir).with_context(|| {
                format!("failed to create {}", config.output.dir.display())
            })?;

            let (outcome, run_report) = run_demo(&codec, &config)?;
            println!("Message extracted from modified image: {}", outcome.recovered);
            println!("Message extracted from original image: {}", outcome.null_message);

            if let Some(path) = report {
                run_report.export_to_json(&path)?;
                println!("Report exported to: {}", path.display());
            }
        }
    }

    Ok(())
}
