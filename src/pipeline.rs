//! # Demonstration Pipeline
//!
//! Runs every operation of the crate against one cover image:
//!
//! 1. Load the cover through the codec
//! 2. Save a grayscale copy
//! 3. Save the cover rotated by +90° and by -90°
//! 4. Hide the configured message and save the result
//! 5. Reload the saved image and extract the message
//! 6. Extract from the cover against itself (a null message of `'A'`s)
//!
//! All file access goes through the [`ImageCodec`]; the output directory must
//! already exist.

use log::{info, warn};
use std::path::Path;
use std::time::Instant;

use crate::codec::{is_lossless, ImageCodec};
use crate::common::config::PipelineConfig;
use crate::common::error::Result;
use crate::common::pixels::PixelBuffer;
use crate::common::report::RunReport;
use crate::processing::{encode_message, extract, grayscale, hide, rotate_quarter, Rotation};

/// Messages observed by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// The retained letters of the configured text, uppercased.
    pub hidden: String,
    /// What was read back from the saved image.
    pub recovered: String,
    /// What the cover decodes to against itself.
    pub null_message: String,
}

/// Run the full demonstration and return the observed messages with timings.
///
/// Stops at the first failing step; files written before it are left in place.
pub fn run_demo(codec: &dyn ImageCodec, config: &PipelineConfig) -> Result<(DemoOutcome, RunReport)> {
    let mut report = RunReport::new(config.input.path.clone());
    let output = &config.output;

    let started = Instant::now();
    let image = codec.load(&config.input.path)?;
    info!(
        "Loaded {} ({}x{})",
        config.input.path.display(),
        image.width(),
        image.height()
    );
    report.record_step("load", None, dims(&image), started.elapsed());

    let started = Instant::now();
    let gray = grayscale(&image);
    save_step(codec, &mut report, "grayscale", &gray, &output.gray_path(), started)?;

    for (rotation, path) in [
        (Rotation::Clockwise, output.rotated_cw_path()),
        (Rotation::CounterClockwise, output.rotated_ccw_path()),
    ] {
        let started = Instant::now();
        let rotated = rotate_quarter(&image, rotation);
        let step = format!("rotate_{}", rotation.degrees());
        save_step(codec, &mut report, &step, &rotated, &path, started)?;
    }

    let hidden_path = output.hidden_path();
    if !is_lossless(&hidden_path) {
        warn!(
            "{} uses a lossy format; the hidden message will not survive",
            hidden_path.display()
        );
    }

    let started = Instant::now();
    let modified = hide(&image, &config.message.text)?;
    save_step(codec, &mut report, "hide", &modified, &hidden_path, started)?;

    let length = encode_message(&config.message.text).len();

    let started = Instant::now();
    let reloaded = codec.load(&hidden_path)?;
    let recovered = extract(&image, &reloaded, length)?;
    report.record_step("extract", None, dims(&reloaded), started.elapsed());
    info!("Message extracted from modified image: {}", recovered);

    let started = Instant::now();
    let null_message = extract(&image, &image, length)?;
    report.record_step("extract_null", None, dims(&image), started.elapsed());
    info!("Message extracted from original image: {}", null_message);

    let hidden: String = encode_message(&config.message.text)
        .into_iter()
        .map(|v| char::from(b'A' + v))
        .collect();
    if recovered != hidden {
        warn!("Recovered message {:?} differs from hidden {:?}", recovered, hidden);
    }

    report.record_messages(&hidden, &recovered, &null_message);

    Ok((
        DemoOutcome {
            hidden,
            recovered,
            null_message,
        },
        report,
    ))
}

fn dims(buffer: &PixelBuffer) -> (usize, usize) {
    (buffer.width(), buffer.height())
}

fn save_step(
    codec: &dyn ImageCodec,
    report: &mut RunReport,
    step: &str,
    buffer: &PixelBuffer,
    path: &Path,
    started: Instant,
) -> Result<()> {
    codec.save(buffer, path)?;
    info!("{}: wrote {}", step, path.display());
    report.record_step(step, Some(path), dims(buffer), started.elapsed());
    Ok(())
}
