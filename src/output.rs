//! # Output Module
//!
//! Image sinks for the rendered frame:
//! - Plain-text PPM (P3) export, the primary format
//! - PNG file export through the `image` crate
//!
//! The renderer buffers the whole frame before any sink runs, so the
//! sinks only ever see a complete raster and writes are naturally
//! serialized. Sink failures are fatal: a single-pass image generator
//! has no meaningful partial-output recovery, so errors propagate to the
//! caller instead of being swallowed.

use image::{ImageBuffer, Rgb};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save an 8-bit RGB image as a plain-text PPM (P3) file.
///
/// The format is a three-line header followed by one pixel per line:
///
/// ```text
/// P3
/// <width> <height>
/// 255
/// <r> <g> <b>
/// ...
/// ```
///
/// Pixels are written in row-major order, top-to-bottom and
/// left-to-right, matching the buffer's own iteration order. The writer
/// is buffered; the final flush happens explicitly so a full disk or a
/// revoked handle surfaces as an error rather than a truncated file.
pub fn save_image_as_ppm(
    image: &ImageBuffer<Rgb<u8>, Vec<u8>>,
    output_path: &str,
) -> std::io::Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for pixel in image.pixels() {
        writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }

    writer.flush()?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Save an 8-bit RGB image as PNG.
///
/// The frame is already quantized to display range, so this is a direct
/// encode with no tone mapping.
pub fn save_image_as_png(
    image: &ImageBuffer<Rgb<u8>, Vec<u8>>,
    output_path: &str,
) -> image::ImageResult<()> {
    image.save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// File extension of an output path, lowercased, if it has one.
pub fn output_extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
