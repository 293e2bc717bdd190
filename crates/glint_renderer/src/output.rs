//! Image file output.
//!
//! Both encoders consume the quantized byte buffer produced by
//! [`ImageBuffer::to_rgb8`]: 3 bytes per pixel, row-major, top row first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::ImageBuffer;

/// Channels per pixel in the encoded outputs.
pub const CHANNELS: usize = 3;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type OutputResult<T> = Result<T, OutputError>;

fn check_len(width: u32, height: u32, bytes: &[u8]) -> OutputResult<()> {
    let expected = width as usize * height as usize * CHANNELS;
    if bytes.len() != expected {
        return Err(OutputError::BufferSize {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Write plain-text PPM (`P3`), one `r g b` triple per line.
pub fn write_ppm<W: Write>(mut writer: W, width: u32, height: u32, bytes: &[u8]) -> OutputResult<()> {
    check_len(width, height, bytes)?;

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for pixel in bytes.chunks_exact(CHANNELS) {
        writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the image as a PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_ppm(writer, image.width, image.height, &image.to_rgb8())?;
    info!("Saved {}", path.display());
    Ok(())
}

/// Encode an RGB byte buffer as PNG.
pub fn write_png<P: AsRef<Path>>(path: P, width: u32, height: u32, bytes: Vec<u8>) -> OutputResult<()> {
    check_len(width, height, &bytes)?;

    let actual = bytes.len();
    let buffer = image::RgbImage::from_raw(width, height, bytes).ok_or(OutputError::BufferSize {
        expected: width as usize * height as usize * CHANNELS,
        actual,
    })?;
    buffer.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save the image as a PNG file.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    write_png(path, image.width, image.height, image.to_rgb8())?;
    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn checker() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::ONE);
        image.set(1, 1, Color::new(0.25, 0.0, 1.0));
        image
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("glint_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_ppm_format() {
        let image = checker();
        let mut out = Vec::new();
        write_ppm(&mut out, image.width, image.height, &image.to_rgb8()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n128 0 255\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_ppm_rejects_short_buffer() {
        let err = write_ppm(Vec::new(), 2, 2, &[0u8; 5]).unwrap_err();
        assert!(matches!(
            err,
            OutputError::BufferSize {
                expected: 12,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_save_ppm_to_disk() {
        let path = temp_path("save.ppm");
        save_ppm(&checker(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n2 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 4);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_png_roundtrip() {
        let path = temp_path("save.png");
        let image = checker();
        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.into_raw(), image.to_rgb8());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_ppm_missing_directory() {
        let path = temp_path("missing_dir").join("out.ppm");
        let err = save_ppm(&checker(), &path).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
