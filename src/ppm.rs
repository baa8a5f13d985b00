//! Netpbm (PPM) encoding of accumulated sample buffers.

use std::io::Write;

use crate::error::Result;
use crate::picture::{Color, Picture, Rgb8};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// ASCII `P3`, one `r g b` triple per line.
    Plain,
    /// Binary `P6`.
    Raw,
}

impl Format {
    fn magic(self) -> &'static str {
        match self {
            Format::Plain => "P3",
            Format::Raw => "P6",
        }
    }
}

pub fn encode(sums: &Picture<Vec<Color>>, samples: u32) -> Picture<Vec<Rgb8>> {
    sums.map(|sum| Rgb8::from_samples(*sum, samples))
}

pub fn write<W: Write>(mut writer: W, picture: &Picture<Vec<Rgb8>>, format: Format) -> Result<()> {
    write!(writer, "{}\n{} {}\n255\n", format.magic(), picture.width(), picture.height())?;
    match format {
        Format::Plain => {
            for pixel in picture.buffer() {
                writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
            }
        }
        Format::Raw => writer.write_all(bytemuck::cast_slice(picture.buffer()))?,
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Picture<Vec<Rgb8>> {
        Picture::new(vec![Rgb8::new(255, 0, 10), Rgb8::new(1, 2, 3)], (2, 1))
    }

    #[test]
    fn plain_output() {
        let mut out = Vec::new();
        write(&mut out, &tiny(), Format::Plain).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "P3\n2 1\n255\n255 0 10\n1 2 3\n");
    }

    #[test]
    fn raw_output() {
        let mut out = Vec::new();
        write(&mut out, &tiny(), Format::Raw).expect("write");
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 10, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn encode_uses_sample_count() {
        let sums = Picture::new(vec![Color::new(2.0, 0.5, 0.0)], (1, 1));
        assert_eq!(encode(&sums, 2).buffer(), &[Rgb8::new(255, 128, 0)]);
    }
}
