use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use bytemuck_derive::{Pod, Zeroable};

/// Linear RGB radiance. Components are not clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Sum for Color {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        let mut acc = Color::BLACK;
        for color in iter {
            acc += color;
        }
        acc
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        (1.0 - t) * self + t * other
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Color::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Self::Output {
        Color::new(
            self.r * rhs,
            self.g * rhs,
            self.b * rhs,
        )
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

/// 8-bit display pixel, laid out for direct byte output.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn encode(sum: f32, scale: f32) -> u8 {
    // sqrt is gamma 2; NaN and negatives land on 0
    let gamma = (sum * scale).max(0.0).sqrt();
    (256.0 * gamma.clamp(0.0, 0.999)) as u8
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }

    /// Averages an accumulated sample sum, applies gamma 2 and quantizes.
    pub fn from_samples(sum: Color, samples: u32) -> Self {
        let scale = 1.0 / samples.max(1) as f32;
        Rgb8::new(encode(sum.r, scale), encode(sum.g, scale), encode(sum.b, scale))
    }
}

pub struct Picture<P> {
    pixels: P,
    size: (u32, u32),
}

impl<P> Picture<P> {
    pub fn new(pixels: P, size: (u32, u32)) -> Self {
        Picture { pixels, size }
    }

    pub fn width(&self) -> u32 {
        self.size.0
    }

    pub fn height(&self) -> u32 {
        self.size.1
    }

    fn to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }
}

impl<T: Clone + Default> Picture<Vec<T>> {
    pub fn filled(size: (u32, u32)) -> Self {
        let len = size.0 as usize * size.1 as usize;
        Picture::new(vec![T::default(); len], size)
    }
}

impl<T> Picture<Vec<T>> {
    pub fn pixel(&self, x: u32, y: u32) -> &T {
        &self.pixels[self.to_index(x, y)]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut T {
        let index = self.to_index(x, y);
        &mut self.pixels[index]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let from = self.to_index(0, y);
        let width = self.width() as usize;
        &mut self.pixels[from..from + width]
    }

    pub fn buffer(&self) -> &[T] {
        &self.pixels
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Picture<Vec<U>> {
        Picture::new(self.pixels.iter().map(f).collect(), self.size)
    }
}
