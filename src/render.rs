use std::time::Instant;

use fastrand::Rng;
use log::{debug, info};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::object::Object;
use crate::picture::{Color, Picture};
use crate::ray::Ray;

/// Offset applied to the start of every bounce to avoid self intersection.
pub const T_MIN: f32 = 0.001;

pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    width: u32,
    height: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    seed: u64,
}

impl RenderSettings {
    pub fn new(width: u32, height: u32, samples_per_pixel: u32, max_depth: u32, seed: u64) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidConfig(format!("image must be at least 2x2 pixels, got {}x{}", width, height)));
        }
        if samples_per_pixel == 0 {
            return Err(Error::InvalidConfig("samples per pixel must be at least 1".into()));
        }
        Ok(RenderSettings { width, height, samples_per_pixel, max_depth, seed })
    }

    /// Height for `width` at the given aspect ratio, truncated like the
    /// integer division of the image size.
    pub fn height_for(width: u32, aspect_ratio: f32) -> Result<u32> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(Error::InvalidConfig(format!("aspect ratio must be positive, got {}", aspect_ratio)));
        }
        Ok((width as f32 / aspect_ratio) as u32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Vertical white-to-blue gradient for rays that escape the scene.
pub fn sky(ray: &Ray) -> Color {
    let t = match ray.direction.try_normalize(0.0) {
        Some(unit_direction) => 0.5 * (unit_direction.y + 1.0),
        None => 0.5,
    };
    Color::WHITE.lerp(SKY_BLUE, t)
}

/// Monte Carlo estimate of the radiance arriving along `ray`.
pub fn ray_color(ray: &Ray, world: &Object, depth: u32, rng: &mut Rng) -> Color {
    if depth == 0 {
        return Color::BLACK;
    }

    match world.hit(ray, T_MIN..) {
        Some(hit) => match hit.material.scatter(ray, &hit, rng) {
            Some((attenuation, scattered)) => attenuation * ray_color(&scattered, world, depth - 1, rng),
            None => Color::BLACK,
        },
        None => sky(ray),
    }
}

/// Sum of `samples_per_pixel` jittered samples through pixel `(x, y)`, with
/// `y` counted from the bottom of the image.
pub fn render_pixel(x: u32, y: u32, camera: &Camera, world: &Object, settings: &RenderSettings, rng: &mut Rng) -> Color {
    let max_x = (settings.width - 1) as f32;
    let max_y = (settings.height - 1) as f32;
    (0..settings.samples_per_pixel)
        .map(|_| {
            let u = (x as f32 + rng.f32()) / max_x;
            let v = (y as f32 + rng.f32()) / max_y;
            let ray = camera.get_ray(u, v, rng);
            ray_color(&ray, world, settings.max_depth, rng)
        })
        .sum()
}

/// Seed of the generator owned by one scanline.
fn scanline_seed(seed: u64, line: u32) -> u64 {
    seed ^ (line as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Renders every pixel into an accumulation buffer of summed samples. Row 0
/// of the result is the top of the image.
pub fn render_frame(camera: &Camera, world: &Object, settings: &RenderSettings) -> Picture<Vec<Color>> {
    let mut picture = Picture::filled((settings.width, settings.height));

    info!(target: "app", "Starting frame render ({}x{}, {} spp, depth {})...",
        settings.width, settings.height, settings.samples_per_pixel, settings.max_depth);
    let start = Instant::now();

    for line in (0..settings.height).rev() {
        debug!(target: "app", "Scanlines remaining: {}", line);
        let mut rng = Rng::with_seed(scanline_seed(settings.seed, line));
        let row = settings.height - 1 - line;
        for (x, pixel) in picture.row_mut(row).iter_mut().enumerate() {
            *pixel = render_pixel(x as u32, line, camera, world, settings, &mut rng);
        }
    }

    let elapsed = start.elapsed();
    info!(target: "app", "Finished rendering. Took {:?}", elapsed);
    picture
}
