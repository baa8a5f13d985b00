use fastrand::Rng;
use nalgebra::{Point3, Vector2, Vector3};

use crate::error::{Error, Result};
use crate::random::random_vec_in_unit_disk;
use crate::ray::Ray;

/// Placement and lens parameters a [`Camera`] is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub look_from: Point3<f32>,
    pub look_at: Point3<f32>,
    pub vup: Vector3<f32>,
    /// Vertical field of view in degrees.
    pub vfov: f32,
    pub aspect_ratio: f32,
    /// Lens diameter; zero gives a pinhole camera.
    pub aperture: f32,
    pub focus_dist: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3<f32>,
    pub lower_left_corner: Point3<f32>,
    pub horizontal: Vector3<f32>,
    pub vertical: Vector3<f32>,
    pub u: Vector3<f32>,
    pub v: Vector3<f32>,
    pub w: Vector3<f32>,
    pub lens_radius: f32,
}

impl Camera {
    pub fn new(settings: &CameraSettings) -> Result<Self> {
        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = settings.aspect_ratio * viewport_height;

        let w = (settings.look_from - settings.look_at)
            .try_normalize(f32::EPSILON)
            .ok_or(Error::DegenerateCamera("look_from and look_at coincide"))?;
        let u = settings.vup.cross(&w)
            .try_normalize(f32::EPSILON)
            .ok_or(Error::DegenerateCamera("vup is parallel to the view direction"))?;
        let v = w.cross(&u);

        let origin = settings.look_from;
        let horizontal = settings.focus_dist * viewport_width * u;
        let vertical = settings.focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - settings.focus_dist * w;

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        })
    }

    /// Ray through sensor point `(s, t)` with `disk` a point in the unit disk
    /// picking the spot on the lens. Coordinates are not clamped.
    pub fn ray_through(&self, s: f32, t: f32, disk: Vector2<f32>) -> Ray {
        let rd = self.lens_radius * disk;
        let offset = self.u * rd.x + self.v * rd.y;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }

    pub fn get_ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray {
        let disk = if self.lens_radius > 0.0 {
            random_vec_in_unit_disk(rng)
        } else {
            Vector2::zeros()
        };
        self.ray_through(s, t, disk)
    }
}
