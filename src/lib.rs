//! Recursive, stochastic ray tracing of spheres and axis-aligned cubes,
//! following the [Ray Tracing in One Weekend](https://raytracing.github.io/)
//! book series.
//!
//! The core is three calls: [`Camera::get_ray`], [`Object::hit`] and
//! [`ray_color`]. Every stochastic step draws from a caller-owned
//! [`fastrand::Rng`].

pub mod camera;
pub mod error;
pub mod material;
pub mod object;
pub mod picture;
pub mod ppm;
pub mod random;
pub mod ray;
pub mod render;
pub mod scene;

pub use camera::{Camera, CameraSettings};
pub use error::{Error, Result};
pub use material::Material;
pub use object::{Cube, Object, Sphere};
pub use picture::{Color, Picture, Rgb8};
pub use ray::{Face, Hit, Ray};
pub use render::{ray_color, render_frame, RenderSettings};
pub use scene::{Scene, SceneKind};
