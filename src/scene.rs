//! Ready-made worlds together with the camera framing each one.

use std::sync::Arc;

use fastrand::Rng;
use log::trace;
use nalgebra::{point, vector, Point3};

use crate::camera::CameraSettings;
use crate::material::Material;
use crate::object::Object;
use crate::picture::Color;
use crate::random::random_range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// Random sphere field with feature spheres and two cubes.
    Showcase,
    /// Random sphere field seen from afar with depth of field.
    Random,
    /// Small fixed arrangement of spheres and cubes.
    Cubes,
}

pub struct Scene {
    pub world: Object,
    pub camera: CameraSettings,
}

impl Scene {
    pub fn build(kind: SceneKind, aspect_ratio: f32, rng: &mut Rng) -> Scene {
        let (world, camera) = match kind {
            SceneKind::Showcase => (showcase_scene(rng), showcase_camera(aspect_ratio)),
            SceneKind::Random => (Object::List(random_scene(rng)), random_camera(aspect_ratio)),
            SceneKind::Cubes => (cubes_scene(), cubes_camera(aspect_ratio)),
        };
        Scene { world, camera }
    }
}

fn random_color(rng: &mut Rng) -> Color {
    Color::new(rng.f32(), rng.f32(), rng.f32())
}

fn random_color_range(rng: &mut Rng, min: f32, max: f32) -> Color {
    Color::new(random_range(rng, min, max), random_range(rng, min, max), random_range(rng, min, max))
}

fn checkered_blue() -> Arc<Material> {
    Arc::new(Material::checker(
        Arc::new(Material::lambert(Color::new(0.1, 0.2, 0.5))),
        Arc::new(Material::lambert(Color::new(0.9, 0.9, 0.9))),
    ))
}

/// Checkered ground, a 22x22 grid of small random spheres and three large
/// feature spheres.
pub fn random_scene(rng: &mut Rng) -> Vec<Object> {
    let mut world = vec![Object::sphere(point![0.0, -1000.0, 0.0], 1000.0, checkered_blue())];

    let glass = Arc::new(Material::dielectric(1.5));
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.f32();
            let center = point![a as f32 + 0.9 * rng.f32(), 0.2, b as f32 + 0.9 * rng.f32()];

            if (center - point![4.0, 0.2, 0.0]).magnitude() <= 0.9 {
                continue;
            }
            let material = if choose_mat < 0.8 {
                let albedo = random_color(rng) * random_color(rng);
                Arc::new(Material::lambert(albedo))
            } else if choose_mat < 0.95 {
                let albedo = random_color_range(rng, 0.5, 1.0);
                let fuzz = random_range(rng, 0.0, 0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                glass.clone()
            };
            trace!(target: "app", "small sphere at {:?}: {:?}", center, material);
            world.push(Object::sphere(center, 0.2, material));
        }
    }

    world.push(Object::sphere(point![0.0, 1.0, 0.0], 1.0, glass));
    world.push(Object::sphere(point![-4.0, 1.0, 0.0], 1.0, Arc::new(Material::lambert(Color::new(0.4, 0.2, 0.1)))));
    world.push(Object::sphere(point![4.0, 1.0, 0.0], 1.0, Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0))));
    world
}

/// The random field plus colored feature spheres and a metal and a glass cube.
pub fn showcase_scene(rng: &mut Rng) -> Object {
    let mut world = random_scene(rng);

    let ground = Arc::new(Material::lambert(Color::new(0.8, 0.8, 0.0)));
    let glass = Arc::new(Material::dielectric(1.5));
    let gold = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));
    let mirror = Arc::new(Material::metal(Color::new(0.8, 0.8, 0.8), 0.0));
    let metal_blue = Arc::new(Material::metal(Color::new(0.2, 0.4, 0.8), 0.1));
    let metal_green = Arc::new(Material::metal(Color::new(0.1, 0.7, 0.3), 0.2));
    let metal_magenta = Arc::new(Material::metal(Color::new(0.8, 0.1, 0.8), 0.2));
    let lambert = |r, g, b| Arc::new(Material::lambert(Color::new(r, g, b)));

    world.extend([
        Object::sphere(point![0.0, -100.5, -1.0], 100.0, checkered_blue()),
        Object::sphere(point![0.0, 0.0, -1.0], 0.5, ground),
        Object::sphere(point![-1.0, 0.0, -1.0], 0.5, glass.clone()),
        Object::sphere(point![1.0, 0.0, -1.0], 0.5, gold),
        Object::sphere(point![0.0, 4.0, -1.0], 2.0, mirror.clone()),
        Object::sphere(point![-2.0, 0.5, 0.5], 0.1, lambert(0.8, 0.1, 0.1)),
        Object::sphere(point![5.5, 3.5, -2.0], 0.1, lambert(0.1, 0.8, 0.1)),
        Object::sphere(point![2.0, 2.2, -1.0], 0.1, lambert(0.1, 0.1, 0.8)),
        Object::sphere(point![2.0, 0.3, -1.5], 0.3, lambert(0.8, 0.1, 0.8)),
        Object::sphere(point![0.0, 0.4, -1.0], 0.4, lambert(0.1, 0.8, 0.8)),
        Object::sphere(point![-2.0, 1.5, -10.5], 3.0, metal_blue.clone()),
        Object::sphere(point![2.0, 1.2, -13.0], 1.5, metal_green),
        Object::sphere(point![-3.0, 1.5, -9.5], 2.5, metal_magenta.clone()),
        Object::sphere(point![-4.0, 1.5, -8.5], 2.0, metal_blue),
        Object::sphere(point![-5.0, 1.5, -7.5], 1.5, metal_magenta),
        Object::cube(point![-3.0, 3.0, -1.0], 0.5, mirror),
        Object::cube(point![3.0, 3.0, -1.0], 0.5, glass),
    ]);
    Object::List(world)
}

/// A handful of cubes and spheres, one per material, on a checkered floor.
pub fn cubes_scene() -> Object {
    let glass = Arc::new(Material::dielectric(1.5));
    Object::List(vec![
        Object::sphere(point![0.0, -100.5, -1.0], 100.0, checkered_blue()),
        Object::cube(point![-1.1, 0.0, -1.5], 0.5, Arc::new(Material::lambert(Color::new(0.8, 0.3, 0.3)))),
        Object::cube(point![0.0, 0.0, -1.5], 0.5, glass.clone()),
        Object::cube(point![1.1, 0.0, -1.5], 0.5, Arc::new(Material::metal(Color::new(0.8, 0.8, 0.8), 0.05))),
        Object::sphere(point![0.0, 0.0, -1.5], 0.25, Arc::new(Material::lambert(Color::new(0.1, 0.2, 0.5)))),
        Object::sphere(point![-0.6, 0.9, -2.2], 0.4, glass),
        Object::sphere(point![0.6, 0.9, -2.2], 0.4, Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.3))),
    ])
}

fn showcase_camera(aspect_ratio: f32) -> CameraSettings {
    CameraSettings {
        look_from: point![0.0, 1.0, 2.5],
        look_at: point![0.0, 1.0, 0.0],
        vup: vector![0.0, 1.0, 0.0],
        vfov: 90.0,
        aspect_ratio,
        aperture: 0.0,
        focus_dist: 1.0,
    }
}

fn random_camera(aspect_ratio: f32) -> CameraSettings {
    CameraSettings {
        look_from: point![13.0, 2.0, 3.0],
        look_at: Point3::origin(),
        vup: vector![0.0, 1.0, 0.0],
        vfov: 20.0,
        aspect_ratio,
        aperture: 0.1,
        focus_dist: 10.0,
    }
}

fn cubes_camera(aspect_ratio: f32) -> CameraSettings {
    CameraSettings {
        look_from: point![0.0, 0.8, 1.5],
        look_at: point![0.0, 0.0, -1.5],
        vup: vector![0.0, 1.0, 0.0],
        vfov: 50.0,
        aspect_ratio,
        aperture: 0.0,
        focus_dist: 3.0,
    }
}
