use nalgebra::{Point3, Vector3};

use crate::material::Material;

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Which side of a surface the ray arrived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// The ray came from outside the surface.
    Front,
    /// The ray origin was inside the surface.
    Back,
}

pub struct Hit<'a> {
    pub point: Point3<f32>,
    /// Unit normal, always pointing against the incoming ray.
    pub normal: Vector3<f32>,
    pub face: Face,
    pub t: f32,
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    /// Builds a hit from the geometric outward normal, flipping it so that it
    /// faces the ray and recording which face was struck.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vector3<f32>, material: &'a Material) -> Self {
        let (face, normal) = if ray.direction.dot(&outward_normal) <= 0.0 {
            (Face::Front, outward_normal)
        } else {
            (Face::Back, -outward_normal)
        };
        Hit {
            point: ray.at(t),
            normal,
            face,
            t,
            material,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.face == Face::Back
    }
}
