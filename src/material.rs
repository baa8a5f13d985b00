use std::ops::Neg;
use std::sync::Arc;

use fastrand::Rng;
use nalgebra::{Point3, Vector3};

use crate::picture::Color;
use crate::random::{random_unit_vec, random_vec_in_unit_sphere};
use crate::ray::{Face, Hit, Ray};

pub const DEFAULT_CHECKER_SCALE: f32 = 10.0;

#[derive(Clone, Debug)]
pub enum Material {
    Lambert { albedo: Color },
    Metal { albedo: Color, fuzz: f32 },
    Dielectric { index_of_refraction: f32 },
    /// Binary 3D checker pattern selecting between two materials.
    Checker { odd: Arc<Material>, even: Arc<Material>, scale: f32 },
}

fn reflect(v: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    v - 2.0 * v.dot(n) * n
}

fn refract(uv: &Vector3<f32>, n: &Vector3<f32>, etai_over_etat: f32) -> Vector3<f32> {
    let cos_theta = f32::min((-uv).dot(n), 1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = (1.0 - r_out_perp.magnitude_squared()).abs().sqrt().neg() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of Fresnel reflectance.
fn reflectance(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

impl Material {
    /// Scatters `ray` at `hit`. `None` means the ray was absorbed.
    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut Rng) -> Option<(Color, Ray)> {
        match self {
            Material::Lambert { albedo } => {
                let mut scatter_direction = hit.normal + random_vec_in_unit_sphere(rng);
                if scatter_direction.magnitude_squared() < 1e-8 {
                    scatter_direction = hit.normal;
                }
                Some((*albedo, Ray::new(hit.point, scatter_direction)))
            }
            Material::Metal { albedo, fuzz } => {
                let unit_direction = ray.direction.try_normalize(0.0)?;
                let reflected = reflect(&unit_direction, &hit.normal) + *fuzz * random_unit_vec(rng);
                if reflected.dot(&hit.normal) <= 0.0 {
                    return None;
                }
                Some((*albedo, Ray::new(hit.point, reflected)))
            }
            Material::Dielectric { index_of_refraction } => {
                let refraction_ratio = match hit.face {
                    Face::Front => 1.0 / index_of_refraction,
                    Face::Back => *index_of_refraction,
                };

                let unit_direction = ray.direction.try_normalize(0.0).unwrap_or(-hit.normal);

                let cos_theta = unit_direction.neg().dot(&hit.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract || reflectance(cos_theta, refraction_ratio) > rng.f32() {
                    reflect(&unit_direction, &hit.normal)
                } else {
                    refract(&unit_direction, &hit.normal, refraction_ratio)
                };

                Some((Color::WHITE, Ray::new(hit.point, direction)))
            }
            Material::Checker { .. } => self.resolve(&hit.point).scatter(ray, hit, rng),
        }
    }

    /// Follows checker patterns down to the material in effect at `point`.
    pub fn resolve(&self, point: &Point3<f32>) -> &Material {
        match self {
            Material::Checker { odd, even, scale } => {
                let sines = (scale * point.x).sin() * (scale * point.y).sin() * (scale * point.z).sin();
                let inner = if sines < 0.0 { odd } else { even };
                inner.resolve(point)
            }
            other => other,
        }
    }

    pub fn lambert(albedo: Color) -> Material {
        Material::Lambert { albedo }
    }

    /// Fuzz is clamped to `[0, 1]`.
    pub fn metal(albedo: Color, fuzz: f32) -> Material {
        Material::Metal { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }

    pub fn dielectric(index_of_refraction: f32) -> Material {
        Material::Dielectric { index_of_refraction }
    }

    pub fn checker(odd: Arc<Material>, even: Arc<Material>) -> Material {
        Material::Checker { odd, even, scale: DEFAULT_CHECKER_SCALE }
    }
}
