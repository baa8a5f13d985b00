//! Sampling helpers over an explicit `fastrand::Rng`.
//!
//! Nothing here touches a global generator: callers own the source so that
//! every render is reproducible from its seed.

use std::iter::repeat_with;

use fastrand::Rng;
use nalgebra::{vector, Vector2, Vector3};

pub fn random_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.f32()
}

pub fn random_vec(rng: &mut Rng) -> Vector3<f32> {
    vector![rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0]
}

pub fn random_vec_in_unit_sphere(rng: &mut Rng) -> Vector3<f32> {
    repeat_with(|| random_vec(rng))
        .find(|vec| vec.magnitude_squared() < 1.0)
        .unwrap_or_else(Vector3::zeros)
}

/// Uniform direction on the unit sphere.
pub fn random_unit_vec(rng: &mut Rng) -> Vector3<f32> {
    repeat_with(|| random_vec(rng))
        .find(|vec| {
            let len = vec.magnitude_squared();
            len > 1e-12 && len <= 1.0
        })
        .map(|vec| vec.normalize())
        .unwrap_or_else(Vector3::z)
}

pub fn random_vec_in_unit_disk(rng: &mut Rng) -> Vector2<f32> {
    repeat_with(|| vector![rng.f32() * 2.0 - 1.0, rng.f32() * 2.0 - 1.0])
        .find(|vec| vec.magnitude_squared() < 1.0)
        .unwrap_or_else(Vector2::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_their_domains() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            assert!(random_vec_in_unit_sphere(&mut rng).magnitude_squared() < 1.0);
            assert!(random_vec_in_unit_disk(&mut rng).magnitude_squared() < 1.0);
            assert!((random_unit_vec(&mut rng).magnitude() - 1.0).abs() < 1e-5);

            let x = random_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..16 {
            assert_eq!(random_unit_vec(&mut a), random_unit_vec(&mut b));
        }
    }
}
