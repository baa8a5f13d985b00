use std::ops::RangeBounds;
use std::sync::Arc;

use float_ord::FloatOrd;
use nalgebra::{Point3, Vector3};

use crate::material::Material;
use crate::ray::{Hit, Ray};

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub material: Arc<Material>,
}

impl Sphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Point3<f32>, radius: f32, material: Arc<Material>) -> Self {
        Sphere { center, radius: radius.max(0.0), material }
    }

    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.magnitude_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.magnitude_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 || a == 0.0 || self.radius == 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // find the nearest root that lies in the acceptable range.
        let mut root = (-half_b - sqrtd) / a;
        if !t_rng.contains(&root) {
            root = (-half_b + sqrtd) / a;
            if !t_rng.contains(&root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(Hit::new(ray, root, outward_normal, &self.material))
    }
}

/// Axis-aligned cube given by its center and half the edge length.
#[derive(Clone, Debug)]
pub struct Cube {
    pub center: Point3<f32>,
    pub half_extent: f32,
    pub material: Arc<Material>,
}

/// Parametric span of a ray between one pair of parallel planes, with the
/// outward normals of the planes it crosses first and last.
struct Slab {
    near: f32,
    far: f32,
    near_normal: Vector3<f32>,
    far_normal: Vector3<f32>,
}

impl Slab {
    /// `None` when the ray runs parallel to the slab outside of it.
    fn new(origin: f32, direction: f32, lo: f32, hi: f32, axis: Vector3<f32>) -> Option<Slab> {
        if direction == 0.0 {
            if origin < lo || origin > hi {
                return None;
            }
            return Some(Slab {
                near: f32::NEG_INFINITY,
                far: f32::INFINITY,
                near_normal: -axis,
                far_normal: axis,
            });
        }

        let t_lo = (lo - origin) / direction;
        let t_hi = (hi - origin) / direction;
        Some(if direction > 0.0 {
            Slab { near: t_lo, far: t_hi, near_normal: -axis, far_normal: axis }
        } else {
            Slab { near: t_hi, far: t_lo, near_normal: axis, far_normal: -axis }
        })
    }
}

impl Cube {
    pub fn new(center: Point3<f32>, half_extent: f32, material: Arc<Material>) -> Self {
        Cube { center, half_extent: half_extent.max(0.0), material }
    }

    /// Slab test. A direction component of exactly zero makes that axis
    /// unconstrained when the origin is between its planes and a miss
    /// otherwise. When the origin is inside the cube the exit face is
    /// reported.
    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> {
        if ray.direction == Vector3::zeros() {
            return None;
        }
        let (o, d, c, h) = (&ray.origin, &ray.direction, &self.center, self.half_extent);

        // xy, xz, yz planes in that order; the first matching face wins ties
        let slabs = [
            Slab::new(o.z, d.z, c.z - h, c.z + h, Vector3::z())?,
            Slab::new(o.y, d.y, c.y - h, c.y + h, Vector3::y())?,
            Slab::new(o.x, d.x, c.x - h, c.x + h, Vector3::x())?,
        ];

        let t_enter = slabs.iter().map(|slab| slab.near).fold(f32::NEG_INFINITY, f32::max);
        let t_exit = slabs.iter().map(|slab| slab.far).fold(f32::INFINITY, f32::min);
        if t_enter > t_exit {
            return None;
        }

        let (t, outward_normal) = if t_rng.contains(&t_enter) {
            let face = slabs.iter().find(|slab| slab.near == t_enter)?;
            (t_enter, face.near_normal)
        } else if t_rng.contains(&t_exit) {
            let face = slabs.iter().find(|slab| slab.far == t_exit)?;
            (t_exit, face.far_normal)
        } else {
            return None;
        };

        Some(Hit::new(ray, t, outward_normal, &self.material))
    }
}

#[derive(Clone, Debug)]
pub enum Object {
    Sphere(Sphere),
    Cube(Cube),
    List(Vec<Object>),
}

impl Object {
    pub fn sphere(center: Point3<f32>, radius: f32, material: Arc<Material>) -> Object {
        Object::Sphere(Sphere::new(center, radius, material))
    }

    pub fn cube(center: Point3<f32>, half_extent: f32, material: Arc<Material>) -> Object {
        Object::Cube(Cube::new(center, half_extent, material))
    }

    /// Nearest hit with `t` inside `t_rng`.
    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> + Clone {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, t_rng),
            Object::Cube(cube) => cube.hit(ray, t_rng),
            Object::List(list) => {
                list.iter()
                    .filter_map(|obj| obj.hit(ray, t_rng.clone()))
                    .min_by_key(|hit| FloatOrd(hit.t))
            }
        }
    }

    /// Number of primitives, looking through nested lists.
    pub fn primitive_count(&self) -> usize {
        match self {
            Object::Sphere(_) | Object::Cube(_) => 1,
            Object::List(list) => list.iter().map(Object::primitive_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;
    use nalgebra::{point, vector};

    use super::*;
    use crate::picture::Color;
    use crate::random::random_unit_vec;
    use crate::ray::Face;

    const EPS: f32 = 1e-4;

    fn gray() -> Arc<Material> {
        Arc::new(Material::lambert(Color::new(0.5, 0.5, 0.5)))
    }

    fn assert_oriented(hit: &Hit, ray: &Ray) {
        assert!((hit.normal.magnitude() - 1.0).abs() < EPS);
        assert!(hit.normal.dot(&ray.direction) <= 0.0);
    }

    #[test]
    fn sphere_hit_picks_nearer_root() {
        let sphere = Sphere::new(point![0.0, 0.0, -5.0], 1.0, gray());
        let ray = Ray::new(Point3::origin(), vector![0.0, 0.0, -1.0]);

        let hit = sphere.hit(&ray, 0.001..).expect("hit");
        assert!((hit.t - 4.0).abs() < EPS);
        assert_eq!(hit.face, Face::Front);
        assert!((hit.normal - vector![0.0, 0.0, 1.0]).magnitude() < EPS);

        let far = sphere.hit(&ray, 4.5..).expect("far root");
        assert!((far.t - 6.0).abs() < EPS);
        assert_eq!(far.face, Face::Back);
        assert!((far.normal - vector![0.0, 0.0, 1.0]).magnitude() < EPS);

        assert!(sphere.hit(&ray, 0.0..=3.0).is_none());
    }

    #[test]
    fn sphere_miss() {
        let sphere = Sphere::new(point![0.0, 0.0, -5.0], 1.0, gray());
        let ray = Ray::new(point![1.5, 0.0, 0.0], vector![0.0, 0.0, -1.0]);
        assert!(sphere.hit(&ray, 0.001..).is_none());

        let away = Ray::new(Point3::origin(), vector![0.0, 0.0, 1.0]);
        assert!(sphere.hit(&away, 0.001..).is_none());
    }

    #[test]
    fn sphere_tangent_reports_single_root() {
        let sphere = Sphere::new(Point3::origin(), 1.0, gray());
        let ray = Ray::new(point![-5.0, 1.0, 0.0], vector![1.0, 0.0, 0.0]);

        let hit = sphere.hit(&ray, 0.001..).expect("grazing hit");
        assert_eq!(hit.t, 5.0);
        assert_eq!(hit.point, point![0.0, 1.0, 0.0]);
        assert_eq!(hit.face, Face::Front);
        assert!(!hit.is_inside());
        assert_oriented(&hit, &ray);
    }

    #[test]
    fn sphere_unnormalized_direction() {
        let sphere = Sphere::new(point![0.0, 0.0, -5.0], 1.0, gray());
        let ray = Ray::new(Point3::origin(), vector![0.0, 0.0, -2.0]);
        let hit = sphere.hit(&ray, 0.001..).expect("hit");
        assert!((hit.t - 2.0).abs() < EPS);
        assert!((hit.normal.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn cube_front_face_along_z() {
        let cube = Cube::new(Point3::origin(), 1.0, gray());
        let ray = Ray::new(point![0.0, 0.0, 10.0], vector![0.0, 0.0, -1.0]);

        let hit = cube.hit(&ray, 0.001..).expect("hit");
        assert_eq!(hit.t, 9.0);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);
        assert_eq!(hit.face, Face::Front);
    }

    #[test]
    fn cube_faces_on_every_axis() {
        let cube = Cube::new(point![1.0, 2.0, 3.0], 0.5, gray());
        let cases = [
            (point![1.0, 2.0, -7.0], vector![0.0, 0.0, 1.0], vector![0.0, 0.0, -1.0]),
            (point![1.0, 12.0, 3.0], vector![0.0, -1.0, 0.0], vector![0.0, 1.0, 0.0]),
            (point![1.0, -8.0, 3.0], vector![0.0, 1.0, 0.0], vector![0.0, -1.0, 0.0]),
            (point![11.0, 2.0, 3.0], vector![-1.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]),
            (point![-9.0, 2.0, 3.0], vector![1.0, 0.0, 0.0], vector![-1.0, 0.0, 0.0]),
        ];
        for (origin, direction, normal) in cases {
            let ray = Ray::new(origin, direction);
            let hit = cube.hit(&ray, 0.001..).expect("hit");
            assert_eq!(hit.normal, normal);
            assert_eq!(hit.face, Face::Front);
            assert!((hit.t - 9.5).abs() < EPS);
        }
    }

    #[test]
    fn cube_from_inside_reports_exit_face() {
        let cube = Cube::new(Point3::origin(), 1.0, gray());
        let ray = Ray::new(Point3::origin(), vector![1.0, 0.0, 0.0]);

        let hit = cube.hit(&ray, 0.001..).expect("exit hit");
        assert_eq!(hit.t, 1.0);
        assert_eq!(hit.face, Face::Back);
        assert!(hit.is_inside());
        assert_eq!(hit.normal, vector![-1.0, 0.0, 0.0]);
    }

    #[test]
    fn cube_respects_interval() {
        let cube = Cube::new(Point3::origin(), 1.0, gray());
        let ray = Ray::new(point![0.0, 0.0, 10.0], vector![0.0, 0.0, -1.0]);

        assert!(cube.hit(&ray, 0.0..=8.0).is_none());
        assert!(cube.hit(&ray, 12.0..).is_none());
        let exit = cube.hit(&ray, 9.5..).expect("exit face");
        assert_eq!(exit.t, 11.0);

        let behind = Ray::new(point![0.0, 0.0, 10.0], vector![0.0, 0.0, 1.0]);
        assert!(cube.hit(&behind, 0.001..).is_none());
    }

    #[test]
    fn cube_parallel_rays() {
        let cube = Cube::new(Point3::origin(), 1.0, gray());

        // parallel to the x and y slabs, outside the x slab
        let outside = Ray::new(point![2.0, 0.0, 10.0], vector![0.0, 0.0, -1.0]);
        assert!(cube.hit(&outside, 0.001..).is_none());

        // parallel, running exactly along the x = 1 face plane
        let on_plane = Ray::new(point![1.0, 0.0, 10.0], vector![0.0, 0.0, -1.0]);
        let hit = cube.hit(&on_plane, 0.001..).expect("closed slab");
        assert_eq!(hit.t, 9.0);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);

        let stationary = Ray::new(point![0.0, 0.0, 10.0], Vector3::zeros());
        assert!(cube.hit(&stationary, 0.001..).is_none());
    }

    #[test]
    fn cube_edge_tie_prefers_xy_planes() {
        let cube = Cube::new(Point3::origin(), 1.0, gray());
        // enters the z = 1 and x = 1 planes at the same t
        let ray = Ray::new(point![3.0, 0.0, 3.0], vector![-1.0, 0.0, -1.0]);
        let hit = cube.hit(&ray, 0.001..).expect("edge hit");
        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);
    }

    #[test]
    fn list_returns_nearest() {
        let world = Object::List(vec![
            Object::sphere(point![0.0, 0.0, -10.0], 1.0, gray()),
            Object::cube(point![0.0, 0.0, -4.0], 0.5, gray()),
            Object::List(vec![Object::sphere(point![0.0, 0.0, -7.0], 1.0, gray())]),
        ]);
        let ray = Ray::new(Point3::origin(), vector![0.0, 0.0, -1.0]);

        let hit = world.hit(&ray, 0.001..).expect("hit");
        assert!((hit.t - 3.5).abs() < EPS);
        assert_eq!(world.primitive_count(), 3);

        let later = world.hit(&ray, 4.6..).expect("hit");
        assert!((later.t - 6.0).abs() < EPS);

        assert!(Object::List(vec![]).hit(&ray, 0.001..).is_none());
    }

    #[test]
    fn normals_are_unit_and_face_the_ray() {
        let world = Object::List(vec![
            Object::sphere(point![0.0, 0.0, 0.0], 1.0, gray()),
            Object::cube(point![2.5, 0.0, 0.0], 0.75, gray()),
            Object::sphere(point![-2.0, 1.0, 0.5], 0.6, gray()),
        ]);
        let mut rng = Rng::with_seed(11);

        let mut hits = 0;
        for _ in 0..2000 {
            let origin = Point3::from(random_unit_vec(&mut rng) * 4.0 * rng.f32());
            let ray = Ray::new(origin, random_unit_vec(&mut rng));
            if let Some(hit) = world.hit(&ray, 0.001..) {
                hits += 1;
                assert!(hit.t >= 0.001);
                assert_oriented(&hit, &ray);
                assert_eq!(hit.is_inside(), hit.face == Face::Back);
            }
        }
        assert!(hits > 100);
    }
}
