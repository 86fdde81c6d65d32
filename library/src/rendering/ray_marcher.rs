use crate::geometry::alias::{Point, Vector};
use crate::geometry::fundamental_constants::{
    HIT_PRECISION, MAX_RAYMARCH_STEPS, NORMAL_ESTIMATION_DELTA, T_MAX, T_MIN,
};
use crate::geometry::hit::Hit;
use crate::geometry::ray::Ray;
use crate::objects::sdf::Sdf;
use cgmath::{InnerSpace, Zero};

/// Sphere tracing: step along the ray by the absolute SDF value, which
/// can never overshoot the nearest surface. The absolute value also lets
/// the march start inside a solid and walk out of it. This loop runs once
/// per primitive per pixel and allocates nothing.
pub(crate) fn march<S: Sdf + ?Sized>(object: &S, ray: &Ray) -> Hit {
    let mut t = T_MIN;
    for _ in 0..MAX_RAYMARCH_STEPS {
        let position = ray.at(t);
        let distance = object.sdf(position).abs();
        if distance < HIT_PRECISION {
            return Hit::new(t, estimate_normal(object, position));
        }
        t += distance;
        if t > T_MAX {
            return Hit::miss();
        }
    }
    Hit::miss()
}

/// Tetrahedron variant of the finite-difference gradient: four SDF
/// samples instead of six axis-aligned ones, with no directional bias.
/// At a sharp edge the samples can cancel; the zero vector is returned
/// there instead of a NaN from normalizing zero.
pub(crate) fn estimate_normal<S: Sdf + ?Sized>(object: &S, position: Point) -> Vector {
    const K: f32 = 0.577_350_26; // 1 / sqrt(3)
    const DIRECTIONS: [Vector; 4] = [
        Vector::new(K, -K, -K),
        Vector::new(-K, -K, K),
        Vector::new(-K, K, -K),
        Vector::new(K, K, K),
    ];

    let mut gradient = Vector::zero();
    for direction in DIRECTIONS {
        gradient += direction * object.sdf(position + direction * NORMAL_ESTIMATION_DELTA);
    }
    if gradient.magnitude2() < 1e-16 {
        return Vector::zero();
    }
    gradient.normalize()
}
