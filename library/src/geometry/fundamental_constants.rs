/// Iteration budget of the sphere-tracing loop; a ray that has not
/// converged after this many steps counts as a miss.
pub(crate) const MAX_RAYMARCH_STEPS: usize = 256;

/// Initial parametric distance, keeps the march from re-detecting the
/// surface the ray starts on.
pub(crate) const T_MIN: f32 = 1e-3;

/// Rays farther than this from their origin are treated as escaped.
pub(crate) const T_MAX: f32 = 2e3;

/// Absolute SDF value under which the march counts as converged.
pub(crate) const HIT_PRECISION: f32 = 1e-4;

/// Offset of the tetrahedron sample points during normal estimation.
pub(crate) const NORMAL_ESTIMATION_DELTA: f32 = 1e-4;

/// Tolerance on the squared norm of unit normals supplied by the caller.
pub(crate) const UNIT_NORMAL_TOLERANCE: f32 = 1e-4;

/// Storage limit of the scene container, per primitive kind.
pub const MAX_PRIMITIVES_PER_KIND: usize = 100;
