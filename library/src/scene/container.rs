use crate::geometry::alias::{Point, Vector};
use crate::geometry::fundamental_constants::{MAX_PRIMITIVES_PER_KIND, UNIT_NORMAL_TOLERANCE};
use crate::geometry::hit::Hit;
use crate::geometry::ray::Ray;
use crate::objects::material_tag::MaterialTag;
use crate::objects::plane::{Plane, PlaneIndex};
use crate::objects::sdf::Sdf;
use crate::objects::sdf_box::{BoxIndex, SdfBox};
use crate::objects::sphere::{Sphere, SphereIndex};
use crate::objects::torus::{Torus, TorusIndex};
use crate::rendering::ray_marcher::march;
use cgmath::InnerSpace;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("capacity of {capacity} primitives per kind is exhausted")]
    CapacityExhausted { capacity: usize },
    #[error("radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f32 },
    #[error("normal must have unit length, got squared norm {norm_squared}")]
    NotUnitNormal { norm_squared: f32 },
    #[error("major radius {major_radius} must exceed minor radius {minor_radius}")]
    RadiiOutOfOrder { major_radius: f32, minor_radius: f32 },
    #[error("box half extents must be positive on every axis, got ({x}, {y}, {z})")]
    NonPositiveHalfExtent { x: f32, y: f32, z: f32 },
}

/// Per-kind primitive storage. Insertions are validated and rejected as
/// a whole, never clamped: a silently coerced parameter would break the
/// SDF lower-bound invariant the marcher relies on. Mutation of stored
/// primitives is only legal between render passes; the renderer holds a
/// shared borrow for the whole pass, so the compiler enforces that.
#[derive(Default)]
pub struct Container {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    boxes: Vec<SdfBox>,
    toruses: Vec<Torus>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, center: Point, radius: f32, material: MaterialTag) -> Result<SphereIndex, SceneError> {
        Self::ensure_capacity(self.spheres.len())?;
        if !(radius > 0.0) {
            return Err(SceneError::NonPositiveRadius { radius });
        }
        self.spheres.push(Sphere::new(center, radius, material));
        Ok(SphereIndex(self.spheres.len() - 1))
    }

    pub fn add_plane(&mut self, normal: Vector, offset: f32, material: MaterialTag) -> Result<PlaneIndex, SceneError> {
        Self::ensure_capacity(self.planes.len())?;
        Self::ensure_unit_normal(normal)?;
        self.planes.push(Plane::new(normal, offset, material));
        Ok(PlaneIndex(self.planes.len() - 1))
    }

    pub fn add_box(&mut self, center: Point, half_size: Vector, material: MaterialTag) -> Result<BoxIndex, SceneError> {
        Self::ensure_capacity(self.boxes.len())?;
        if !(half_size.x > 0.0 && half_size.y > 0.0 && half_size.z > 0.0) {
            return Err(SceneError::NonPositiveHalfExtent { x: half_size.x, y: half_size.y, z: half_size.z });
        }
        self.boxes.push(SdfBox::new(center, half_size, material));
        Ok(BoxIndex(self.boxes.len() - 1))
    }

    pub fn add_torus(
        &mut self,
        center: Point,
        normal: Vector,
        major_radius: f32,
        minor_radius: f32,
        material: MaterialTag,
    ) -> Result<TorusIndex, SceneError> {
        Self::ensure_capacity(self.toruses.len())?;
        Self::ensure_unit_normal(normal)?;
        if !(minor_radius > 0.0) {
            return Err(SceneError::NonPositiveRadius { radius: minor_radius });
        }
        if major_radius <= minor_radius {
            return Err(SceneError::RadiiOutOfOrder { major_radius, minor_radius });
        }
        self.toruses.push(Torus::new(center, normal, major_radius, minor_radius, material));
        Ok(TorusIndex(self.toruses.len() - 1))
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
        self.planes.clear();
        self.boxes.clear();
        self.toruses.clear();
    }

    #[must_use]
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    #[must_use]
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn torus_count(&self) -> usize {
        self.toruses.len()
    }

    #[must_use]
    pub fn sphere_mut(&mut self, index: SphereIndex) -> Option<&mut Sphere> {
        self.spheres.get_mut(index.0)
    }

    #[must_use]
    pub fn plane_mut(&mut self, index: PlaneIndex) -> Option<&mut Plane> {
        self.planes.get_mut(index.0)
    }

    #[must_use]
    pub fn box_mut(&mut self, index: BoxIndex) -> Option<&mut SdfBox> {
        self.boxes.get_mut(index.0)
    }

    #[must_use]
    pub fn torus_mut(&mut self, index: TorusIndex) -> Option<&mut Torus> {
        self.toruses.get_mut(index.0)
    }

    /// Nearest hit across every primitive of every kind. Kinds are
    /// scanned in a fixed order (spheres, planes, boxes, toruses) and in
    /// insertion order within a kind; the strict comparison keeps the
    /// earliest-registered primitive on an exact distance tie, so
    /// repeated renders of an unchanged scene resolve ties identically.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> (Hit, MaterialTag) {
        let mut closest = Hit::miss();
        let mut material = MaterialTag::BACKGROUND;

        Self::intersect_kind(&self.spheres, |sphere| sphere.material(), ray, &mut closest, &mut material);
        Self::intersect_kind(&self.planes, |plane| plane.material(), ray, &mut closest, &mut material);
        Self::intersect_kind(&self.boxes, |sdf_box| sdf_box.material(), ray, &mut closest, &mut material);
        Self::intersect_kind(&self.toruses, |torus| torus.material(), ray, &mut closest, &mut material);

        (closest, material)
    }

    fn intersect_kind<Primitive: Sdf>(
        primitives: &[Primitive],
        material_of: impl Fn(&Primitive) -> MaterialTag,
        ray: &Ray,
        closest: &mut Hit,
        material: &mut MaterialTag,
    ) {
        for primitive in primitives {
            let hit = march(primitive, ray);
            if hit.distance() < closest.distance() {
                *closest = hit;
                *material = material_of(primitive);
            }
        }
    }

    fn ensure_capacity(current_count: usize) -> Result<(), SceneError> {
        if current_count >= MAX_PRIMITIVES_PER_KIND {
            return Err(SceneError::CapacityExhausted { capacity: MAX_PRIMITIVES_PER_KIND });
        }
        Ok(())
    }

    fn ensure_unit_normal(normal: Vector) -> Result<(), SceneError> {
        let norm_squared = normal.magnitude2();
        if (norm_squared - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
            return Err(SceneError::NotUnitNormal { norm_squared });
        }
        Ok(())
    }
}
