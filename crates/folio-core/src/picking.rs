use crate::registry::{EntityId, Primitive, SceneRegistry};
use crate::state::{Camera, Ray};
use glam::{Mat4, Vec2, Vec3};

/// Closest shape along a ray. `shape_index` indexes
/// [`SceneRegistry::shapes`]; resolve it with [`SceneRegistry::owner_of_shape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub shape_index: usize,
    pub distance: f32,
}

/// Ray/sphere intersection. `ray_dir` need not be unit length; the returned
/// parameter is in units of `ray_dir`. A ray starting inside the sphere
/// reports the exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let a = ray_dir.length_squared();
    if a <= f32::EPSILON {
        return None;
    }
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / a;
    if t0 >= 0.0 {
        return Some(t0);
    }
    let t1 = (-b + sq) / a;
    (t1 >= 0.0).then_some(t1)
}

/// Slab test against an axis-aligned box centred on the origin.
#[inline]
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t1 = (-half_extents - ray_origin) * inv;
    let t2 = (half_extents - ray_origin) * inv;
    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();
    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Capped cylinder around the Y axis, centred on the origin.
pub fn ray_cylinder(ray_origin: Vec3, ray_dir: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    // side wall
    let a = ray_dir.x * ray_dir.x + ray_dir.z * ray_dir.z;
    if a > f32::EPSILON {
        let b = ray_origin.x * ray_dir.x + ray_origin.z * ray_dir.z;
        let c = ray_origin.x * ray_origin.x + ray_origin.z * ray_origin.z - radius * radius;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            for t in [(-b - sq) / a, (-b + sq) / a] {
                let y = ray_origin.y + ray_dir.y * t;
                if y.abs() <= half_height {
                    consider(t);
                }
            }
        }
    }

    // caps
    if ray_dir.y.abs() > f32::EPSILON {
        for cap_y in [-half_height, half_height] {
            let t = (cap_y - ray_origin.y) / ray_dir.y;
            let x = ray_origin.x + ray_dir.x * t;
            let z = ray_origin.z + ray_dir.z * t;
            if x * x + z * z <= radius * radius {
                consider(t);
            }
        }
    }
    best
}

/// Intersect a world-space ray with a primitive placed by `world_from_local`.
///
/// The ray is carried into local space without renormalising its direction,
/// so the returned distance is still measured along the world ray.
pub fn intersect_primitive(
    ray: &Ray,
    primitive: &Primitive,
    world_from_local: Mat4,
) -> Option<f32> {
    if world_from_local.determinant().abs() <= f32::MIN_POSITIVE {
        return None;
    }
    let local_from_world = world_from_local.inverse();
    let o = local_from_world.transform_point3(ray.origin);
    let d = local_from_world.transform_vector3(ray.dir);
    match *primitive {
        Primitive::Sphere { radius } => ray_sphere(o, d, Vec3::ZERO, radius),
        Primitive::Cuboid { half_extents } => ray_box(o, d, half_extents),
        Primitive::Cylinder {
            radius,
            half_height,
        } => ray_cylinder(o, d, radius, half_height),
    }
}

/// Nearest shape hit by `ray`, regardless of registry order.
pub fn raycast(ray: &Ray, registry: &SceneRegistry) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for (i, entity, shape) in registry.shapes() {
        let world = entity.shape_world_matrix(shape);
        if let Some(t) = intersect_primitive(ray, &shape.primitive, world) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(PickHit {
                        shape_index: i,
                        distance: t,
                    })
                }
            }
        }
    }
    best
}

/// Resolve the entity under a pointer given in normalized device coordinates.
pub fn pick(ndc: Vec2, camera: &Camera, registry: &SceneRegistry) -> Option<EntityId> {
    if registry.is_empty() {
        return None;
    }
    let ray = camera.ray_through_ndc(ndc)?;
    let hit = raycast(&ray, registry)?;
    registry.owner_of_shape(hit.shape_index)
}
