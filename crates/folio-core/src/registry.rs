//! Interactive entities and their pickable sub-shapes.
//!
//! An entity may be drawn and picked through several disjoint shapes (a
//! paddle's head and handle). The registry flattens every shape into one table
//! that records its owning entity, so resolving a picked shape is a single
//! index.

use crate::constants::HOVER_EMPHASIS;
use crate::error::SceneError;
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;
use std::fmt;

/// Stable identity of an entity ("soccer", "pawn", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub &'static str);

impl EntityId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Geometric primitive in shape-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
    /// Capped cylinder around the local Y axis.
    Cylinder { radius: f32, half_height: f32 },
}

impl Primitive {
    /// Scale that maps the unit mesh of this primitive to its real size.
    pub fn mesh_scale(&self) -> Vec3 {
        match *self {
            Primitive::Sphere { radius } => Vec3::splat(radius),
            Primitive::Cuboid { half_extents } => half_extents,
            Primitive::Cylinder {
                radius,
                half_height,
            } => Vec3::new(radius, half_height, radius),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitShape {
    pub primitive: Primitive,
    /// Placement relative to the owning entity.
    pub offset: Transform,
    pub color: [f32; 3],
}

impl HitShape {
    pub fn new(primitive: Primitive, offset: Transform, color: [f32; 3]) -> Self {
        Self {
            primitive,
            offset,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub amplitude: f32,
    pub speed: f32,
    pub rotation_speed: f32,
}

/// Emphasis level the renderer reads each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Hovered,
    Selected,
}

impl Highlight {
    /// Emissive overlay intensity. Selection has no emphasis of its own; it
    /// is signalled by the panel.
    pub fn emphasis(&self) -> f32 {
        match self {
            Highlight::Hovered => HOVER_EMPHASIS,
            Highlight::None | Highlight::Selected => 0.0,
        }
    }
}

/// Static description used to register an entity.
#[derive(Clone, Debug)]
pub struct EntityDef {
    pub id: EntityId,
    pub display_name: &'static str,
    pub icon: Option<&'static str>,
    pub rest: Transform,
    pub float: Option<FloatParams>,
    pub hit_shapes: SmallVec<[HitShape; 3]>,
}

/// Registered entity. Read-only outside the crate: the live transform and
/// spin belong to the animation clock, the highlight to the scene context.
#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) id: EntityId,
    pub(crate) display_name: &'static str,
    pub(crate) icon: Option<&'static str>,
    pub(crate) hit_shapes: SmallVec<[HitShape; 3]>,
    pub(crate) rest: Transform,
    pub(crate) transform: Transform,
    pub(crate) spin: f32,
    pub(crate) float: Option<FloatParams>,
    pub(crate) highlight: Highlight,
}

impl Entity {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn hit_shapes(&self) -> &[HitShape] {
        &self.hit_shapes
    }

    pub fn rest(&self) -> Transform {
        self.rest
    }

    /// Current-frame transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Accumulated rotation about Y, radians.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// World matrix of one of this entity's shapes under the live transform.
    pub fn shape_world_matrix(&self, shape: &HitShape) -> Mat4 {
        self.transform.matrix() * shape.offset.matrix()
    }
}

#[derive(Clone, Copy, Debug)]
struct ShapeSlot {
    entity: usize,
    shape: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    entities: Vec<Entity>,
    shapes: Vec<ShapeSlot>,
    by_id: FnvHashMap<EntityId, usize>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defs(defs: impl IntoIterator<Item = EntityDef>) -> Result<Self, SceneError> {
        let mut registry = Self::new();
        for def in defs {
            registry.insert(def)?;
        }
        log::info!(
            "[registry] {} entities, {} hit shapes",
            registry.entities.len(),
            registry.shapes.len()
        );
        Ok(registry)
    }

    pub fn insert(&mut self, def: EntityDef) -> Result<(), SceneError> {
        if self.by_id.contains_key(&def.id) {
            return Err(SceneError::DuplicateEntity(def.id.0));
        }
        if def.hit_shapes.is_empty() {
            return Err(SceneError::EmptyHitShapes(def.id.0));
        }
        let index = self.entities.len();
        for shape in 0..def.hit_shapes.len() {
            self.shapes.push(ShapeSlot {
                entity: index,
                shape,
            });
        }
        self.by_id.insert(def.id, index);
        self.entities.push(Entity {
            id: def.id,
            display_name: def.display_name,
            icon: def.icon,
            hit_shapes: def.hit_shapes,
            rest: def.rest,
            transform: def.rest,
            spin: 0.0,
            float: def.float,
            highlight: Highlight::None,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.by_id.get(&id).map(|&i| &self.entities[i])
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Every shape in the registry with its owning entity, in table order.
    pub fn shapes(&self) -> impl Iterator<Item = (usize, &Entity, &HitShape)> + '_ {
        self.shapes.iter().enumerate().map(|(i, slot)| {
            let entity = &self.entities[slot.entity];
            (i, entity, &entity.hit_shapes[slot.shape])
        })
    }

    /// Owning entity of a shape index produced by [`SceneRegistry::shapes`].
    pub fn owner_of_shape(&self, shape_index: usize) -> Option<EntityId> {
        self.shapes
            .get(shape_index)
            .map(|slot| self.entities[slot.entity].id)
    }
}
