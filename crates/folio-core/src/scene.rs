//! The bundled scene: four props laid out left to right in front of the camera.

use crate::error::SceneError;
use crate::registry::{
    EntityDef, EntityId, FloatParams, HitShape, Primitive, SceneRegistry, Transform,
};
use glam::{Quat, Vec3};
use smallvec::smallvec;
use std::f32::consts::FRAC_PI_2;

pub const SOCCER: EntityId = EntityId("soccer");
pub const PADDLE: EntityId = EntityId("paddle");
pub const PAWN: EntityId = EntityId("pawn");
pub const CONTROLLER: EntityId = EntityId("controller");

// Palette
const WHITE: [f32; 3] = [0.92, 0.92, 0.95];
const PADDLE_RED: [f32; 3] = [0.85, 0.12, 0.2];
const WOOD: [f32; 3] = [0.55, 0.36, 0.2];
const PAWN_MAGENTA: [f32; 3] = [0.8, 0.1, 0.75];
const CONTROLLER_GREY: [f32; 3] = [0.22, 0.24, 0.3];
const GRIP_CYAN: [f32; 3] = [0.1, 0.75, 0.85];

pub fn bundled_entities() -> Vec<EntityDef> {
    vec![
        EntityDef {
            id: SOCCER,
            display_name: "Soccer Ball",
            icon: Some("\u{26BD}"),
            rest: Transform::from_translation(Vec3::new(-3.3, 0.6, 0.0)),
            float: Some(FloatParams {
                amplitude: 0.15,
                speed: 1.2,
                rotation_speed: 0.6,
            }),
            hit_shapes: smallvec![HitShape::new(
                Primitive::Sphere { radius: 0.7 },
                Transform::IDENTITY,
                WHITE,
            )],
        },
        EntityDef {
            id: PADDLE,
            display_name: "Ping-Pong Paddle",
            icon: Some("\u{1F3D3}"),
            rest: Transform::from_translation(Vec3::new(-1.1, 0.6, 0.0))
                .with_rotation(Quat::from_rotation_z(0.3)),
            float: Some(FloatParams {
                amplitude: 0.12,
                speed: 1.5,
                rotation_speed: 0.4,
            }),
            hit_shapes: smallvec![
                // blade: thin disc facing the camera
                HitShape::new(
                    Primitive::Cylinder {
                        radius: 0.65,
                        half_height: 0.06,
                    },
                    Transform::from_translation(Vec3::new(0.0, 0.25, 0.0))
                        .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    PADDLE_RED,
                ),
                HitShape::new(
                    Primitive::Cylinder {
                        radius: 0.1,
                        half_height: 0.35,
                    },
                    Transform::from_translation(Vec3::new(0.0, -0.72, 0.0)),
                    WOOD,
                ),
            ],
        },
        EntityDef {
            id: PAWN,
            display_name: "Chess Pawn",
            icon: Some("\u{265F}"),
            rest: Transform::from_translation(Vec3::new(1.1, 0.3, 0.0)),
            float: Some(FloatParams {
                amplitude: 0.1,
                speed: 0.9,
                rotation_speed: 0.3,
            }),
            hit_shapes: smallvec![
                HitShape::new(
                    Primitive::Cylinder {
                        radius: 0.5,
                        half_height: 0.08,
                    },
                    Transform::from_translation(Vec3::new(0.0, -0.6, 0.0)),
                    PAWN_MAGENTA,
                ),
                HitShape::new(
                    Primitive::Cylinder {
                        radius: 0.28,
                        half_height: 0.45,
                    },
                    Transform::from_translation(Vec3::new(0.0, -0.1, 0.0)),
                    PAWN_MAGENTA,
                ),
                HitShape::new(
                    Primitive::Sphere { radius: 0.3 },
                    Transform::from_translation(Vec3::new(0.0, 0.55, 0.0)),
                    PAWN_MAGENTA,
                ),
            ],
        },
        EntityDef {
            id: CONTROLLER,
            display_name: "Game Controller",
            icon: Some("\u{1F3AE}"),
            rest: Transform::from_translation(Vec3::new(3.3, 0.4, 0.0)),
            float: None,
            hit_shapes: smallvec![
                HitShape::new(
                    Primitive::Cuboid {
                        half_extents: Vec3::new(0.75, 0.22, 0.3),
                    },
                    Transform::IDENTITY,
                    CONTROLLER_GREY,
                ),
                HitShape::new(
                    Primitive::Sphere { radius: 0.28 },
                    Transform::from_translation(Vec3::new(-0.6, -0.2, 0.05)),
                    GRIP_CYAN,
                ),
                HitShape::new(
                    Primitive::Sphere { radius: 0.28 },
                    Transform::from_translation(Vec3::new(0.6, -0.2, 0.05)),
                    GRIP_CYAN,
                ),
            ],
        },
    ]
}

pub fn bundled_registry() -> Result<SceneRegistry, SceneError> {
    SceneRegistry::from_defs(bundled_entities())
}
