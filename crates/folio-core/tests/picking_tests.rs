// Host-side tests for ray intersection and entity picking.

use folio_core::*;
use glam::{Vec2, Vec3};
use proptest::prelude::*;
use smallvec::smallvec;

fn sphere_entity(id: &'static str, center: Vec3, radius: f32) -> EntityDef {
    EntityDef {
        id: EntityId(id),
        display_name: id,
        icon: None,
        rest: Transform::from_translation(center),
        float: None,
        hit_shapes: smallvec![HitShape::new(
            Primitive::Sphere { radius },
            Transform::IDENTITY,
            [1.0, 1.0, 1.0],
        )],
    }
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert_eq!(t, Some(3.0));
}

#[test]
fn ray_sphere_intersection_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_intersection_tangent() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(2.0, 0.0, 5.0), 2.0);
    let t = t.expect("grazing ray should count as a hit");
    assert!((t - 5.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_sphere(center, Vec3::X, center, 3.0).expect("inside start hits");
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_unnormalized_direction_keeps_parameter_units() {
    // doubling the direction halves the parameter
    let t = ray_sphere(Vec3::ZERO, Vec3::Z * 2.0, Vec3::new(0.0, 0.0, 5.0), 1.0);
    assert_eq!(t, Some(2.0));
}

#[test]
fn ray_box_hit_and_miss() {
    let half = Vec3::splat(0.5);
    let hit = ray_box(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z, half).expect("hit");
    assert!((hit - 1.5).abs() < 1e-4);

    let miss = ray_box(Vec3::new(2.0, 0.0, 2.0), Vec3::NEG_Z, half);
    assert!(miss.is_none());

    let behind = ray_box(Vec3::new(0.0, 0.0, 2.0), Vec3::Z, half);
    assert!(behind.is_none());
}

#[test]
fn ray_cylinder_side_cap_and_miss() {
    let side = ray_cylinder(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, 1.0, 1.0).expect("side");
    assert!((side - 4.0).abs() < 1e-4);

    let cap = ray_cylinder(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 1.0, 1.0).expect("cap");
    assert!((cap - 4.0).abs() < 1e-4);

    let wide = ray_cylinder(Vec3::new(0.0, 5.0, 3.0), Vec3::NEG_Y, 1.0, 1.0);
    assert!(wide.is_none());

    let above = ray_cylinder(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z, 1.0, 1.0);
    assert!(above.is_none());
}

#[test]
fn intersect_primitive_respects_entity_rotation() {
    // a thin disc standing up facing +Z after a quarter turn about X
    let world = Transform::IDENTITY
        .with_rotation(glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2))
        .matrix();
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::NEG_Z,
    };
    let disc = Primitive::Cylinder {
        radius: 1.0,
        half_height: 0.05,
    };
    let t = intersect_primitive(&ray, &disc, world).expect("face-on disc");
    assert!((t - 4.95).abs() < 1e-3);

    let unrotated = intersect_primitive(&ray, &disc, Transform::IDENTITY.matrix());
    // edge-on: the side wall at z = 1 is still there
    assert!((unrotated.expect("edge hit") - 4.0).abs() < 1e-3);
}

#[test]
fn camera_center_ray_points_at_target() {
    let cam = Camera::default();
    let ray = cam.ray_through_ndc(Vec2::ZERO).expect("ray");
    let expected = (cam.target - cam.eye).normalize();
    assert!(ray.dir.abs_diff_eq(expected, 1e-4), "{:?} vs {:?}", ray.dir, expected);
    assert_eq!(ray.origin, cam.eye);
}

#[test]
fn camera_rejects_non_finite_ndc_and_zero_viewport() {
    let mut cam = Camera::default();
    assert!(cam.ray_through_ndc(Vec2::new(f32::NAN, 0.0)).is_none());
    let before = cam.aspect;
    cam.set_viewport(0.0, 0.0);
    assert_eq!(cam.aspect, before);
    cam.set_viewport(800.0, 400.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn pick_returns_none_on_empty_registry() {
    let cam = Camera::default();
    let registry = SceneRegistry::new();
    for ndc in [Vec2::ZERO, Vec2::new(-1.0, 1.0), Vec2::new(0.5, -0.25)] {
        assert_eq!(pick(ndc, &cam, &registry), None);
    }
}

#[test]
fn pick_returns_owner_of_single_hit_shape() {
    let cam = Camera::default();
    let center = Vec3::new(1.0, 0.5, 0.0);
    let registry = SceneRegistry::from_defs([sphere_entity("ball", center, 0.5)]).unwrap();
    let ndc = cam.project_to_ndc(center);
    assert_eq!(pick(ndc, &cam, &registry), Some(EntityId("ball")));
    assert_eq!(pick(Vec2::new(-0.9, 0.9), &cam, &registry), None);
}

#[test]
fn pick_prefers_nearest_shape_not_registry_order() {
    let cam = Camera::default();
    let far_center = Vec3::new(0.0, 0.5, 0.0);
    let dir = (far_center - cam.eye).normalize();
    let near_center = cam.eye + dir * 4.0;
    let ndc = cam.project_to_ndc(far_center);

    let far_first = SceneRegistry::from_defs([
        sphere_entity("far", far_center, 0.5),
        sphere_entity("near", near_center, 0.3),
    ])
    .unwrap();
    assert_eq!(pick(ndc, &cam, &far_first), Some(EntityId("near")));

    let near_first = SceneRegistry::from_defs([
        sphere_entity("near", near_center, 0.3),
        sphere_entity("far", far_center, 0.5),
    ])
    .unwrap();
    assert_eq!(pick(ndc, &cam, &near_first), Some(EntityId("near")));

    let ray = cam.ray_through_ndc(ndc).unwrap();
    let hit = raycast(&ray, &far_first).unwrap();
    assert!((hit.distance - (4.0 - 0.3)).abs() < 1e-3);
}

#[test]
fn every_bundled_shape_resolves_to_its_entity() {
    let cam = Camera::default();
    let registry = folio_core::scene::bundled_registry().unwrap();
    for (_, entity, shape) in registry.shapes() {
        let center = entity
            .shape_world_matrix(shape)
            .transform_point3(Vec3::ZERO);
        let ndc = cam.project_to_ndc(center);
        assert_eq!(
            pick(ndc, &cam, &registry),
            Some(entity.id()),
            "shape centre of {} at {:?}",
            entity.id(),
            center
        );
    }
}

#[test]
fn pick_tracks_live_transform() {
    let cam = Camera::default();
    let rest = Vec3::new(0.0, 0.5, 0.0);
    let mut ball = sphere_entity("ball", rest, 0.4);
    ball.float = Some(FloatParams {
        amplitude: 1.5,
        speed: 1.0,
        rotation_speed: 0.0,
    });
    let mut registry = SceneRegistry::from_defs([ball]).unwrap();

    // quarter period: the ball sits at the top of its bob
    let mut clock = AnimationClock::default();
    clock.tick(
        std::time::Duration::from_secs_f64(std::f64::consts::FRAC_PI_2),
        &mut registry,
    );
    let live = registry.entities()[0].transform().translation;
    assert!((live.y - 2.0).abs() < 1e-3, "live y = {}", live.y);

    assert_eq!(pick(cam.project_to_ndc(rest), &cam, &registry), None);
    assert_eq!(
        pick(cam.project_to_ndc(live), &cam, &registry),
        Some(EntityId("ball"))
    );
}

#[test]
fn registry_rejects_duplicates_and_empty_shapes() {
    let mut registry = SceneRegistry::new();
    registry
        .insert(sphere_entity("a", Vec3::ZERO, 1.0))
        .unwrap();
    assert!(matches!(
        registry.insert(sphere_entity("a", Vec3::X, 1.0)),
        Err(SceneError::DuplicateEntity("a"))
    ));

    let mut empty = sphere_entity("b", Vec3::ZERO, 1.0);
    empty.hit_shapes.clear();
    assert!(matches!(
        registry.insert(empty),
        Err(SceneError::EmptyHitShapes("b"))
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_maps_many_shapes_to_one_entity() {
    let registry = folio_core::scene::bundled_registry().unwrap();
    let paddle_shapes: Vec<usize> = registry
        .shapes()
        .filter(|(_, e, _)| e.id() == folio_core::scene::PADDLE)
        .map(|(i, _, _)| i)
        .collect();
    assert_eq!(paddle_shapes.len(), 2);
    for i in paddle_shapes {
        assert_eq!(registry.owner_of_shape(i), Some(folio_core::scene::PADDLE));
    }
    assert_eq!(registry.owner_of_shape(registry.shape_count()), None);
}

proptest! {
    /// Property: with one sphere in view, pick agrees with the geometric
    /// distance between the pointer ray and the sphere centre.
    #[test]
    fn pick_matches_ray_to_centre_distance(x in -1.0f32..1.0, y in -1.0f32..1.0) {
        let cam = Camera::default();
        let center = Vec3::new(0.0, 0.5, 0.0);
        let radius = 1.0;
        let registry = SceneRegistry::from_defs([sphere_entity("ball", center, radius)]).unwrap();
        let ndc = Vec2::new(x, y);
        let ray = cam.ray_through_ndc(ndc).unwrap();
        let dist = (center - ray.origin).cross(ray.dir).length();
        prop_assume!((dist - radius).abs() > 1e-3);

        let got = pick(ndc, &cam, &registry);
        if dist < radius {
            prop_assert_eq!(got, Some(EntityId("ball")));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    /// Property: overlapping shapes on one ray always resolve to the nearer.
    #[test]
    fn nearest_of_stacked_spheres_wins(depth in 1.0f32..6.0) {
        let cam = Camera::default();
        let far_center = Vec3::new(0.0, 0.5, 0.0);
        let dir = (far_center - cam.eye).normalize();
        let near_center = cam.eye + dir * depth;
        let registry = SceneRegistry::from_defs([
            sphere_entity("far", far_center, 0.5),
            sphere_entity("near", near_center, 0.2),
        ]).unwrap();
        let ndc = cam.project_to_ndc(far_center);
        prop_assert_eq!(pick(ndc, &cam, &registry), Some(EntityId("near")));
    }
}
