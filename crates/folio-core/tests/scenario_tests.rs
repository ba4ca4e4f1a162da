// End-to-end scenarios driven through SceneContext, the way the web frontend
// drives it: surface rect, pointer position, per-frame ticks, clicks, closes
// and tab switches.

use folio_core::scene::{CONTROLLER, PADDLE, PAWN, SOCCER};
use folio_core::*;
use glam::{Vec2, Vec3};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

const WIDE: SurfaceRect = SurfaceRect {
    left: 0.0,
    top: 0.0,
    width: 1600.0,
    height: 900.0,
};

/// Client position of an NDC point on `rect`.
fn to_client(rect: SurfaceRect, ndc: Vec2) -> Vec2 {
    Vec2::new(
        rect.left + (ndc.x + 1.0) * 0.5 * rect.width,
        rect.top + (1.0 - ndc.y) * 0.5 * rect.height,
    )
}

/// Client position of the centre of an entity's `n`th shape under its live
/// transform.
fn shape_client(ctx: &SceneContext, id: EntityId, n: usize) -> Vec2 {
    let entity = ctx.registry().get(id).expect("entity exists");
    let center = entity
        .shape_world_matrix(&entity.hit_shapes()[n])
        .transform_point3(Vec3::ZERO);
    to_client(ctx.surface(), ctx.camera().project_to_ndc(center))
}

/// A point near the bottom edge where nothing is drawn.
fn empty_floor(ctx: &SceneContext) -> Vec2 {
    to_client(ctx.surface(), Vec2::new(0.0, -0.95))
}

fn bundled() -> SceneContext {
    let mut ctx = SceneContext::bundled().expect("bundled scene");
    ctx.resize(WIDE);
    ctx
}

#[test]
fn pawn_hover_click_and_tab_switch() {
    let mut ctx = bundled();
    assert!(ctx.frame(Duration::ZERO).is_empty(), "no pointer yet");

    // pawn head
    let client = shape_client(&ctx, PAWN, 2);
    let ndc = ctx.surface().client_to_ndc(client).unwrap();
    assert_eq!(pick(ndc, ctx.camera(), ctx.registry()), Some(PAWN));

    ctx.pointer_moved(client);
    let fx = ctx.frame(Duration::ZERO);
    assert!(fx.contains(&Effect::HighlightEnter(PAWN)));
    assert!(fx.contains(&Effect::ShowTooltip(PAWN)));
    assert_eq!(ctx.tooltip_label(), Some("Chess Pawn"));
    assert_eq!(ctx.registry().get(PAWN).unwrap().highlight(), Highlight::Hovered);

    let fx = ctx.click(client);
    assert!(fx.contains(&Effect::OpenPanel(PAWN)));
    let view = ctx.panel_view();
    assert!(view.visible);
    assert!(view.heading.contains("Chess Pawn"));
    assert_eq!(view.active_tab().unwrap().topic.as_str(), "education");
    assert_eq!(
        Some(&view.body),
        ctx.content().get(&TopicKey::from("education"))
    );

    ctx.switch_tab(TopicKey::from("contact"));
    let view = ctx.panel_view();
    assert_eq!(view.body.title, "Contact");
    assert_eq!(view.active_tab().unwrap().topic.as_str(), "contact");
}

#[test]
fn hover_is_level_triggered_across_frames() {
    let mut ctx = bundled();
    let client = shape_client(&ctx, SOCCER, 0);
    ctx.pointer_moved(client);

    let mut enters = 0;
    for _ in 0..120 {
        let fx = ctx.frame(FRAME);
        enters += fx
            .iter()
            .filter(|e| **e == Effect::HighlightEnter(SOCCER))
            .count();
        // the ball bobs but stays under the pointer
        assert_eq!(ctx.interaction().hovered, Some(SOCCER));
        assert_eq!(
            ctx.registry().get(SOCCER).unwrap().highlight(),
            Highlight::Hovered
        );
    }
    assert_eq!(enters, 1);
}

#[test]
fn pointer_leaving_surface_clears_hover() {
    let mut ctx = bundled();
    ctx.pointer_moved(shape_client(&ctx, SOCCER, 0));
    ctx.frame(FRAME);
    ctx.pointer_left();
    let fx = ctx.frame(FRAME);
    assert_eq!(fx.as_slice(), &[Effect::HighlightExit(SOCCER), Effect::HideTooltip]);
    assert_eq!(ctx.tooltip_label(), None);
    assert_eq!(
        ctx.registry().get(SOCCER).unwrap().highlight(),
        Highlight::None
    );
}

#[test]
fn selected_entity_keeps_selected_level_after_pointer_moves_off() {
    let mut ctx = bundled();
    let client = shape_client(&ctx, CONTROLLER, 0);
    ctx.pointer_moved(client);
    ctx.frame(FRAME);
    ctx.click(client);
    ctx.pointer_moved(empty_floor(&ctx));
    ctx.frame(FRAME);

    let controller = ctx.registry().get(CONTROLLER).unwrap();
    assert_eq!(controller.highlight(), Highlight::Selected);
    assert_eq!(controller.highlight().emphasis(), 0.0);
    assert!(ctx.panel_view().visible);
}

#[test]
fn click_on_empty_space_keeps_panel_open() {
    let mut ctx = bundled();
    ctx.click(shape_client(&ctx, PAWN, 2));
    let fx = ctx.click(empty_floor(&ctx));
    assert!(fx.is_empty());
    assert!(ctx.panel_view().visible);
    assert_eq!(ctx.interaction().selected, Some(PAWN));
}

#[test]
fn close_then_select_other_entity_shows_its_default_tab() {
    let mut ctx = bundled();
    ctx.click(shape_client(&ctx, PAWN, 2));
    ctx.switch_tab(TopicKey::from("contact"));
    let fx = ctx.close();
    assert_eq!(fx.as_slice(), &[Effect::ClosePanel]);
    assert!(!ctx.panel_view().visible);
    assert_eq!(ctx.interaction().selected, None);

    ctx.click(shape_client(&ctx, CONTROLLER, 0));
    let view = ctx.panel_view();
    assert!(view.heading.contains("Game Controller"));
    assert_eq!(view.active_tab().unwrap().topic.as_str(), DEFAULT_TOPIC);
}

#[test]
fn tab_switch_by_index_and_out_of_range() {
    let mut ctx = bundled();
    ctx.click(shape_client(&ctx, SOCCER, 0));
    ctx.switch_tab_index(2);
    assert_eq!(ctx.interaction().active_tab.as_str(), "projects");
    assert!(ctx.switch_tab_index(9).is_empty());
    assert_eq!(ctx.interaction().active_tab.as_str(), "projects");
}

#[test]
fn missing_topic_renders_empty_without_error() {
    let mut ctx = bundled();
    ctx.click(shape_client(&ctx, SOCCER, 0));
    let fx = ctx.switch_tab(TopicKey::from("guestbook"));
    assert_eq!(fx.as_slice(), &[Effect::RenderTab(TopicKey::from("guestbook"))]);
    let view = ctx.panel_view();
    assert!(view.visible);
    assert!(view.body.is_empty());
}

#[test]
fn hover_follows_pointer_after_surface_resize() {
    let mut ctx = bundled();
    let client = shape_client(&ctx, SOCCER, 0);
    ctx.pointer_moved(client);
    ctx.frame(FRAME);
    assert_eq!(ctx.interaction().hovered, Some(SOCCER));

    // window narrowed under a stationary pointer
    ctx.resize(SurfaceRect {
        width: 900.0,
        ..WIDE
    });
    let fx = ctx.frame(FRAME);

    let ndc = ctx.pointer_ndc().expect("pointer still over the surface");
    assert_eq!(ndc, ctx.surface().client_to_ndc(client).unwrap());
    let fresh = pick(ndc, ctx.camera(), ctx.registry());
    assert_eq!(fresh, Some(PADDLE));
    assert_eq!(ctx.interaction().hovered, fresh);
    assert!(fx.contains(&Effect::HighlightExit(SOCCER)));
    assert!(fx.contains(&Effect::HighlightEnter(PADDLE)));
    assert_eq!(ctx.tooltip_label(), Some("Ping-Pong Paddle"));
}

#[test]
fn surface_moved_under_pointer_is_reprojected() {
    let mut ctx = bundled();
    let client = shape_client(&ctx, PAWN, 2);
    ctx.pointer_moved(client);
    ctx.frame(FRAME);
    assert_eq!(ctx.interaction().hovered, Some(PAWN));

    // page scrolled: the canvas slides up past the pointer
    ctx.resize(SurfaceRect {
        top: -900.0,
        ..WIDE
    });
    assert_eq!(ctx.pointer_ndc(), None);
    let fx = ctx.frame(FRAME);
    assert!(fx.contains(&Effect::HighlightExit(PAWN)));
    assert_eq!(ctx.interaction().hovered, None);
}

#[test]
fn zero_size_surface_yields_no_pick() {
    let mut ctx = bundled();
    ctx.resize(SurfaceRect::default());
    ctx.pointer_moved(Vec2::new(800.0, 450.0));
    assert!(ctx.frame(FRAME).is_empty());
    assert!(ctx.click(Vec2::new(800.0, 450.0)).is_empty());
    assert!(!ctx.panel_view().visible);
}

#[test]
fn empty_scene_never_hovers_or_opens() {
    let mut ctx = SceneContext::new(SceneRegistry::new(), ContentStore::default());
    ctx.resize(WIDE);
    let points = [
        Vec2::ZERO,
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.3, -0.7),
    ];
    for (i, p) in points.iter().cycle().take(240).enumerate() {
        let client = to_client(WIDE, *p);
        ctx.pointer_moved(client);
        assert!(ctx.frame(FRAME).is_empty());
        if i % 10 == 0 {
            assert!(ctx.click(client).is_empty());
        }
    }
    assert!(!ctx.panel_view().visible);
    assert_eq!(ctx.interaction(), &InteractionState::default());
    assert!(ctx.clock().elapsed_sec() > 3.0);
}
