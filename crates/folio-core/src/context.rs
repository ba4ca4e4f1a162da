//! Explicit owner of everything a frame needs: camera, registry, content,
//! interaction state, pointer state and the animation clock.
//!
//! Frontends hold one `SceneContext`, feed it input and per-frame ticks, and
//! act on the returned [`Effects`].

use crate::animation::AnimationClock;
use crate::content::{ContentStore, TopicKey};
use crate::error::SceneError;
use crate::interaction::{Effects, InteractionEvent, InteractionState};
use crate::panel::{PanelController, PanelView};
use crate::picking::pick;
use crate::registry::{Entity, EntityId, Highlight, SceneRegistry};
use crate::scene;
use crate::state::{Camera, SurfaceRect};
use glam::Vec2;
use std::time::Duration;

/// Single owner of the scene. Input goes in through the methods below; state
/// is read back through accessors so the clock and the state machine stay the
/// only writers of transforms and interaction state.
#[derive(Clone, Debug)]
pub struct SceneContext {
    camera: Camera,
    surface: SurfaceRect,
    registry: SceneRegistry,
    content: ContentStore,
    panel: PanelController,
    interaction: InteractionState,
    clock: AnimationClock,
    /// Last client-space pointer position, `None` once it left the surface.
    pointer: Option<Vec2>,
}

impl SceneContext {
    pub fn new(registry: SceneRegistry, content: ContentStore) -> Self {
        Self {
            camera: Camera::default(),
            surface: SurfaceRect::default(),
            registry,
            content,
            panel: PanelController::default(),
            interaction: InteractionState::default(),
            clock: AnimationClock::default(),
            pointer: None,
        }
    }

    /// Bundled scene and content.
    pub fn bundled() -> Result<Self, SceneError> {
        Ok(Self::new(scene::bundled_registry()?, ContentStore::bundled()?))
    }

    /// Record the surface's current client rectangle. The camera aspect
    /// follows it; a zero-sized surface keeps the old aspect and picks nothing.
    pub fn resize(&mut self, surface: SurfaceRect) {
        self.surface = surface;
        self.camera.set_viewport(surface.width, surface.height);
    }

    pub fn pointer_moved(&mut self, client: Vec2) {
        self.pointer = Some(client);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Advance animation, then re-pick under the stored pointer so hover
    /// tracks entities that move beneath a still pointer. The pointer is
    /// converted against the current surface, so a resize or scroll since the
    /// last move is honoured.
    pub fn frame(&mut self, dt: Duration) -> Effects {
        self.clock.tick(dt, &mut self.registry);
        let hit = self.pick_at(self.pointer_ndc());
        self.dispatch(InteractionEvent::Hover(hit))
    }

    /// Pick at the click position (client space), not the last hover.
    pub fn click(&mut self, client: Vec2) -> Effects {
        let hit = self.pick_at(self.surface.client_to_ndc(client));
        self.dispatch(InteractionEvent::Click(hit))
    }

    pub fn close(&mut self) -> Effects {
        self.dispatch(InteractionEvent::Close)
    }

    pub fn switch_tab(&mut self, topic: TopicKey) -> Effects {
        self.dispatch(InteractionEvent::SwitchTab(topic))
    }

    /// Switch to the `n`th tab (0-based). Out of range is a no-op.
    pub fn switch_tab_index(&mut self, n: usize) -> Effects {
        match self.panel.topic_at(n).cloned() {
            Some(topic) => self.switch_tab(topic),
            None => Effects::new(),
        }
    }

    pub fn dispatch(&mut self, event: InteractionEvent) -> Effects {
        let fx = self.interaction.apply(event);
        if !fx.is_empty() {
            self.sync_highlights();
        }
        fx
    }

    fn pick_at(&self, ndc: Option<Vec2>) -> Option<EntityId> {
        ndc.and_then(|p| pick(p, &self.camera, &self.registry))
    }

    /// Stored pointer in NDC of the current surface.
    pub fn pointer_ndc(&self) -> Option<Vec2> {
        self.pointer.and_then(|c| self.surface.client_to_ndc(c))
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn surface(&self) -> SurfaceRect {
        self.surface
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.interaction
            .selected
            .and_then(|id| self.registry.get(id))
    }

    pub fn hovered_entity(&self) -> Option<&Entity> {
        self.interaction.hovered.and_then(|id| self.registry.get(id))
    }

    pub fn tooltip_label(&self) -> Option<&'static str> {
        self.hovered_entity().map(|e| e.display_name)
    }

    pub fn panel_view(&self) -> PanelView {
        if !self.interaction.panel_open {
            return PanelView::default();
        }
        self.panel.render(
            self.selected_entity(),
            &self.interaction.active_tab,
            &self.content,
        )
    }

    fn sync_highlights(&mut self) {
        let hovered = self.interaction.hovered;
        let selected = self.interaction.selected;
        for entity in self.registry.entities_mut() {
            entity.highlight = if hovered == Some(entity.id) {
                Highlight::Hovered
            } else if selected == Some(entity.id) {
                Highlight::Selected
            } else {
                Highlight::None
            };
        }
    }
}
