//! Hover/selection state machine.
//!
//! Hover and selection are tracked independently. Every input is reduced to a
//! new [`InteractionState`] plus the side effects the frontend has to perform;
//! the reducer itself never touches the registry or the DOM.
//!
//! Effects are edge-triggered: hovering the same entity on consecutive frames
//! produces nothing. Anything that must stay visible while a condition holds
//! (the hover glow) is stored as a level on the entity instead.

use crate::constants::DEFAULT_TOPIC;
use crate::content::TopicKey;
use crate::registry::EntityId;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// Result of the per-frame pick under the last known pointer position.
    Hover(Option<EntityId>),
    /// Result of the pick under a click.
    Click(Option<EntityId>),
    /// Close control or cancel key.
    Close,
    SwitchTab(TopicKey),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    HighlightEnter(EntityId),
    HighlightExit(EntityId),
    ShowTooltip(EntityId),
    HideTooltip,
    OpenPanel(EntityId),
    ClosePanel,
    RenderTab(TopicKey),
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    pub hovered: Option<EntityId>,
    pub selected: Option<EntityId>,
    pub active_tab: TopicKey,
    pub panel_open: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: None,
            selected: None,
            active_tab: TopicKey::from(DEFAULT_TOPIC),
            panel_open: false,
        }
    }
}

impl InteractionState {
    /// Pure transition: the next state and the effects that lead to it.
    pub fn reduce(&self, event: InteractionEvent) -> (InteractionState, Effects) {
        let mut next = self.clone();
        let effects = next.apply(event);
        (next, effects)
    }

    /// In-place form of [`InteractionState::reduce`].
    pub fn apply(&mut self, event: InteractionEvent) -> Effects {
        let mut fx = Effects::new();
        match event {
            InteractionEvent::Hover(hit) => {
                if hit == self.hovered {
                    return fx;
                }
                if let Some(prev) = self.hovered.take() {
                    fx.push(Effect::HighlightExit(prev));
                }
                match hit {
                    Some(id) => {
                        fx.push(Effect::HighlightEnter(id));
                        fx.push(Effect::ShowTooltip(id));
                        self.hovered = Some(id);
                    }
                    None => fx.push(Effect::HideTooltip),
                }
                log::debug!("[interaction] hover -> {:?}", self.hovered);
            }
            InteractionEvent::Click(Some(id)) => {
                self.selected = Some(id);
                self.active_tab = TopicKey::from(DEFAULT_TOPIC);
                self.panel_open = true;
                fx.push(Effect::OpenPanel(id));
                fx.push(Effect::RenderTab(self.active_tab.clone()));
                log::debug!("[interaction] select {}", id);
            }
            InteractionEvent::Click(None) => {}
            InteractionEvent::Close => {
                if self.panel_open || self.selected.is_some() {
                    self.panel_open = false;
                    self.selected = None;
                    fx.push(Effect::ClosePanel);
                    log::debug!("[interaction] panel closed");
                }
            }
            InteractionEvent::SwitchTab(topic) => {
                if self.panel_open {
                    self.active_tab = topic;
                    fx.push(Effect::RenderTab(self.active_tab.clone()));
                }
            }
        }
        fx
    }
}
