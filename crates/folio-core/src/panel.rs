use crate::constants::{DEFAULT_ICON, PANEL_HEADING_PREFIX, TOPICS};
use crate::content::{ContentBlock, ContentStore, TopicKey};
use crate::registry::Entity;

#[derive(Clone, Debug, PartialEq)]
pub struct TabView {
    pub topic: TopicKey,
    pub label: String,
    pub active: bool,
}

impl TabView {
    /// Value for the tab's `aria-selected` attribute.
    pub fn aria_selected(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// Everything the frontend needs to draw the info panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelView {
    pub visible: bool,
    pub icon: String,
    pub heading: String,
    pub tabs: Vec<TabView>,
    pub body: ContentBlock,
}

impl PanelView {
    pub fn active_tab(&self) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.active)
    }
}

/// Maps the current selection and tab to a [`PanelView`].
#[derive(Clone, Debug)]
pub struct PanelController {
    tabs: Vec<(TopicKey, String)>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(
            TOPICS
                .iter()
                .map(|(key, label)| (TopicKey::from(*key), label.to_string())),
        )
    }
}

impl PanelController {
    pub fn new(tabs: impl IntoIterator<Item = (TopicKey, String)>) -> Self {
        Self {
            tabs: tabs.into_iter().collect(),
        }
    }

    /// Topic of the `n`th tab (0-based), if any.
    pub fn topic_at(&self, n: usize) -> Option<&TopicKey> {
        self.tabs.get(n).map(|(key, _)| key)
    }

    pub fn render(
        &self,
        selected: Option<&Entity>,
        active_tab: &TopicKey,
        store: &ContentStore,
    ) -> PanelView {
        let Some(entity) = selected else {
            return PanelView::default();
        };
        let tabs = self
            .tabs
            .iter()
            .map(|(topic, label)| TabView {
                topic: topic.clone(),
                label: label.clone(),
                active: topic == active_tab,
            })
            .collect();
        PanelView {
            visible: true,
            icon: entity.icon.unwrap_or(DEFAULT_ICON).to_string(),
            heading: format!("{}{}", PANEL_HEADING_PREFIX, entity.display_name),
            tabs,
            body: store.get(active_tab).cloned().unwrap_or_default(),
        }
    }
}
