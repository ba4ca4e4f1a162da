use crate::error::SceneError;
use fnv::FnvHashMap;
use serde::Deserialize;
use std::fmt;

static BUNDLED_TOPICS_JSON: &str = include_str!("../content/topics.json");

/// Key selecting a content block and its tab.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct TopicKey(String);

impl TopicKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TopicKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    #[serde(default)]
    pub meta: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContentBlock {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

impl ContentBlock {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.sections.is_empty()
    }
}

/// Read-only topic → content mapping, built once at startup.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    blocks: FnvHashMap<TopicKey, ContentBlock>,
}

impl ContentStore {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let blocks: FnvHashMap<TopicKey, ContentBlock> = serde_json::from_str(json)?;
        Ok(Self { blocks })
    }

    /// The store shipped with the crate.
    pub fn bundled() -> Result<Self, SceneError> {
        Self::from_json(BUNDLED_TOPICS_JSON)
    }

    pub fn get(&self, topic: &TopicKey) -> Option<&ContentBlock> {
        self.blocks.get(topic)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
