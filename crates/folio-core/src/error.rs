use thiserror::Error;

/// Failures surfaced while building or presenting the scene.
///
/// An empty pick and a missing content topic are deliberately absent: both
/// are ordinary outcomes (`None` and an empty block respectively).
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("duplicate entity id `{0}`")]
    DuplicateEntity(&'static str),
    #[error("entity `{0}` has no hit shapes")]
    EmptyHitShapes(&'static str),
    #[error("content store: {0}")]
    Content(#[from] serde_json::Error),
}
