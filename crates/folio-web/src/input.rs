use glam::Vec2;

// Client → NDC is `folio_core::SurfaceRect::client_to_ndc`.

/// Top-left corner of the tooltip for a pointer at `client`.
#[inline]
pub fn tooltip_anchor(client: Vec2, offset: [f32; 2]) -> Vec2 {
    client + Vec2::from(offset)
}
