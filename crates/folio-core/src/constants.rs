use glam::Vec3;

// Shared scene/interaction tuning constants used by the core and the web frontend.

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.0, 8.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.5, 0.0];
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Visual feedback
pub const HOVER_EMPHASIS: f32 = 0.45; // emissive overlay while hovered
pub const HOVER_TINT: [f32; 3] = [0.0, 1.0, 0.97]; // cyan glow
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.01, 0.06];

// Animation
pub const MIN_FLOAT_HEIGHT: f32 = -0.6; // floating entities never sink below this

// Panel
pub const DEFAULT_TOPIC: &str = "education";
pub const TOPICS: [(&str, &str); 4] = [
    ("education", "Education"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];
pub const PANEL_HEADING_PREFIX: &str = "PLAYER 1 // ";
pub const DEFAULT_ICON: &str = "\u{25C6}"; // ◆

// Tooltip placement relative to the pointer (CSS px)
pub const TOOLTIP_OFFSET_PX: [f32; 2] = [14.0, 18.0];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
