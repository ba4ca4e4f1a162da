// DOM hooks and frame pacing for the web frontend.

pub const CANVAS_ID: &str = "scene-canvas";
pub const TOOLTIP_ID: &str = "tooltip";
pub const PANEL_ID: &str = "panel";
pub const PANEL_ICON_ID: &str = "panel-icon";
pub const PANEL_HEADING_ID: &str = "panel-heading";
pub const PANEL_BODY_ID: &str = "panel-body";
pub const PANEL_CLOSE_ID: &str = "panel-close";
pub const TAB_LIST_SELECTOR: &str = "#panel-tabs";
pub const TAB_SELECTOR: &str = "#panel-tabs [data-topic]";
pub const FALLBACK_ID: &str = "fallback";

pub const FALLBACK_MESSAGE: &str =
    "This page needs WebGPU to draw its 3D scene. Try a recent Chrome, Edge or Safari.";

// Frames after a long stall (hidden tab) advance at most this far
pub const MAX_FRAME_DT_MS: u64 = 100;

pub const HOVER_CURSOR: &str = "pointer";
