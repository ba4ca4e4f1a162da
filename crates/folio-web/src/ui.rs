use folio_core::{Effect, PanelView, SceneContext, TOOLTIP_OFFSET_PX};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    HOVER_CURSOR, PANEL_BODY_ID, PANEL_HEADING_ID, PANEL_ICON_ID, PANEL_ID, TAB_LIST_SELECTOR,
    TAB_SELECTOR, TOOLTIP_ID,
};
use crate::{dom, input, markup};

// ---------------- Tooltip ----------------

pub fn show_tooltip(document: &web::Document, label: &str, client: Vec2) {
    if let Some(el) = dom::html_element(document, TOOLTIP_ID) {
        el.set_text_content(Some(label));
        place_tooltip_el(&el, client);
        dom::set_visible(&el, true);
    }
}

pub fn place_tooltip(document: &web::Document, client: Vec2) {
    if let Some(el) = dom::html_element(document, TOOLTIP_ID) {
        place_tooltip_el(&el, client);
    }
}

fn place_tooltip_el(el: &web::HtmlElement, client: Vec2) {
    let at = input::tooltip_anchor(client, TOOLTIP_OFFSET_PX);
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", at.x));
    let _ = style.set_property("top", &format!("{}px", at.y));
}

pub fn hide_tooltip(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOOLTIP_ID) {
        dom::set_visible(&el, false);
    }
}

// ---------------- Panel ----------------

pub fn render_panel(document: &web::Document, view: &PanelView) {
    let Some(panel) = document.get_element_by_id(PANEL_ID) else {
        return;
    };
    dom::set_visible(&panel, view.visible);
    if !view.visible {
        return;
    }
    dom::set_text(document, PANEL_ICON_ID, &view.icon);
    dom::set_text(document, PANEL_HEADING_ID, &view.heading);
    if let Some(body) = document.get_element_by_id(PANEL_BODY_ID) {
        body.set_inner_html(&markup::content_html(&view.body));
    }
    for tab in &view.tabs {
        let selector = markup::tab_selector(TAB_LIST_SELECTOR, tab.topic.as_str());
        let Ok(Some(el)) = document.query_selector(&selector) else {
            log::warn!("[panel] no tab button for {}", tab.topic.as_str());
            continue;
        };
        el.set_text_content(Some(&tab.label));
        let _ = el.class_list().toggle_with_force("active", tab.active);
        let _ = el.set_attribute("aria-selected", tab.aria_selected());
    }
}

pub fn tab_elements(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(TAB_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

// ---------------- Effects ----------------

/// Applies reducer effects to the DOM. The panel is redrawn at most once per
/// batch since its view already reflects the final state.
pub fn apply_effects(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: &SceneContext,
    effects: &[Effect],
) {
    let mut panel_dirty = false;
    for effect in effects {
        match effect {
            Effect::HighlightEnter(_) => dom::set_cursor(canvas, HOVER_CURSOR),
            Effect::HighlightExit(_) => dom::set_cursor(canvas, ""),
            Effect::ShowTooltip(id) => {
                let entity = scene.registry().get(*id);
                if let (Some(entity), Some(client)) = (entity, scene.pointer()) {
                    show_tooltip(document, entity.display_name(), client);
                }
            }
            Effect::HideTooltip => hide_tooltip(document),
            Effect::OpenPanel(_) | Effect::ClosePanel | Effect::RenderTab(_) => {
                panel_dirty = true;
            }
        }
    }
    if panel_dirty {
        render_panel(document, &scene.panel_view());
    }
}
