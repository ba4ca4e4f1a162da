use folio_core::{SceneContext, TopicKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PANEL_CLOSE_ID;
use crate::{dom, ui};

/// Wires the panel's close button and its `data-topic` tab buttons.
pub fn wire_panel_controls(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<SceneContext>>,
) {
    {
        let scene = scene.clone();
        let doc = document.clone();
        let canvas = canvas.clone();
        dom::add_click_listener(document, PANEL_CLOSE_ID, move || {
            let effects = scene.borrow_mut().close();
            ui::apply_effects(&doc, &canvas, &scene.borrow(), &effects);
        });
    }

    let tabs = ui::tab_elements(document);
    if tabs.is_empty() {
        log::warn!("[panel] no tab buttons found");
    }
    for tab in tabs {
        let Some(topic) = tab.get_attribute("data-topic") else {
            continue;
        };
        let scene = scene.clone();
        let doc = document.clone();
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let effects = scene.borrow_mut().switch_tab(TopicKey::new(topic.as_str()));
            ui::apply_effects(&doc, &canvas, &scene.borrow(), &effects);
        }) as Box<dyn FnMut()>);
        let _ = tab.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
