use folio_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::keys::{action_for_key, KeyAction};
use crate::ui;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneContext>>,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if !scene.borrow().interaction().panel_open {
        return;
    }
    let effects = match action {
        KeyAction::Close => scene.borrow_mut().close(),
        KeyAction::Tab(n) => scene.borrow_mut().switch_tab_index(n),
    };
    if !effects.is_empty() {
        ev.prevent_default();
        ui::apply_effects(document, canvas, &scene.borrow(), &effects);
    }
}

pub fn wire_global_keydown(
    scene: Rc<RefCell<SceneContext>>,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &scene, &document, &canvas);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
