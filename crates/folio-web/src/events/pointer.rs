use folio_core::SceneContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, ui};

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneContext>>,
}

#[inline]
fn client_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    // pointermove: record only, hover is resolved once per frame
    {
        let scene = w.scene.clone();
        let document = w.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let client = client_position(&ev);
            let mut s = scene.borrow_mut();
            s.pointer_moved(client);
            if s.interaction().hovered.is_some() {
                ui::place_tooltip(&document, client);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let scene = w.scene.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            scene.borrow_mut().pointer_left();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // click picks at the click position, not the last hover
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let document = w.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let effects = {
                let mut s = scene.borrow_mut();
                s.resize(dom::canvas_rect(&canvas));
                s.click(client_position(&ev))
            };
            if !effects.is_empty() {
                ui::apply_effects(&document, &canvas, &scene.borrow(), &effects);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
