use folio_core::{SceneContext, SceneError};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_MS;
use crate::{dom, render, ui};

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneContext>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        // animate, then resolve hover against the moved entities
        let effects = {
            let mut scene = self.scene.borrow_mut();
            scene.resize(dom::canvas_rect(&self.canvas));
            scene.frame(dt)
        };
        let scene = self.scene.borrow();
        if !effects.is_empty() {
            ui::apply_effects(&self.document, &self.canvas, &scene, &effects);
        }
        if let Err(e) = self.gpu.render(scene.camera(), scene.registry()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Result<render::GpuState, SceneError> {
    render::GpuState::new(canvas)
        .await
        .map_err(|e| SceneError::SurfaceUnavailable(format!("{e:#}")))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
