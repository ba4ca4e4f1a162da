#![cfg(target_arch = "wasm32")]
use folio_core::{scene, ContentStore, SceneContext};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod markup;
mod render;
mod ui;

use constants::{CANVAS_ID, FALLBACK_MESSAGE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    // Without a GPU surface the scene is never built
    let gpu = match frame::init_gpu(&canvas).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("WebGPU init error: {}", e);
            dom::show_fallback(&document, FALLBACK_MESSAGE);
            return Ok(());
        }
    };

    let registry = scene::bundled_registry()?;
    let content = ContentStore::bundled().unwrap_or_else(|e| {
        log::error!("[content] bundled content unreadable, panels will be empty: {}", e);
        ContentStore::default()
    });
    log::info!("[content] {} topics", content.len());

    let mut ctx = SceneContext::new(registry, content);
    ctx.resize(dom::canvas_rect(&canvas));
    let scene = Rc::new(RefCell::new(ctx));

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        scene: scene.clone(),
    });
    events::wire_global_keydown(scene.clone(), document.clone(), canvas.clone());
    events::wire_panel_controls(&document, &canvas, &scene);

    // start hidden until something is selected
    ui::render_panel(&document, &scene.borrow().panel_view());
    ui::hide_tooltip(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        document,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
