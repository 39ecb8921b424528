#![cfg(target_arch = "wasm32")]
use crate::constants::{FAR_LAYER_ID, NEAR_LAYER_ID, REVEAL_LAYER_ID, SURFACE_ID};
use crate::core::{TrailConfig, TrailEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn html_layer(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if found.is_none() {
        log::info!("[dom] no #{} layer; skipping", id);
    }
    found
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let surface_el = document
        .get_element_by_id(SURFACE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SURFACE_ID))?;
    let surface: web::HtmlElement = surface_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} not an HtmlElement: {:?}", SURFACE_ID, e))?;

    let config = TrailConfig::default();
    let capacity = config.pool.capacity;
    let engine = Rc::new(RefCell::new(TrailEngine::new(config)?));
    log::info!(
        "[engine] pool capacity={} clock starts at {:.0}ms",
        capacity,
        engine.borrow().now_ms()
    );

    // Engine-owned SVG: contour backdrop behind, mask definition on top
    let (turbulence, pan) = dom::build_contour_backdrop(&document, &surface)?;
    let ellipses = dom::build_particle_mask(&document, &surface, capacity)?;

    // The reveal layer is unmasked until we point it at the particle mask
    if let Some(reveal) = html_layer(&document, REVEAL_LAYER_ID) {
        dom::apply_particle_mask(&reveal);
    }

    // Parallax layers, nearest first, matching the engine's layer order;
    // missing layers are tolerated (the trail still works without them)
    let layers: Vec<Option<web::HtmlElement>> = [NEAR_LAYER_ID, FAR_LAYER_ID]
        .iter()
        .map(|id| html_layer(&document, id))
        .collect();

    events::wire_pointermove(surface, engine.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine, ellipses, turbulence, pan, layers,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
