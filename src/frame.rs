use crate::core::{MaskEllipse, TrailEngine};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame driver touches: the engine plus the DOM nodes
/// whose attributes it rewrites each tick.
pub struct FrameContext {
    pub engine: Rc<RefCell<TrailEngine>>,
    /// Mask ellipses in pool-slot order.
    pub ellipses: Vec<web::Element>,
    /// `feTurbulence` node (breathing base frequency).
    pub turbulence: web::Element,
    /// `feOffset` node (drift pan).
    pub pan: web::Element,
    /// Parallax layers, positionally matching the engine's configured
    /// layers; `None` where the host page omits one.
    pub layers: Vec<Option<web::HtmlElement>>,
    pub last_instant: Instant,
    mask_buf: Vec<MaskEllipse>,
}

impl FrameContext {
    pub fn new(
        engine: Rc<RefCell<TrailEngine>>,
        ellipses: Vec<web::Element>,
        turbulence: web::Element,
        pan: web::Element,
        layers: Vec<Option<web::HtmlElement>>,
    ) -> Self {
        Self {
            engine,
            ellipses,
            turbulence,
            pan,
            layers,
            last_instant: Instant::now(),
            mask_buf: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() * 1000.0;

        let mut engine = self.engine.borrow_mut();
        engine.tick(dt_ms);

        // Mask: one attribute pass per slot
        engine.compose_mask_into(&mut self.mask_buf);
        for (el, e) in self.ellipses.iter().zip(&self.mask_buf) {
            dom::set_attr(el, "cx", &format!("{:.2}", e.center_x));
            dom::set_attr(el, "cy", &format!("{:.2}", e.center_y));
            dom::set_attr(el, "rx", &format!("{:.2}", e.radius_x));
            dom::set_attr(el, "ry", &format!("{:.2}", e.radius_y));
            dom::set_attr(el, "transform", &e.rotation_transform());
        }

        // Contour drift/breathing
        let np = engine.noise_params();
        dom::set_attr(
            &self.turbulence,
            "baseFrequency",
            &format!("{:.5}", np.base_frequency),
        );
        dom::set_attr(&self.pan, "dx", &format!("{:.2}", np.offset_x));
        dom::set_attr(&self.pan, "dy", &format!("{:.2}", np.offset_y));

        // Layer parallax
        for (layer, offset) in self.layers.iter().zip(engine.parallax()) {
            if let Some(layer) = layer {
                let style = layer.style();
                _ = style.set_property(
                    "transform",
                    &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
                );
            }
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
