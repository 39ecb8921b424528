use crate::core::{SurfaceRect, TrailEngine};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn surface_rect(el: &web::Element) -> SurfaceRect {
    let rect = el.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Forward `pointermove` on the interactive surface into the dispatcher.
/// Throttling happens inside the engine against its own clock, so the
/// listener itself stays dumb.
pub fn wire_pointermove(surface: web::HtmlElement, engine: Rc<RefCell<TrailEngine>>) {
    let surface_for_rect = surface.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = surface_rect(&surface_for_rect);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        engine.borrow_mut().pointer_moved(client, rect);
    }) as Box<dyn FnMut(_)>);
    _ = surface.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
