use crate::dom;
use crate::input;
use crate::stage::OrbitStage;
use orbit_core::{PointerInput, PointerResponse};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Down is scoped to the stage; move/up/cancel listen on the window so a
/// drag that leaves the stage keeps tracking. The stage is measured on every
/// event since it can move without resizing.
pub fn wire_pointer_handlers(stage: &Rc<RefCell<OrbitStage>>) {
    let el = stage.borrow().el.clone();
    wire(&el, &el, "pointerdown", stage.clone(), input::down);
    if let Some(wnd) = web::window() {
        wire(&wnd, &el, "pointermove", stage.clone(), input::moved);
        wire(&wnd, &el, "pointerup", stage.clone(), input::up);
        wire(&wnd, &el, "pointercancel", stage.clone(), input::cancel);
    }
}

fn wire(
    target: &web::EventTarget,
    stage_el: &web::HtmlElement,
    event: &str,
    stage: Rc<RefCell<OrbitStage>>,
    to_input: fn(&web::PointerEvent) -> PointerInput,
) {
    let stage_el = stage_el.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::measure(&stage_el);
        let response = stage
            .borrow_mut()
            .controller
            .handle_pointer_at(rect, to_input(&ev));
        apply_response(&stage_el, &ev, response);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_response(el: &web::HtmlElement, ev: &web::PointerEvent, response: PointerResponse) {
    if let Some(id) = response.capture {
        _ = el.set_pointer_capture(id);
    }
    if let Some(id) = response.release {
        if el.has_pointer_capture(id) {
            _ = el.release_pointer_capture(id);
        }
    }
    if response.prevent_default {
        ev.prevent_default();
    }
}
