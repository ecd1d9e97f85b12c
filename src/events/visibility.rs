use crate::dom;
use crate::frame::FrameLoop;
use crate::stage::OrbitStage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_visibility(
    document: &web::Document,
    stage: Rc<RefCell<OrbitStage>>,
    frames: FrameLoop,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if dom::is_hidden(&doc) {
            frames.cancel();
            let mut s = stage.borrow_mut();
            if let Some(id) = s.controller.pause() {
                if s.el.has_pointer_capture(id) {
                    _ = s.el.release_pointer_capture(id);
                }
            }
        } else if stage.borrow_mut().controller.resume() {
            frames.schedule();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
