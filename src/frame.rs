use crate::stage::OrbitStage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop for one stage. Pausing cancels the pending
/// callback; the controller state is untouched.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(stage: Rc<RefCell<OrbitStage>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_inner = tick.clone();
        let pending_inner = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_inner.set(None);
            let again = {
                let mut s = stage.borrow_mut();
                s.render();
                s.controller.needs_frame()
            };
            if again {
                request(&tick_inner, &pending_inner);
            }
        }) as Box<dyn FnMut()>));

        Self { tick, pending }
    }

    pub fn schedule(&self) {
        request(&self.tick, &self.pending);
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request(tick: &Tick, pending: &Cell<Option<i32>>) {
    if pending.get().is_some() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
