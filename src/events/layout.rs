use crate::stage::OrbitStage;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-measure on stage resize, window resize and page scroll. Pointer angles
/// use client coordinates, so a stage that moves without resizing still has
/// a new centre.
pub fn wire_layout_observers(stage: &Rc<RefCell<OrbitStage>>) -> anyhow::Result<()> {
    let stage_resize = stage.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        stage_resize.borrow_mut().relayout();
    }) as Box<dyn FnMut()>);
    let callback: &js_sys::Function = on_resize.as_ref().unchecked_ref();
    let observer =
        web::ResizeObserver::new(callback).map_err(|e| anyhow!("ResizeObserver: {:?}", e))?;
    observer.observe(&stage.borrow().el);
    on_resize.forget();

    let stage_moved = stage.clone();
    let on_move = Closure::wrap(Box::new(move || {
        stage_moved.borrow_mut().relayout();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        for event in ["scroll", "resize"] {
            _ = wnd.add_event_listener_with_callback(event, on_move.as_ref().unchecked_ref());
        }
    }
    on_move.forget();
    Ok(())
}
