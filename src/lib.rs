#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod stage;
mod style;

use frame::FrameLoop;
use stage::OrbitStage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    // Failures stay in the console; the page keeps its static layout.
    if let Err(e) = mount_all() {
        log::warn!("orbit disabled: {:?}", e);
    }
    Ok(())
}

fn mount_all() -> anyhow::Result<()> {
    let Some((window, document)) = dom::window_document() else {
        return Ok(());
    };
    let stages = dom::query_stages(&document)?;
    if stages.is_empty() {
        log::info!("[orbit] no stage on this page");
        return Ok(());
    }
    let reduced_motion = dom::prefers_reduced_motion(&window);
    for el in stages {
        if let Err(e) = mount(&document, el, reduced_motion) {
            log::warn!("[orbit] stage skipped: {:?}", e);
        }
    }
    Ok(())
}

fn mount(
    document: &web::Document,
    el: web::HtmlElement,
    reduced_motion: bool,
) -> anyhow::Result<()> {
    let Some(stage) = OrbitStage::build(el)? else {
        return Ok(());
    };
    let stage = Rc::new(RefCell::new(stage));
    // Reduced motion: leave the static fallback layout untouched.
    if !stage.borrow_mut().controller.start(reduced_motion) {
        return Ok(());
    }
    stage.borrow_mut().prepare();

    let frames = FrameLoop::new(stage.clone());
    events::wire_pointer_handlers(&stage);
    events::wire_layout_observers(&stage)?;
    events::wire_visibility(document, stage.clone(), frames.clone());

    if dom::is_hidden(document) {
        _ = stage.borrow_mut().controller.pause();
    } else {
        frames.schedule();
    }
    Ok(())
}
