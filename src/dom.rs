use crate::constants::*;
use crate::markup::{ItemAttrs, StageAttrs};
use crate::style;
use anyhow::anyhow;
use orbit_core::{ItemPose, StageRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Hidden
}

#[inline]
pub fn measure(el: &web::Element) -> StageRect {
    let rect = el.get_bounding_client_rect();
    StageRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// All `HtmlElement`s in a node list; other node types are skipped.
fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_stages(document: &web::Document) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(STAGE_SELECTOR)
        .map_err(|e| anyhow!("query {}: {:?}", STAGE_SELECTOR, e))?;
    Ok(html_elements(list))
}

pub fn query_items(stage: &web::Element) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = stage
        .query_selector_all(ITEM_SELECTOR)
        .map_err(|e| anyhow!("query {}: {:?}", ITEM_SELECTOR, e))?;
    Ok(html_elements(list))
}

pub fn item_attrs(el: &web::HtmlElement) -> ItemAttrs {
    let ds = el.dataset();
    ItemAttrs {
        ring: ds.get(DATA_RING),
        index: ds.get(DATA_INDEX),
        count: ds.get(DATA_COUNT),
    }
}

pub fn stage_attrs(el: &web::HtmlElement) -> StageAttrs {
    let ds = el.dataset();
    StageAttrs {
        drag_sensitivity: ds.get(DATA_DRAG_SENSITIVITY),
        inertia_decay: ds.get(DATA_INERTIA_DECAY),
    }
}

/// One-time styling once the widget takes over from the static layout.
pub fn prepare_stage(stage: &web::HtmlElement, items: &[web::HtmlElement]) {
    _ = stage.style().set_property("touch-action", STAGE_TOUCH_ACTION);
    for item in items {
        let s = item.style();
        _ = s.set_property("left", ITEM_ANCHOR);
        _ = s.set_property("top", ITEM_ANCHOR);
    }
}

#[inline]
pub fn apply_pose(el: &web::HtmlElement, pose: &ItemPose) {
    let s = el.style();
    _ = s.set_property("transform", &style::transform_css(pose));
    _ = s.set_property("opacity", &style::opacity_css(pose));
    _ = s.set_property("z-index", &style::z_index_css(pose));
}
