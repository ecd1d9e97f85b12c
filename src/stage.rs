use crate::dom;
use anyhow::Context;
use orbit_core::{InstantClock, ItemSpec, OrbitController};
use web_sys as web;

/// One mounted `.orbit-stage`: its elements plus the controller driving them.
pub struct OrbitStage {
    pub el: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    pub controller: OrbitController<InstantClock>,
}

impl OrbitStage {
    /// `Ok(None)` when the stage has no items; there is nothing to animate.
    pub fn build(el: web::HtmlElement) -> anyhow::Result<Option<Self>> {
        let items = dom::query_items(&el)?;
        if items.is_empty() {
            log::info!("[orbit] stage without items, leaving it static");
            return Ok(None);
        }
        let specs: Vec<ItemSpec> = items
            .iter()
            .map(|item| dom::item_attrs(item).to_spec())
            .collect();
        let config = dom::stage_attrs(&el).to_config();
        let rect = dom::measure(&el);
        let controller = OrbitController::new(config, &specs, rect, InstantClock::new())
            .context("building orbit controller")?;
        log::info!(
            "[orbit] mounted {} items on {:.0}x{:.0} stage",
            items.len(),
            rect.width,
            rect.height
        );
        Ok(Some(Self {
            el,
            items,
            controller,
        }))
    }

    pub fn prepare(&mut self) {
        dom::prepare_stage(&self.el, &self.items);
        self.relayout();
    }

    /// Advance one frame and write styles. No-op when not running.
    pub fn render(&mut self) {
        if let Some(poses) = self.controller.frame() {
            for (el, pose) in self.items.iter().zip(poses) {
                dom::apply_pose(el, pose);
            }
        }
    }

    /// Re-measure the stage and write styles for the current angles.
    pub fn relayout(&mut self) {
        let rect = dom::measure(&self.el);
        self.controller.set_stage(rect);
        for (el, pose) in self.items.iter().zip(self.controller.layout()) {
            dom::apply_pose(el, pose);
        }
    }
}
