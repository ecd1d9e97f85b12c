use orbit_core::{ItemSpec, OrbitConfig};

/// Raw `data-*` values read from one `.orbit-item`.
#[derive(Clone, Debug, Default)]
pub struct ItemAttrs {
    pub ring: Option<String>,
    pub index: Option<String>,
    pub count: Option<String>,
}

impl ItemAttrs {
    pub fn to_spec(&self) -> ItemSpec {
        ItemSpec::from_attrs(
            self.ring.as_deref(),
            self.index.as_deref(),
            self.count.as_deref(),
        )
    }
}

/// Raw `data-*` overrides read from the `.orbit-stage`.
#[derive(Clone, Debug, Default)]
pub struct StageAttrs {
    pub drag_sensitivity: Option<String>,
    pub inertia_decay: Option<String>,
}

impl StageAttrs {
    /// Apply whichever overrides parse and validate; anything else keeps
    /// the default so a typo in the template never disables the widget.
    pub fn to_config(&self) -> OrbitConfig {
        let mut config = OrbitConfig::default();
        if let Some(v) = parse_f64(self.drag_sensitivity.as_deref()) {
            let candidate = config.clone().with_drag_sensitivity(v);
            match candidate.validate() {
                Ok(()) => config = candidate,
                Err(e) => log::warn!("[orbit] ignoring data-drag-sensitivity: {}", e),
            }
        }
        if let Some(v) = parse_f64(self.inertia_decay.as_deref()) {
            let candidate = config.clone().with_inertia_decay(v);
            match candidate.validate() {
                Ok(()) => config = candidate,
                Err(e) => log::warn!("[orbit] ignoring data-inertia-decay: {}", e),
            }
        }
        config
    }
}

#[inline]
fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok()
}
