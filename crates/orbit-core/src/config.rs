use crate::constants::*;
use crate::error::OrbitError;
use fnv::FnvHashMap;

/// One named circular path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    /// Fraction of the stage's shorter side.
    pub radius: f64,
    /// Auto-spin speed in rad/s.
    pub auto_speed: f64,
    /// Scales the shared drag spin for this ring. `None` means 1.0.
    pub drag_multiplier: Option<f64>,
}

impl RingConfig {
    pub const fn new(radius: f64, auto_speed: f64) -> Self {
        Self {
            radius,
            auto_speed,
            drag_multiplier: None,
        }
    }

    pub const fn with_drag_multiplier(mut self, multiplier: f64) -> Self {
        self.drag_multiplier = Some(multiplier);
        self
    }

    #[inline]
    pub fn spin_factor(&self) -> f64 {
        self.drag_multiplier.unwrap_or(1.0)
    }
}

/// Cosmetic parallax derived from the depth proxy `z = sin(angle)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStyle {
    pub base_scale: f32,
    pub scale_span: f32,
    pub base_opacity: f32,
    pub opacity_span: f32,
    pub base_z_index: i32,
    pub z_index_span: f32,
}

impl Default for DepthStyle {
    fn default() -> Self {
        Self {
            base_scale: BASE_SCALE,
            scale_span: SCALE_SPAN,
            base_opacity: BASE_OPACITY,
            opacity_span: OPACITY_SPAN,
            base_z_index: BASE_Z_INDEX,
            z_index_span: Z_INDEX_SPAN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitConfig {
    pub rings: FnvHashMap<String, RingConfig>,
    /// Ring used for items with no or an unrecognized ring name.
    pub fallback_ring: String,
    pub drag_sensitivity: f64,
    /// Velocity multiplier applied per reference frame, in (0, 1).
    pub inertia_decay: f64,
    pub min_velocity: f64,
    pub max_drag_velocity: f64,
    pub reference_frame_sec: f64,
    pub max_frame_dt: f64,
    pub min_drag_dt: f64,
    /// Releasing after holding still this long leaves no inertia.
    pub release_hold: f64,
    pub depth: DepthStyle,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let mut rings = FnvHashMap::default();
        rings.insert(
            "outer".to_string(),
            RingConfig::new(OUTER_RADIUS, OUTER_AUTO_SPEED),
        );
        rings.insert(
            "middle".to_string(),
            RingConfig::new(MIDDLE_RADIUS, MIDDLE_AUTO_SPEED),
        );
        rings.insert(
            "inner".to_string(),
            RingConfig::new(INNER_RADIUS, INNER_AUTO_SPEED)
                .with_drag_multiplier(INNER_DRAG_MULTIPLIER),
        );
        Self {
            rings,
            fallback_ring: FALLBACK_RING.to_string(),
            drag_sensitivity: DRAG_SENSITIVITY,
            inertia_decay: INERTIA_DECAY,
            min_velocity: MIN_VELOCITY,
            max_drag_velocity: MAX_DRAG_VELOCITY,
            reference_frame_sec: REFERENCE_FRAME_SEC,
            max_frame_dt: MAX_FRAME_DT_SEC,
            min_drag_dt: MIN_DRAG_DT_SEC,
            release_hold: RELEASE_HOLD_SEC,
            depth: DepthStyle::default(),
        }
    }
}

impl OrbitConfig {
    /// A config with no rings at all; callers add their own with [`with_ring`].
    ///
    /// [`with_ring`]: OrbitConfig::with_ring
    pub fn empty(fallback_ring: &str) -> Self {
        Self {
            rings: FnvHashMap::default(),
            fallback_ring: fallback_ring.to_string(),
            ..Self::default()
        }
    }

    pub fn with_ring(mut self, name: &str, ring: RingConfig) -> Self {
        self.rings.insert(name.to_string(), ring);
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_inertia_decay(mut self, decay: f64) -> Self {
        self.inertia_decay = decay;
        self
    }

    /// Whether `name` is one of the configured rings.
    pub fn has_ring(&self, name: &str) -> bool {
        self.rings.contains_key(name)
    }

    /// Resolve a ring name, falling back to the designated default ring.
    ///
    /// Callers must have run [`validate`](OrbitConfig::validate), which
    /// guarantees the fallback exists.
    pub fn ring(&self, name: &str) -> Option<&RingConfig> {
        self.rings
            .get(name)
            .or_else(|| self.rings.get(&self.fallback_ring))
    }

    /// Name the ring lookup actually lands on for `name`.
    pub fn resolve_ring_name<'a>(&'a self, name: Option<&'a str>) -> &'a str {
        match name {
            Some(n) if self.has_ring(n) => n,
            _ => &self.fallback_ring,
        }
    }

    pub fn validate(&self) -> Result<(), OrbitError> {
        if !self.has_ring(&self.fallback_ring) {
            return Err(OrbitError::UnknownFallbackRing(self.fallback_ring.clone()));
        }
        for (name, ring) in &self.rings {
            if !ring.radius.is_finite() || ring.radius < 0.0 {
                return Err(OrbitError::InvalidRing {
                    name: name.clone(),
                    reason: "radius must be finite and non-negative",
                });
            }
            if !ring.auto_speed.is_finite() || ring.auto_speed < 0.0 {
                return Err(OrbitError::InvalidRing {
                    name: name.clone(),
                    reason: "auto speed must be finite and non-negative",
                });
            }
            if !ring.spin_factor().is_finite() {
                return Err(OrbitError::InvalidRing {
                    name: name.clone(),
                    reason: "drag multiplier must be finite",
                });
            }
        }
        check_param("inertia_decay", self.inertia_decay, |v| v > 0.0 && v < 1.0)?;
        check_param("drag_sensitivity", self.drag_sensitivity, |v| v > 0.0)?;
        check_param("min_velocity", self.min_velocity, |v| v >= 0.0)?;
        check_param("max_drag_velocity", self.max_drag_velocity, |v| v > 0.0)?;
        check_param("reference_frame_sec", self.reference_frame_sec, |v| v > 0.0)?;
        check_param("max_frame_dt", self.max_frame_dt, |v| v > 0.0)?;
        check_param("min_drag_dt", self.min_drag_dt, |v| v > 0.0)?;
        check_param("release_hold", self.release_hold, |v| v > 0.0)?;
        Ok(())
    }
}

fn check_param(
    name: &'static str,
    value: f64,
    ok: impl Fn(f64) -> bool,
) -> Result<(), OrbitError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(OrbitError::InvalidParameter { name, value })
    }
}
