//! Stage geometry, pointer angles and the ring projection.
//!
//! Radius convention: a ring's radius is a fraction of the stage's shorter
//! side and the same pixel radius is used on both axes, so rings stay
//! circular on non-square stages.

use crate::config::{DepthStyle, RingConfig};
use glam::Vec2;
use std::f64::consts::{PI, TAU};

/// Stage bounding box in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl StageRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect at the viewport origin, handy when only the size matters.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn shorter_side(&self) -> f64 {
        self.width.min(self.height).max(0.0)
    }
}

/// Angle of a client-space point around the stage centre.
#[inline]
pub fn pointer_angle(rect: &StageRect, x: f64, y: f64) -> f64 {
    let (cx, cy) = rect.center();
    (y - cy).atan2(x - cx)
}

/// Shortest signed rotation from `from` to `to`, in (−π, π].
#[inline]
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    let mut d = (to - from) % TAU;
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}

/// Everything the front-end writes for one item on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemPose {
    /// Pixels from the stage centre.
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl ItemPose {
    /// Stage-local position (top-left origin).
    pub fn absolute(&self, rect: &StageRect) -> Vec2 {
        Vec2::new(
            (rect.width * 0.5) as f32 + self.offset.x,
            (rect.height * 0.5) as f32 + self.offset.y,
        )
    }
}

/// Depth proxy in [-1, 1].
#[inline]
pub fn depth(angle: f64) -> f32 {
    angle.sin() as f32
}

pub fn project(angle: f64, ring: &RingConfig, rect: &StageRect, style: &DepthStyle) -> ItemPose {
    let radius_px = ring.radius * rect.shorter_side();
    let offset = Vec2::new(
        (angle.cos() * radius_px) as f32,
        (angle.sin() * radius_px) as f32,
    );
    let z = depth(angle);
    ItemPose {
        offset,
        scale: style.base_scale + style.scale_span * z,
        opacity: (style.base_opacity + style.opacity_span * z).clamp(0.0, 1.0),
        z_index: style.base_z_index + (style.z_index_span * z).round() as i32,
    }
}
