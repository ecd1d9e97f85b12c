//! Pointer drag state machine (Idle / Dragging).
//!
//! Transitions only consume [`PointerInput`] values and a timestamp, so any
//! event source (DOM pointer events, synthetic test sequences) can drive it.
//! Deltas are always taken against the last sample, which makes the machine
//! indifferent to how many moves arrive per frame.

use crate::geometry::{pointer_angle, shortest_angle_delta, StageRect};

pub type PointerId = i32;

/// Discrete pointer input in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { pointer_id: PointerId, x: f64, y: f64 },
    Move { pointer_id: PointerId, x: f64, y: f64 },
    Up { pointer_id: PointerId },
    Cancel { pointer_id: PointerId },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_id: PointerId,
        last_angle: f64,
        last_time: f64,
    },
}

/// Browser side effects the front-end should perform for an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    pub capture: Option<PointerId>,
    pub release: Option<PointerId>,
    pub prevent_default: bool,
}

/// What a transition does to the shared spin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragEffect {
    /// Added to the accumulated spin.
    pub spin_delta: f64,
    /// Replaces the angular velocity when set.
    pub velocity: Option<f64>,
}

#[derive(Clone, Copy, Debug)]
pub struct DragParams {
    pub sensitivity: f64,
    pub min_dt: f64,
    pub max_velocity: f64,
    pub release_hold: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one input. Returns the side effects for the host and the change
    /// to apply to spin and velocity.
    pub fn apply(
        &mut self,
        input: PointerInput,
        now: f64,
        rect: &StageRect,
        params: &DragParams,
    ) -> (PointerResponse, DragEffect) {
        match (self.state, input) {
            (DragState::Idle, PointerInput::Down { pointer_id, x, y }) => {
                self.state = DragState::Dragging {
                    pointer_id,
                    last_angle: pointer_angle(rect, x, y),
                    last_time: now,
                };
                log::debug!("[drag] start pointer={}", pointer_id);
                (
                    PointerResponse {
                        capture: Some(pointer_id),
                        release: None,
                        prevent_default: true,
                    },
                    DragEffect {
                        spin_delta: 0.0,
                        velocity: Some(0.0),
                    },
                )
            }
            (
                DragState::Dragging {
                    pointer_id: active,
                    last_angle,
                    last_time,
                },
                PointerInput::Move { pointer_id, x, y },
            ) if pointer_id == active => {
                let angle = pointer_angle(rect, x, y);
                let delta = shortest_angle_delta(last_angle, angle);
                let spin_delta = delta * params.sensitivity;
                let dt = (now - last_time).max(params.min_dt);
                let velocity =
                    (spin_delta / dt).clamp(-params.max_velocity, params.max_velocity);
                self.state = DragState::Dragging {
                    pointer_id: active,
                    last_angle: angle,
                    last_time: now,
                };
                (
                    PointerResponse {
                        prevent_default: true,
                        ..Default::default()
                    },
                    DragEffect {
                        spin_delta,
                        velocity: Some(velocity),
                    },
                )
            }
            (
                DragState::Dragging {
                    pointer_id: active,
                    last_time,
                    ..
                },
                PointerInput::Up { pointer_id } | PointerInput::Cancel { pointer_id },
            ) if pointer_id == active => {
                self.state = DragState::Idle;
                log::debug!("[drag] end pointer={}", pointer_id);
                // a pointer held still before release should not fling
                let velocity = (now - last_time >= params.release_hold).then_some(0.0);
                (
                    PointerResponse {
                        release: Some(pointer_id),
                        ..Default::default()
                    },
                    DragEffect {
                        spin_delta: 0.0,
                        velocity,
                    },
                )
            }
            _ => (PointerResponse::default(), DragEffect::default()),
        }
    }

    /// Drop any in-flight drag without touching spin, e.g. when the page is
    /// hidden mid-gesture and the pointer-up is never delivered.
    pub fn reset(&mut self) -> Option<PointerId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { pointer_id, .. } => Some(pointer_id),
            DragState::Idle => None,
        }
    }
}
