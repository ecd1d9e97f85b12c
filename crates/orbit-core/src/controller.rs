//! The orbit motion controller.
//!
//! Every rendered angle follows
//! `base + elapsed × ring.auto_speed + spin × ring.spin_factor()`, where
//! `elapsed` only advances while no drag is in progress and `spin` collects
//! drag deltas plus decaying inertia.

use crate::clock::{Clock, InstantClock};
use crate::config::OrbitConfig;
use crate::drag::{DragParams, DragTracker, PointerId, PointerInput, PointerResponse};
use crate::error::OrbitError;
use crate::geometry::{project, ItemPose, StageRect};
use crate::item::{build_items, ItemSpec, OrbitItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Built but not started.
    Idle,
    Running,
    /// Page hidden; state kept, no frames.
    Paused,
    /// Reduced motion requested; never animates.
    Disabled,
}

pub struct OrbitController<C: Clock = InstantClock> {
    config: OrbitConfig,
    items: Vec<OrbitItem>,
    poses: Vec<ItemPose>,
    stage: StageRect,
    clock: C,
    drag: DragTracker,
    run_state: RunState,
    elapsed: f64,
    spin: f64,
    velocity: f64,
    last_frame: Option<f64>,
}

impl<C: Clock> OrbitController<C> {
    pub fn new(
        config: OrbitConfig,
        specs: &[ItemSpec],
        stage: StageRect,
        clock: C,
    ) -> Result<Self, OrbitError> {
        config.validate()?;
        if specs.is_empty() {
            return Err(OrbitError::NoItems);
        }
        let items = build_items(&config, specs);
        let mut controller = Self {
            poses: vec![ItemPose::default(); items.len()],
            config,
            items,
            stage,
            clock,
            drag: DragTracker::default(),
            run_state: RunState::Idle,
            elapsed: 0.0,
            spin: 0.0,
            velocity: 0.0,
            last_frame: None,
        };
        controller.update_angles();
        controller.update_poses();
        Ok(controller)
    }

    /// Begin animating unless the platform asked for reduced motion.
    /// Returns whether frames should be scheduled.
    pub fn start(&mut self, reduced_motion: bool) -> bool {
        if self.run_state != RunState::Idle {
            return self.needs_frame();
        }
        if reduced_motion {
            self.run_state = RunState::Disabled;
            log::info!("[orbit] reduced motion requested, not animating");
            return false;
        }
        self.run_state = RunState::Running;
        self.last_frame = Some(self.clock.now_sec());
        log::debug!("[orbit] started with {} items", self.items.len());
        true
    }

    /// Stop frames. Returns the pointer of a drag in flight, which the host
    /// should release since its pointer-up may never arrive.
    pub fn pause(&mut self) -> Option<PointerId> {
        if self.run_state != RunState::Running {
            return None;
        }
        self.run_state = RunState::Paused;
        log::debug!("[orbit] paused");
        self.drag.reset()
    }

    /// Resume after a pause. The time baseline restarts now, so the hidden
    /// interval is never replayed.
    pub fn resume(&mut self) -> bool {
        if self.run_state == RunState::Paused {
            self.run_state = RunState::Running;
            self.last_frame = Some(self.clock.now_sec());
            log::debug!("[orbit] resumed");
        }
        self.needs_frame()
    }

    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Advance one display frame. Returns the new poses, or `None` when the
    /// controller is not running.
    pub fn frame(&mut self) -> Option<&[ItemPose]> {
        if self.run_state != RunState::Running {
            return None;
        }
        let now = self.clock.now_sec();
        let dt = match self.last_frame {
            Some(prev) => (now - prev).clamp(0.0, self.config.max_frame_dt),
            None => self.config.reference_frame_sec,
        };
        self.last_frame = Some(now);
        self.step(dt);
        self.update_angles();
        self.update_poses();
        Some(&self.poses)
    }

    fn step(&mut self, dt: f64) {
        if self.drag.is_dragging() {
            return;
        }
        self.elapsed += dt;
        if self.velocity != 0.0 {
            let frames = dt / self.config.reference_frame_sec;
            self.velocity *= self.config.inertia_decay.powf(frames);
            if self.velocity.abs() < self.config.min_velocity {
                self.velocity = 0.0;
            }
            self.spin += self.velocity * dt;
        }
    }

    /// Recompute poses for the current angles without advancing time.
    pub fn layout(&mut self) -> &[ItemPose] {
        self.update_poses();
        &self.poses
    }

    pub fn set_stage(&mut self, stage: StageRect) {
        self.stage = stage;
    }

    /// Like [`handle_pointer`](Self::handle_pointer), with the stage
    /// re-measured at the moment of the event. A stage can move without
    /// changing size, so its centre must be fresh for every pointer angle.
    pub fn handle_pointer_at(
        &mut self,
        stage: StageRect,
        input: PointerInput,
    ) -> PointerResponse {
        self.set_stage(stage);
        self.handle_pointer(input)
    }

    pub fn handle_pointer(&mut self, input: PointerInput) -> PointerResponse {
        if self.run_state != RunState::Running {
            return PointerResponse::default();
        }
        let params = DragParams {
            sensitivity: self.config.drag_sensitivity,
            min_dt: self.config.min_drag_dt,
            max_velocity: self.config.max_drag_velocity,
            release_hold: self.config.release_hold,
        };
        let now = self.clock.now_sec();
        let (response, effect) = self.drag.apply(input, now, &self.stage, &params);
        if effect.spin_delta != 0.0 {
            self.spin += effect.spin_delta;
            self.update_angles();
        }
        if let Some(v) = effect.velocity {
            self.velocity = v;
        }
        response
    }

    fn update_angles(&mut self) {
        for item in &mut self.items {
            if let Some(ring) = self.config.ring(&item.ring) {
                item.angle = item.base_angle
                    + self.elapsed * ring.auto_speed
                    + self.spin * ring.spin_factor();
            }
        }
    }

    fn update_poses(&mut self) {
        for (item, pose) in self.items.iter().zip(self.poses.iter_mut()) {
            if let Some(ring) = self.config.ring(&item.ring) {
                *pose = project(item.angle, ring, &self.stage, &self.config.depth);
            }
        }
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }

    pub fn poses(&self) -> &[ItemPose] {
        &self.poses
    }

    pub fn angle_of(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|i| i.angle)
    }

    pub fn stage(&self) -> &StageRect {
        &self.stage
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }
}
