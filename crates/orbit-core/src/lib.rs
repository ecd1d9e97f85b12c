//! Motion model for the landing page orbit widget.
//!
//! Platform-free: the web front-end feeds it pointer input, stage geometry
//! and frame ticks, and writes the resulting [`ItemPose`]s to the DOM.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod item;

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use drag::*;
pub use error::*;
pub use geometry::*;
pub use item::*;
