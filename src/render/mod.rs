//! Frame rendering: draw backend contract, light set, per-frame traversal

pub mod backend;
pub mod frame;
pub mod lights;

pub use backend::{DrawBackend, RecordingBackend};
pub use frame::{FrameStats, render_frame};
pub use lights::{Light, LightSet, MAX_LIGHTS};
