//! Abstract draw backend consumed by the frame traversal

use crate::core::types::{Mat4, Vec3};

/// Sink for the draw instructions emitted during one frame.
///
/// The traversal never touches pixels, buffers, or shader programs;
/// a GPU implementation of this trait owns all of that.
pub trait DrawBackend {
    /// Upload the view and projection matrices for the frame
    fn set_view_projection(&mut self, view: &Mat4, projection: &Mat4);

    /// Upload the active light positions. Entries beyond `count` are
    /// not required to be stable.
    fn set_lights(&mut self, positions: &[Vec3], count: u8);

    /// Draw one unit cube with the given model transform and RGB color
    fn draw_unit_cube(&mut self, model: &Mat4, color: Vec3);
}

/// A single recorded draw submission
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedDraw {
    pub model: Mat4,
    pub color: Vec3,
}

/// Backend that records every call instead of touching a GPU.
/// Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub view: Mat4,
    pub projection: Mat4,
    pub light_positions: Vec<Vec3>,
    pub light_count: u8,
    pub draws: Vec<RecordedDraw>,
}

impl RecordingBackend {
    /// Create a new backend with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the draws recorded for the previous frame
    pub fn begin_frame(&mut self) {
        self.draws.clear();
    }
}

impl DrawBackend for RecordingBackend {
    fn set_view_projection(&mut self, view: &Mat4, projection: &Mat4) {
        self.view = *view;
        self.projection = *projection;
    }

    fn set_lights(&mut self, positions: &[Vec3], count: u8) {
        self.light_positions = positions.to_vec();
        self.light_count = count;
    }

    fn draw_unit_cube(&mut self, model: &Mat4, color: Vec3) {
        self.draws.push(RecordedDraw {
            model: *model,
            color,
        });
    }
}
