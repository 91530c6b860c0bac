//! Voxview - chunked sparse voxel scene viewer core

pub mod core;
pub mod generation;
pub mod math;
pub mod render;
pub mod voxel;
