//! Sparse voxel scene storage

pub mod chunk;
pub mod loader;
pub mod store;
pub mod voxel;

pub use chunk::{Chunk, ChunkCoord};
pub use store::{ChunkStats, ChunkStore};
pub use voxel::{SceneVoxel, Voxel, scene_bounds};
