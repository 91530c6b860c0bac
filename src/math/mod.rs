//! Mathematical utilities and data structures

pub mod aabb;
pub mod coords;

pub use aabb::Aabb;
pub use coords::{CHUNK_SIZE, world_to_chunk, world_to_local};
