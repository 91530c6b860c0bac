//! Voxel data types

use crate::core::types::{IVec3, Vec3};
use crate::math::Aabb;

/// A unit cube stored inside a chunk
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
    /// Chunk-local position, each component in `[0, CHUNK_SIZE)`
    pub position: IVec3,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// A voxel record in world coordinates, as produced by loaders and
/// generators and consumed by [`ChunkStore::load_voxels`].
///
/// [`ChunkStore::load_voxels`]: crate::voxel::ChunkStore::load_voxels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneVoxel {
    /// World position
    pub position: IVec3,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// Bounding box of a voxel set, treating each voxel as a unit cube
/// spanning `position` to `position + 1` on every axis.
/// Returns None for an empty set.
pub fn scene_bounds(voxels: &[SceneVoxel]) -> Option<Aabb> {
    let first = voxels.first()?;
    let mut bounds = Aabb::new(
        first.position.as_vec3(),
        first.position.as_vec3() + Vec3::ONE,
    );
    for voxel in &voxels[1..] {
        let min = voxel.position.as_vec3();
        bounds.expand(min);
        bounds.expand(min + Vec3::ONE);
    }
    Some(bounds)
}
