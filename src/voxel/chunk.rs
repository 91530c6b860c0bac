//! Chunks: fixed-size cubic regions of voxel space

use crate::core::types::{IVec3, Vec3};
use crate::math::{Aabb, CHUNK_SIZE, world_to_chunk};
use crate::voxel::voxel::Voxel;

/// Integer coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk owning the given world voxel coordinate
    pub fn from_world(world: IVec3) -> Self {
        let c = world_to_chunk(world);
        Self::new(c.x, c.y, c.z)
    }

    /// Get the world-space origin (minimum corner) of this chunk
    pub fn world_origin(&self) -> Vec3 {
        Vec3::new(
            (self.x * CHUNK_SIZE) as f32,
            (self.y * CHUNK_SIZE) as f32,
            (self.z * CHUNK_SIZE) as f32,
        )
    }
}

/// A chunk owning the voxels inside one 16^3 region of the world.
///
/// Voxels are stored with chunk-local coordinates; the `dirty` flag is
/// set on every mutation and consumed by backends that cache per-chunk
/// geometry.
pub struct Chunk {
    /// Coordinate of this chunk in the world grid
    pub coord: ChunkCoord,
    /// Whether this chunk changed since a backend last rebuilt its geometry
    pub dirty: bool,
    voxels: Vec<Voxel>,
}

impl Chunk {
    /// Create a new empty chunk at the given coordinate
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            dirty: true,
            voxels: Vec::new(),
        }
    }

    /// Append a voxel at a chunk-local position and mark the chunk dirty.
    /// Local coordinates must already be in `[0, CHUNK_SIZE)`.
    pub fn add_voxel(&mut self, local: IVec3, color: Vec3) {
        debug_assert!(local.cmpge(IVec3::ZERO).all());
        debug_assert!(local.cmplt(IVec3::splat(CHUNK_SIZE)).all());
        self.voxels.push(Voxel {
            position: local,
            color,
        });
        self.dirty = true;
    }

    /// Voxels owned by this chunk, in insertion order
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Number of voxels in this chunk
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// Whether this chunk holds no voxels
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Get the world-space bounding box for this chunk
    pub fn world_bounds(&self) -> Aabb {
        let origin = self.coord.world_origin();
        Aabb::new(origin, origin + Vec3::splat(CHUNK_SIZE as f32))
    }
}
