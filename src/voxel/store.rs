//! Chunk store: the spatial partition owning every voxel in the scene

use crate::core::types::{IVec3, Vec3};
use crate::math::world_to_local;
use crate::voxel::chunk::{Chunk, ChunkCoord};
use crate::voxel::voxel::SceneVoxel;
use std::collections::HashMap;

/// Aggregate counters over the whole partition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Chunks present in the store, empty ones included
    pub total_chunks: usize,
    /// Chunks holding at least one voxel
    pub non_empty_chunks: usize,
    /// Voxels across all chunks
    pub total_voxels: usize,
}

/// Container partitioning the voxel scene into fixed-size chunks,
/// keyed by integer chunk coordinate.
pub struct ChunkStore {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
        }
    }

    /// Get immutable reference to a chunk by coordinate
    pub fn get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Get mutable reference to a chunk by coordinate
    pub fn get_chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// Get the chunk at a coordinate, inserting an empty one if absent
    pub fn get_or_create_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_insert_with(|| Chunk::new(coord))
    }

    /// Insert a voxel at a world coordinate, creating its chunk on demand.
    /// The owning chunk is marked dirty.
    pub fn add_voxel(&mut self, world: IVec3, color: Vec3) {
        let coord = ChunkCoord::from_world(world);
        let local = world_to_local(world);
        self.get_or_create_chunk(coord).add_voxel(local, color);
    }

    /// Replace the entire store contents with the given voxel set.
    ///
    /// Full replace, not a merge: the new partition is built off to the
    /// side and swapped in, so the old scene stays intact until the new
    /// one is complete. An empty slice yields an empty store.
    pub fn load_voxels(&mut self, voxels: &[SceneVoxel]) {
        let mut fresh = ChunkStore::new();
        for voxel in voxels {
            fresh.add_voxel(voxel.position, voxel.color);
        }
        self.chunks = fresh.chunks;

        log::debug!(
            "loaded {} voxels into {} chunks",
            voxels.len(),
            self.chunks.len()
        );
    }

    /// All chunks holding at least one voxel.
    ///
    /// Every non-empty chunk is visible every frame; there is no frustum
    /// or distance culling in this partition.
    pub fn visible_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values().filter(|chunk| !chunk.is_empty())
    }

    /// Number of chunks in the store, empty ones included
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Walk the store and tally chunk/voxel counts
    pub fn stats(&self) -> ChunkStats {
        let mut stats = ChunkStats {
            total_chunks: self.chunks.len(),
            ..Default::default()
        };
        for chunk in self.chunks.values() {
            if !chunk.is_empty() {
                stats.non_empty_chunks += 1;
            }
            stats.total_voxels += chunk.voxel_count();
        }
        stats
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new()
    }
}
