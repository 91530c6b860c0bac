//! Procedural demo worlds
//!
//! Producers of voxel data for the viewer; the core consumes their
//! output through the same path as loaded scenes.

use crate::core::types::{IVec3, Vec3};
use crate::voxel::SceneVoxel;

/// 16x16 gray plane at y = 0, centered on the origin
pub fn flat_plane() -> Vec<SceneVoxel> {
    let mut voxels = Vec::with_capacity(256);
    for z in -8..8 {
        for x in -8..8 {
            voxels.push(SceneVoxel {
                position: IVec3::new(x, 0, z),
                color: Vec3::splat(0.5),
            });
        }
    }
    voxels
}

/// Grass ground with a regular grid of simple trees. Deterministic.
pub fn forest() -> Vec<SceneVoxel> {
    let mut voxels = Vec::new();

    let ground = Vec3::new(0.25, 0.45, 0.2);
    for z in -16..16 {
        for x in -16..16 {
            voxels.push(SceneVoxel {
                position: IVec3::new(x, 0, z),
                color: ground,
            });
        }
    }

    for tz in (-12..=12).step_by(8) {
        for tx in (-12..=12).step_by(8) {
            add_tree(&mut voxels, tx, tz);
        }
    }

    voxels
}

fn add_tree(voxels: &mut Vec<SceneVoxel>, x: i32, z: i32) {
    let trunk = Vec3::new(0.4, 0.26, 0.12);
    for y in 1..=4 {
        voxels.push(SceneVoxel {
            position: IVec3::new(x, y, z),
            color: trunk,
        });
    }

    let leaves = Vec3::new(0.12, 0.55, 0.16);
    for dy in 0..2 {
        for dz in -1..=1 {
            for dx in -1..=1 {
                // Taper the crown to a single voxel on top
                if dy == 1 && (dx != 0 || dz != 0) {
                    continue;
                }
                voxels.push(SceneVoxel {
                    position: IVec3::new(x + dx, 5 + dy, z + dz),
                    color: leaves,
                });
            }
        }
    }
}
