//! World / chunk / local coordinate conversions

use crate::core::types::IVec3;

/// Edge length of a cubic chunk in voxels
pub const CHUNK_SIZE: i32 = 16;

/// Map a world coordinate to the coordinate of the chunk that owns it.
///
/// Floor division, not truncation: world -1 lands in chunk -1, local 15.
pub fn world_to_chunk(world: IVec3) -> IVec3 {
    IVec3::new(
        world.x.div_euclid(CHUNK_SIZE),
        world.y.div_euclid(CHUNK_SIZE),
        world.z.div_euclid(CHUNK_SIZE),
    )
}

/// Map a world coordinate to its position inside the owning chunk.
///
/// Euclidean remainder keeps every component in `[0, CHUNK_SIZE)`
/// regardless of sign.
pub fn world_to_local(world: IVec3) -> IVec3 {
    IVec3::new(
        world.x.rem_euclid(CHUNK_SIZE),
        world.y.rem_euclid(CHUNK_SIZE),
        world.z.rem_euclid(CHUNK_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_coordinates() {
        let chunk = world_to_chunk(IVec3::new(-1, -16, -17));
        assert_eq!(chunk, IVec3::new(-1, -1, -2));

        let local = world_to_local(IVec3::new(-1, -16, -17));
        assert_eq!(local, IVec3::new(15, 0, 15));
    }

    #[test]
    fn test_chunk_local_identity() {
        // local == world - CHUNK_SIZE * chunk, and local in [0, CHUNK_SIZE)
        for n in [-17, -16, -1, 0, 1, 15, 16, 17] {
            let world = IVec3::splat(n);
            let chunk = world_to_chunk(world);
            let local = world_to_local(world);

            assert_eq!(local, world - chunk * CHUNK_SIZE, "n = {n}");
            assert!(local.x >= 0 && local.x < CHUNK_SIZE, "n = {n}");
        }
    }

    #[test]
    fn test_origin_chunk() {
        assert_eq!(world_to_chunk(IVec3::ZERO), IVec3::ZERO);
        assert_eq!(world_to_local(IVec3::ZERO), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(15, 15, 15)), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(16, 16, 16)), IVec3::ONE);
    }
}
