//! Per-frame traversal emitting draw instructions for the whole scene

use crate::core::camera::OrbitCamera;
use crate::core::types::{Mat4, Vec3};
use crate::render::backend::DrawBackend;
use crate::render::lights::LightSet;
use crate::voxel::ChunkStore;

/// Scale of the cube drawn as a marker at each light position
const LIGHT_MARKER_SCALE: f32 = 0.5;

/// Per-frame counters exposed for observability
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Individual draw submissions issued this frame
    pub draw_calls: u32,
}

/// Emit one frame: push camera matrices and lights to the backend, then
/// walk every non-empty chunk issuing one draw per voxel, plus a scaled
/// marker cube per active light.
///
/// No batching or instancing: draw calls scale linearly with voxel
/// count, a deliberate ceiling of this design.
pub fn render_frame(
    store: &ChunkStore,
    camera: &OrbitCamera,
    lights: &LightSet,
    backend: &mut impl DrawBackend,
) -> FrameStats {
    backend.set_view_projection(&camera.view_matrix(), &camera.projection_matrix());

    let positions = lights.positions();
    backend.set_lights(&positions, positions.len() as u8);

    let mut stats = FrameStats::default();

    for chunk in store.visible_chunks() {
        let origin = chunk.coord.world_origin();
        for voxel in chunk.voxels() {
            let world = origin + voxel.position.as_vec3();
            backend.draw_unit_cube(&Mat4::from_translation(world), voxel.color);
            stats.draw_calls += 1;
        }
    }

    for light in lights.iter() {
        let model = Mat4::from_translation(light.position)
            * Mat4::from_scale(Vec3::splat(LIGHT_MARKER_SCALE));
        backend.draw_unit_cube(&model, light.color);
        stats.draw_calls += 1;
    }

    stats
}
