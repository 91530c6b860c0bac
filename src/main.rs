//! Headless demo: build a scene, frame the camera, run a few frames
//! against the recording backend, and log what a GPU backend would draw.
//!
//! Usage: `voxview [scene.json]`. Without an argument a generated flat
//! plane is shown; `--forest` selects the demo forest.

use std::path::Path;
use voxview::core::camera::OrbitCamera;
use voxview::core::logging;
use voxview::core::types::{Result, Vec3};
use voxview::generation;
use voxview::render::{LightSet, RecordingBackend, render_frame};
use voxview::voxel::{ChunkStore, loader};

fn main() -> Result<()> {
    logging::init();

    let voxels = match std::env::args().nth(1).as_deref() {
        Some("--forest") => generation::forest(),
        Some(path) => loader::load_voxels_from_path(Path::new(path))?,
        None => generation::flat_plane(),
    };

    let mut store = ChunkStore::new();
    store.load_voxels(&voxels);
    let stats = store.stats();
    log::info!(
        "scene: {} voxels in {} chunks ({} non-empty)",
        stats.total_voxels,
        stats.total_chunks,
        stats.non_empty_chunks
    );

    let mut camera = OrbitCamera::new();
    camera.set_aspect(1280.0, 720.0);
    camera.frame_voxels(&voxels);
    log::info!(
        "camera framed at target {:?}, distance {:.1}",
        camera.target,
        camera.distance()
    );

    let mut lights = LightSet::new();
    lights.add(Vec3::new(-12.0, 8.0, -6.0), Vec3::new(0.4, 0.5, 1.0))?;

    let mut backend = RecordingBackend::new();
    for frame in 0..3 {
        backend.begin_frame();
        // Simulate a slow orbit drag between frames
        camera.rotate(24.0, 0.0);
        let frame_stats = render_frame(&store, &camera, &lights, &mut backend);
        log::info!("frame {frame}: {} draw calls", frame_stats.draw_calls);
    }

    Ok(())
}
