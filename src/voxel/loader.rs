//! JSON voxel ingestion
//!
//! Accepts documents of the form
//! `{ "voxels": [ { "x": 0, "y": 0, "z": 0, "color": [r, g, b] }, ... ] }`.
//! Coordinates are truncated to integers and color components clamped to
//! [0, 1], so downstream consumers never re-validate.

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, Vec3};
use crate::voxel::voxel::SceneVoxel;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct VoxelDocument {
    voxels: Vec<VoxelRecord>,
}

#[derive(Deserialize)]
struct VoxelRecord {
    x: f64,
    y: f64,
    z: f64,
    color: [f32; 3],
}

impl VoxelRecord {
    fn to_scene_voxel(&self) -> SceneVoxel {
        SceneVoxel {
            position: IVec3::new(self.x as i32, self.y as i32, self.z as i32),
            color: Vec3::new(
                self.color[0].clamp(0.0, 1.0),
                self.color[1].clamp(0.0, 1.0),
                self.color[2].clamp(0.0, 1.0),
            ),
        }
    }
}

/// Parse a voxel set from a JSON string
pub fn load_voxels_from_json(json: &str) -> Result<Vec<SceneVoxel>> {
    let doc: VoxelDocument =
        serde_json::from_str(json).map_err(|e| Error::InvalidVoxelData(e.to_string()))?;
    Ok(doc.voxels.iter().map(VoxelRecord::to_scene_voxel).collect())
}

/// Read and parse a voxel set from a JSON file
pub fn load_voxels_from_path(path: &Path) -> Result<Vec<SceneVoxel>> {
    let json = fs::read_to_string(path)?;
    let voxels = load_voxels_from_json(&json)?;
    log::info!("loaded {} voxels from {}", voxels.len(), path.display());
    Ok(voxels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_document() {
        let json = r#"{
            "voxels": [
                { "x": 1, "y": 2, "z": 3, "color": [0.1, 0.2, 0.3] },
                { "x": -4, "y": 0, "z": 0, "color": [1.0, 1.0, 1.0] }
            ]
        }"#;
        let voxels = load_voxels_from_json(json).unwrap();
        assert_eq!(voxels.len(), 2);
        assert_eq!(voxels[0].position, IVec3::new(1, 2, 3));
        assert_eq!(voxels[1].position, IVec3::new(-4, 0, 0));
        assert!((voxels[0].color - Vec3::new(0.1, 0.2, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_color_clamped_to_unit_range() {
        let json = r#"{ "voxels": [ { "x": 0, "y": 0, "z": 0, "color": [1.5, -0.2, 0.5] } ] }"#;
        let voxels = load_voxels_from_json(json).unwrap();
        assert_eq!(voxels[0].color, Vec3::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_fractional_coordinates_truncated() {
        let json = r#"{ "voxels": [ { "x": 1.9, "y": -1.9, "z": 0.2, "color": [0, 0, 0] } ] }"#;
        let voxels = load_voxels_from_json(json).unwrap();
        assert_eq!(voxels[0].position, IVec3::new(1, -1, 0));
    }

    #[test]
    fn test_empty_voxel_list() {
        let voxels = load_voxels_from_json(r#"{ "voxels": [] }"#).unwrap();
        assert!(voxels.is_empty());
    }

    #[test]
    fn test_malformed_document_errors() {
        assert!(load_voxels_from_json("not json").is_err());
        assert!(load_voxels_from_json(r#"{ "cubes": [] }"#).is_err());
        assert!(
            load_voxels_from_json(r#"{ "voxels": [ { "x": 0, "y": 0, "color": [0, 0, 0] } ] }"#)
                .is_err()
        );
        assert!(
            load_voxels_from_json(r#"{ "voxels": [ { "x": 0, "y": 0, "z": 0, "color": [0, 0] } ] }"#)
                .is_err()
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "voxels": [ {{ "x": 7, "y": 0, "z": -7, "color": [0.5, 0.5, 0.5] }} ] }}"#
        )
        .unwrap();

        let voxels = load_voxels_from_path(file.path()).unwrap();
        assert_eq!(voxels.len(), 1);
        assert_eq!(voxels[0].position, IVec3::new(7, 0, -7));
    }

    #[test]
    fn test_missing_file_errors() {
        let result = load_voxels_from_path(Path::new("/nonexistent/voxels.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
