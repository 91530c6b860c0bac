//! Error types for the viewer

use thiserror::Error;

/// Main error type for the viewer
#[derive(Debug, Error)]
pub enum Error {
    #[error("light set capacity exceeded")]
    CapacityExceeded,

    #[error("light index {0} is out of range or protected")]
    InvalidIndex(usize),

    #[error("invalid voxel data: {0}")]
    InvalidVoxelData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
