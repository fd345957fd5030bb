use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid geometry: {width}x{height} (both sides must be positive and finite)")]
    InvalidGeometry { width: f64, height: f64 },
    #[error("Invalid radius policy: inner ratio {inner_ratio}, outer ratio {outer_ratio}")]
    InvalidRadiusPolicy { inner_ratio: f64, outer_ratio: f64 },
    #[error("Rotation must be finite, got {0}")]
    InvalidRotation(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error("Entry index {index} out of range (menu has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
