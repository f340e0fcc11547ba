//! Shared scalar and index aliases used across the engine.

/// All coordinates, bounds, and volumes are full double precision, matching the
/// tolerances (`1e-9`) the worked examples for this engine are held to.
pub type Scalar = f64;

/// An index into the point cloud (a row number).
pub type PointIndex = usize;

/// An index into a per-dimension projection table.
pub type ProjectionIndex = usize;

/// Which of the three randomized expansion procedures an [`crate::engine::Engine`] uses
/// to grow a seed into a maximal empty hyper-rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Expand one dimension at a time, fully, in a random dimension order.
    Sequential,
    /// Cycle dimensions in a fixed random order, nudging one face at a time.
    Even,
    /// Repeatedly burst-expand a randomly chosen (dimension, direction) pair.
    Random,
}

impl std::str::FromStr for Strategy {
    type Err = crate::errors::BigHolesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Strategy::Sequential),
            "even" => Ok(Strategy::Even),
            "random" => Ok(Strategy::Random),
            other => Err(crate::errors::BigHolesError::InvalidStrategy(other.to_string())),
        }
    }
}
