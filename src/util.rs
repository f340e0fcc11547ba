use crate::errors::{BigHolesError, Result};

/// If the test condition is false, return a DimensionMismatch error.
pub(crate) fn check_same_dimension(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(BigHolesError::DimensionMismatch { left, right })
    }
}

/// If the test condition is false, return an EmptyDataset error.
pub(crate) fn check_nonempty_dataset(points: usize, dims: usize) -> Result<()> {
    if points > 0 && dims > 0 {
        Ok(())
    } else {
        Err(BigHolesError::EmptyDataset { points, dims })
    }
}

/// If maxitr is not positive, return a NonPositiveIteration error.
pub(crate) fn check_positive_iteration(maxitr: i64) -> Result<()> {
    if maxitr > 0 {
        Ok(())
    } else {
        Err(BigHolesError::NonPositiveIteration(maxitr))
    }
}
