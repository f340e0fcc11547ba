//! Finds **maximal empty hyper-rectangles (MEHRs)** in a high-dimensional point
//! cloud: axis-aligned boxes that contain no data points in their interior and
//! cannot be enlarged along any axis without swallowing a point or exceeding the
//! data's bounding box. Such holes identify under-represented regions of a
//! feature space — useful for anomaly generation, data-coverage audits, and
//! active-learning sampling.
//!
//! This crate is a Monte-Carlo heuristic, not an enumerator: the search space of
//! MEHRs is exponential in dimension, so [`Engine::search`] reports the largest
//! (or most significant) instances it observes within a patience budget, rather
//! than proving any are globally maximal.
//!
//! ```ignore
//! use bigholes::{Engine, PointCloud, SearchConfig, Strategy};
//!
//! let data = PointCloud::from_rows(&rows)?;
//! let engine = Engine::new(data, Strategy::Even, false);
//! let hof = engine.search(&SearchConfig {
//!     maxitr: 5_000,
//!     threshold: None,
//!     verbose: true,
//!     output_dir: "./out".into(),
//! })?;
//! ```

mod data;
mod engine;
mod errors;
mod expansion;
mod hall_of_fame;
mod index;
#[cfg(feature = "plotting")]
mod plot;
mod rectangle;
mod seed;
mod types;
mod util;

pub use data::PointCloud;
pub use engine::{Engine, SearchConfig};
pub use errors::{BigHolesError, Result};
pub use hall_of_fame::{HallOfFame, HallOfFameArtifact, RectangleRecord};
pub use rectangle::HyperRectangle;
pub use types::{PointIndex, Scalar, Strategy};

#[cfg(feature = "plotting")]
pub use plot::plot_rectangle;
