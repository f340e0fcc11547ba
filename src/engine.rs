//! The parallel outer search loop: batched seed-and-expand dispatch across a
//! worker pool, admission/deduplication bookkeeping, convergence, and periodic
//! persistence of the Hall of Fame.

use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::data::PointCloud;
use crate::errors::{BigHolesError, Result};
use crate::expansion;
use crate::hall_of_fame::HallOfFame;
use crate::index::Index;
use crate::rectangle::HyperRectangle;
use crate::seed::random_seed;
use crate::types::{Scalar, Strategy};
use crate::util::check_positive_iteration;

/// Parameters to a single search call.
pub struct SearchConfig {
    /// The driver stops after this many consecutive non-contributing trials.
    pub maxitr: i64,
    /// `Some` for threshold mode (collect every rectangle over this volume),
    /// `None` for top mode (track a monotone-increasing best-volume record).
    pub threshold: Option<Scalar>,
    /// Emit a status line after each batch.
    pub verbose: bool,
    /// Directory the Hall of Fame artifact is written into after every batch.
    pub output_dir: PathBuf,
}

/// Owns the point cloud and projection index for the lifetime of the search
/// campaign; both are read-only and shared by reference across worker threads
/// for every batch dispatched by [`Engine::search`].
pub struct Engine {
    data: PointCloud,
    index: Index,
    strategy: Strategy,
    interior_only: bool,
    parallel: bool,
    timestamp: String,
}

impl Engine {
    /// Build the engine: validates `data` is non-empty (via [`PointCloud`]) and
    /// constructs the projection index once, up front.
    pub fn new(data: PointCloud, strategy: Strategy, interior_only: bool) -> Self {
        let index = Index::build(&data);
        info!(
            "built projection index over {} points in {} dimensions",
            data.n(),
            data.k()
        );
        Engine {
            data,
            index,
            strategy,
            interior_only,
            parallel: true,
            timestamp: Local::now().format("%Y-%m-%d_%H:%M:%S%.f").to_string(),
        }
    }

    /// Toggle the rayon-backed parallel worker pool off, e.g. for deterministic
    /// single-threaded tests. Parallel by default.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The path the Hall of Fame artifact is written to for a search rooted at
    /// `output_dir`, embedding this engine's construction-time timestamp.
    pub fn artifact_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("MEHRS_{}.json", self.timestamp))
    }

    /// One seed-and-expand task. Each task reseeds its RNG from OS entropy so
    /// independent tasks — even ones dispatched to the same worker thread in
    /// sequence — never share a random sequence.
    fn find_one(&self) -> (HyperRectangle, bool) {
        let mut rng = ChaCha20Rng::from_entropy();
        let seed = random_seed(&self.index, &mut rng);
        expansion::expand(
            self.strategy,
            seed,
            &self.index,
            &self.data,
            self.interior_only,
            &mut rng,
        )
    }

    /// Run the batched search loop until `maxitr` consecutive trials fail to
    /// contribute a new admissible rectangle, persisting the Hall of Fame after
    /// every batch.
    pub fn search(&self, config: &SearchConfig) -> Result<HallOfFame> {
        check_positive_iteration(config.maxitr)?;

        let mut hof = match config.threshold {
            Some(t) => HallOfFame::threshold(t),
            None => HallOfFame::top(),
        };

        let workers = if self.parallel {
            rayon::current_num_threads()
        } else {
            1
        };
        let path = self.artifact_path(&config.output_dir);

        let mut c: i64 = 0;
        let mut hof_sizes: Vec<usize> = Vec::new();

        while c < config.maxitr {
            let batch_size = (config.maxitr - c).min(10 * workers as i64) as usize;

            let results: Vec<(HyperRectangle, bool)> = if self.parallel {
                (0..batch_size)
                    .into_par_iter()
                    .map(|_| self.find_one())
                    .collect()
            } else {
                (0..batch_size).map(|_| self.find_one()).collect()
            };

            let mut exterior = 0usize;
            for (rect, interior) in results {
                if !interior {
                    exterior += 1;
                }
                let admissible = interior || !self.interior_only;
                let volume = rect.volume();

                if admissible && hof.offer(rect, volume) {
                    c = 0;
                } else {
                    c += 1;
                }
            }

            hof_sizes.push(hof.len());
            if config.verbose {
                let tail_start = hof_sizes.len().saturating_sub(10);
                info!(
                    "c={} maxitr={} %exterior={:.1} last_hof_sizes={:?} total_batches={}",
                    c,
                    config.maxitr,
                    100.0 * exterior as f64 / batch_size as f64,
                    &hof_sizes[tail_start..],
                    hof_sizes.len()
                );
            }

            persist(&hof, &path)?;
        }

        Ok(hof)
    }
}

fn persist(hof: &HallOfFame, path: &Path) -> Result<()> {
    let artifact = hof.to_artifact();
    let json = serde_json::to_vec_pretty(&artifact).map_err(|e| BigHolesError::PersistenceFailure {
        path: path.display().to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, e),
    })?;
    std::fs::write(path, json).map_err(|e| BigHolesError::PersistenceFailure {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_data() -> PointCloud {
        let mut rows = Vec::new();
        for x in 0..6 {
            for y in 0..6 {
                rows.push(vec![x as f64, y as f64]);
            }
        }
        PointCloud::from_rows(&rows).unwrap()
    }

    #[test]
    fn rejects_nonpositive_maxitr() {
        let engine = Engine::new(grid_data(), Strategy::Even, false).with_parallel(false);
        let tmp = std::env::temp_dir().join("bigholes_test_rejects_nonpositive_maxitr");
        std::fs::create_dir_all(&tmp).unwrap();
        let config = SearchConfig {
            maxitr: 0,
            threshold: None,
            verbose: false,
            output_dir: tmp,
        };
        assert!(matches!(
            engine.search(&config),
            Err(BigHolesError::NonPositiveIteration(0))
        ));
    }

    #[test]
    fn converges_and_persists_an_artifact() {
        let engine = Engine::new(grid_data(), Strategy::Even, false).with_parallel(false);
        let tmp = std::env::temp_dir().join("bigholes_test_converges_and_persists_an_artifact");
        std::fs::create_dir_all(&tmp).unwrap();
        let config = SearchConfig {
            maxitr: 20,
            threshold: None,
            verbose: false,
            output_dir: tmp.clone(),
        };

        let hof = engine.search(&config).unwrap();
        assert!(hof.len() >= 1);
        assert!(engine.artifact_path(&tmp).exists());
    }
}
