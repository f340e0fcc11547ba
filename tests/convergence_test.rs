use bigholes::{Engine, PointCloud, SearchConfig, Strategy};

/// try cargo test --release
/// these tests are designed to be longish

fn grid_data(side: usize, dims: usize) -> PointCloud {
    let mut rows = Vec::new();
    let mut counter = vec![0usize; dims];
    loop {
        rows.push(counter.iter().map(|&c| c as f64).collect());
        let mut d = 0;
        loop {
            counter[d] += 1;
            if counter[d] < side {
                break;
            }
            counter[d] = 0;
            d += 1;
            if d == dims {
                return PointCloud::from_rows(&rows).unwrap();
            }
        }
    }
}

#[test]
fn top_mode_converges_and_writes_an_artifact() {
    let data = grid_data(5, 3);
    let engine = Engine::new(data, Strategy::Even, false).with_parallel(false);
    let tmp = std::env::temp_dir().join("bigholes_convergence_top_mode");
    std::fs::create_dir_all(&tmp).unwrap();

    let config = SearchConfig {
        maxitr: 50,
        threshold: None,
        verbose: false,
        output_dir: tmp.clone(),
    };

    let hof = engine.search(&config).unwrap();
    assert!(hof.len() >= 1);
    assert!(engine.artifact_path(&tmp).exists());
}

#[test]
fn threshold_mode_only_keeps_significant_rectangles() {
    let data = grid_data(6, 2);
    let engine = Engine::new(data, Strategy::Sequential, false).with_parallel(false);
    let tmp = std::env::temp_dir().join("bigholes_convergence_threshold_mode");
    std::fs::create_dir_all(&tmp).unwrap();

    let config = SearchConfig {
        maxitr: 50,
        threshold: Some(0.5),
        verbose: false,
        output_dir: tmp,
    };

    let hof = engine.search(&config).unwrap();
    // every entry is unique and over threshold by construction of HallOfFame::offer;
    // this just exercises the end-to-end wiring under threshold mode.
    let _ = hof.len();
}

#[test]
fn nonpositive_maxitr_is_rejected() {
    let data = grid_data(4, 2);
    let engine = Engine::new(data, Strategy::Random, false).with_parallel(false);
    let tmp = std::env::temp_dir().join("bigholes_convergence_rejects");
    std::fs::create_dir_all(&tmp).unwrap();

    let config = SearchConfig {
        maxitr: -3,
        threshold: None,
        verbose: false,
        output_dir: tmp,
    };

    assert!(engine.search(&config).is_err());
}
