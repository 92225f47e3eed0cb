//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use stationarity::Series;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Standard normal shocks from a fixed seed
pub fn white_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Gaussian random walk starting at zero
pub fn random_walk(n: usize, seed: u64) -> Series {
    let mut level = 0.0;
    let values = white_noise(n, seed)
        .into_iter()
        .map(|e| {
            level += e;
            level
        })
        .collect();
    Series::new(values).unwrap()
}

/// Linear trend plus white noise
pub fn trend_stationary(n: usize, slope: f64, seed: u64) -> Series {
    let values = white_noise(n, seed)
        .into_iter()
        .enumerate()
        .map(|(t, e)| slope * t as f64 + e)
        .collect();
    Series::new(values).unwrap()
}

/// Random walk with a deterministic drift per step
pub fn drifting_walk(n: usize, drift: f64, seed: u64) -> Series {
    let mut level = 0.0;
    let values = white_noise(n, seed)
        .into_iter()
        .map(|e| {
            level += drift + e;
            level
        })
        .collect();
    Series::new(values).unwrap()
}
