//! Benchmark profiles and utilities for the vivarium engine.
//!
//! Provides pre-seeded boards at reference sizes so every benchmark
//! measures the same workload:
//!
//! - [`reference_board`]: 100x100 board (10K cells) at the default density
//! - [`stress_board`]: 316x316 board (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vivarium_core::NullSink;
use vivarium_engine::{LifeEngine, SimConfig};

/// A Running engine on a seeded 100x100 board (10K cells).
pub fn reference_board(seed: u64) -> LifeEngine {
    seeded_engine(100, 100, seed)
}

/// A Running engine on a seeded 316x316 board (~100K cells).
pub fn stress_board(seed: u64) -> LifeEngine {
    seeded_engine(316, 316, seed)
}

fn seeded_engine(width: u32, height: u32, seed: u64) -> LifeEngine {
    let mut engine = LifeEngine::new();
    let config = SimConfig {
        width,
        height,
        seed,
        ..SimConfig::default()
    };
    engine
        .setup(config)
        .expect("benchmark profile dimensions are valid");
    engine
        .seed_all(&NullSink)
        .expect("engine was just set up");
    engine
}
