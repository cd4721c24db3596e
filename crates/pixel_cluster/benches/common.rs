use std::time::Duration;

use criterion::{Criterion, Throughput};

// Sized for 512x512 grids, where one labeling pass takes a few milliseconds.
pub const SAMPLE_SIZE: usize = 15;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn clustering_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in grid cells for a square grid of the given side.
pub fn cells_throughput(side: i32) -> Throughput {
    let side = side.max(1) as u64;
    Throughput::Elements(side * side)
}
