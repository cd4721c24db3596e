use pixel_cluster::prelude::*;
use pixel_cluster_examples::{init_tracing, render_clusters_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Usage: clusters-random-noise [width] [height] [density] [seed]
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let width: i32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(160);
    let height: i32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(120);
    let density: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0.55);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);

    let mut rng = StdRng::seed_from_u64(seed);
    let grid = BitGrid::random(width, height, density, &mut rng)?;

    let runner = Clusterizer::try_new(ClusterConfig::new().with_order(ClusterOrder::Canonical))?;
    let report = runner.run(&grid);

    info!(
        "{}x{} @ {:.2}: {} occupied pixels in {} clusters.",
        width,
        height,
        density,
        report.occupied_pixels,
        report.clusters.len()
    );
    if let Some(largest) = report.largest() {
        let (min, max) = largest.bounding_box();
        info!(
            "Largest cluster: {} pixels, bbox ({}, {})..=({}, {}).",
            largest.len(),
            min.x,
            min.y,
            max.x,
            max.y
        );
    }

    let out = "clusters-random-noise.png";
    let render = RenderConfig::new(4).with_background([240, 240, 244]);
    render_clusters_to_png(&grid, &report.clusters, &render, out)?;
    info!("Wrote {}.", out);
    Ok(())
}
