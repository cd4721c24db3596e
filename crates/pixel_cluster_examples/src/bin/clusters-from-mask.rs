use anyhow::Context;
use pixel_cluster::prelude::*;
use pixel_cluster_examples::{init_tracing, load_mask_png, render_clusters_to_png, RenderConfig};
use tracing::info;

/// Usage: clusters-from-mask <mask.png> [threshold] [min_pixels]
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: clusters-from-mask <mask.png> [threshold] [min_pixels]")?;
    let threshold: u8 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(128);
    let min_pixels: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);

    let grid = load_mask_png(&path, threshold)?;
    info!(
        "Loaded {}x{} mask with {} occupied pixels.",
        grid.width(),
        grid.height(),
        grid.occupied_count()
    );

    let config = ClusterConfig::new()
        .with_strategy(ClusterStrategy::UnionFind)
        .with_order(ClusterOrder::Canonical)
        .with_min_pixels(min_pixels);
    let report = Clusterizer::try_new(config)?.run(&grid);

    for (idx, cluster) in report.clusters.iter().enumerate() {
        let (min, max) = cluster.bounding_box();
        let c = cluster.centroid();
        println!(
            "cluster {idx:>4}: {:>7} px  bbox ({}, {})..=({}, {})  centroid ({:.1}, {:.1})",
            cluster.len(),
            min.x,
            min.y,
            max.x,
            max.y,
            c.x,
            c.y
        );
    }
    if report.discarded_clusters > 0 {
        info!(
            "{} clusters below {} pixels were dropped.",
            report.discarded_clusters, min_pixels
        );
    }

    let out = "clusters-from-mask.png";
    render_clusters_to_png(&grid, &report.clusters, &RenderConfig::new(1), out)?;
    info!("Wrote {}.", out);
    Ok(())
}
