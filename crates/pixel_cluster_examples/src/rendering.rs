//! Shared helpers for the example binaries: logging setup, PNG masks in and out.
use std::path::Path;

use anyhow::{ensure, Context, Result};
use image::{Rgb, RgbImage};
use pixel_cluster::cluster::PixelCluster;
use pixel_cluster::grid::{BitGrid, PixelGrid};

/// Installs a stderr `fmt` subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Output image settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output pixels per grid cell.
    pub scale: u32,
    /// Colour of unoccupied cells.
    pub background: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 4,
            background: [24, 24, 28],
        }
    }
}

impl RenderConfig {
    pub fn new(scale: u32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

/// Renders each cluster in its own colour and writes a PNG to `path`.
pub fn render_clusters_to_png(
    grid: &dyn PixelGrid,
    clusters: &[PixelCluster],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    ensure!(config.scale > 0, "render scale must be > 0");
    let scale = config.scale;
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for (idx, cluster) in clusters.iter().enumerate() {
        let color = Rgb(cluster_color(idx));
        for p in cluster.pixels() {
            let (x0, y0) = (p.x as u32 * scale, p.y as u32 * scale);
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, color);
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Loads a PNG and marks every pixel whose luma is at least `threshold` as occupied.
pub fn load_mask_png(path: impl AsRef<Path>, threshold: u8) -> Result<BitGrid> {
    let path = path.as_ref();
    let luma = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_luma8();

    let mut grid = BitGrid::new(luma.width() as i32, luma.height() as i32)?;
    for (x, y, px) in luma.enumerate_pixels() {
        if px.0[0] >= threshold {
            grid.set(x as i32, y as i32, true)?;
        }
    }
    Ok(grid)
}

/// Spreads hues with the golden angle so neighbouring indices get distinct colours.
fn cluster_color(idx: usize) -> [u8; 3] {
    let hue = (idx as f32 * 137.508) % 360.0;
    hsv_to_rgb(hue, 0.65, 0.95)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
