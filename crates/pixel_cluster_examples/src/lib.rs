#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, load_mask_png, render_clusters_to_png, RenderConfig};
