//! Chart rendering.
//!
//! - terminal character-grid charts (`ascii`)
//! - exported chart images via Plotters (`image`)

pub mod ascii;
pub mod image;

pub use ascii::render_ascii_panels;
pub use image::write_chart;
