pub mod heatmap;
pub mod hex;
pub mod wcag;
