//! Services - everything that touches the filesystem

pub mod export;

pub use export::export_chart_svg;
