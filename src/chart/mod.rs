//! Income chart geometry and rendering
//!
//! `geometry` holds the pure coordinate mapping; `svg` turns a dataset into a
//! scalable drawing. The terminal chart panel draws from the same geometry.

pub mod geometry;
pub mod svg;

pub use geometry::ChartLayout;
pub use svg::render_svg;
