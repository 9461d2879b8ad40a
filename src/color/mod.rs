pub mod color_models;
pub mod colormap;

pub use color_models::{hsl_to_rgb, Hsl};
pub use colormap::{build_colormap, ColormapLayout};
