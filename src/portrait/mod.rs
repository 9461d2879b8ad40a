pub mod encoder;
pub mod periodic;
pub mod types;

pub use encoder::{
    conformal_grid_mask, normalized_phase, phase_indices, stepped_modulus_mask,
    stepped_phase_mask,
};
pub use periodic::{sawtooth, step_index};
pub use types::{ComplexGrid, PortraitError, PortraitImage, PortraitOptions, PortraitVariant};
