pub mod compositor;
pub mod phase_portrait;

pub use compositor::compose_image;
pub use phase_portrait::render_portrait;
