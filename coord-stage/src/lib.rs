pub mod batch;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod uniforms;

pub use coord_stage_shader;
