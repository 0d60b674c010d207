#![cfg_attr(target_arch = "spirv", no_std)]

pub mod frame;
pub mod uniforms;
pub mod vertex_stage;

pub use frame::{CameraFrame, FrameFns, FrameTransform};
pub use uniforms::NormalizeUniforms;
pub use vertex_stage::{VertexOutput, vertex_stage};
