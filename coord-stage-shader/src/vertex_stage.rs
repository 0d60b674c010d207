use crate::frame::{CameraFrame, FrameTransform};
use crate::uniforms::NormalizeUniforms;
use glam::{Vec3, Vec4};
use spirv_std::spirv;

#[derive(Copy, Clone)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug, PartialEq))]
pub struct VertexOutput {
	/// normalized coordinate, interpolated for the next stage
	pub xyz_coords: Vec3,
	pub clip_space: Vec4,
}

/// Computes both outputs of a single vertex.
///
/// `xyz_coords` only ever sees `point`, `offset` and `scale_factor`, while `clip_space` only sees
/// `point` through the two transforms of `frame`.
#[inline]
pub fn vertex_stage<F: FrameTransform>(uniforms: &NormalizeUniforms, frame: &F, point: Vec3) -> VertexOutput {
	let xyz_coords = uniforms.normalize(point);
	let clip_space = frame.get_gl_position(frame.position_point_into_frame(point));
	VertexOutput { xyz_coords, clip_space }
}

#[spirv(vertex)]
pub fn coord_stage_vs(
	#[spirv(descriptor_set = 0, binding = 0, uniform)] uniforms: &NormalizeUniforms,
	#[spirv(descriptor_set = 0, binding = 1, uniform)] frame: &CameraFrame,
	point: Vec3,
	xyz_coords: &mut Vec3,
	#[spirv(position)] out_pos: &mut Vec4,
) {
	let out = vertex_stage(uniforms, frame, point);
	*xyz_coords = out.xyz_coords;
	*out_pos = out.clip_space;
}
