use bytemuck_derive::AnyBitPattern;
use core::mem::size_of;
use glam::Vec3;
use static_assertions::const_assert_eq;

/// Per-draw uniform block of the coordinate stage.
///
/// Broadcast to every vertex of a draw and immutable while the draw is in flight. `scale_factor` is
/// not checked, a zero scale produces non-finite coordinates.
#[repr(C)]
#[derive(Copy, Clone, AnyBitPattern)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug, PartialEq))]
pub struct NormalizeUniforms {
	pub offset: Vec3,
	pub scale_factor: f32,
}

// std140 packs a vec3 followed by a float into a single 16 byte slot
const_assert_eq!(size_of::<NormalizeUniforms>(), 16);

impl NormalizeUniforms {
	#[inline]
	pub const fn new(offset: Vec3, scale_factor: f32) -> Self {
		Self { offset, scale_factor }
	}

	/// Re-expresses `point` in a frame centered at `offset` and scaled by `1 / scale_factor`.
	#[inline]
	pub fn normalize(&self, point: Vec3) -> Vec3 {
		(point - self.offset) / self.scale_factor
	}
}
