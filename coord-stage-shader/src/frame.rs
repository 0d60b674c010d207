use bytemuck_derive::AnyBitPattern;
use glam::{Affine3A, Mat4, Vec3, Vec4};

/// The pair of transforms that carry an object space point into clip space.
///
/// Neither is owned by the coordinate stage, whoever composes the pipeline injects them. The
/// stage always calls them in order, feeding the result of [`Self::position_point_into_frame`]
/// into [`Self::get_gl_position`].
pub trait FrameTransform {
	/// Frame relative representation passed from the first transform to the second.
	type Framed: Copy;

	fn position_point_into_frame(&self, point: Vec3) -> Self::Framed;

	fn get_gl_position(&self, framed: Self::Framed) -> Vec4;
}

/// [`FrameTransform`] made from two plain functions.
#[derive(Copy, Clone)]
pub struct FrameFns<P, G> {
	pub into_frame: P,
	pub gl_position: G,
}

impl<P, G> FrameFns<P, G>
where
	P: Fn(Vec3) -> Vec3,
	G: Fn(Vec3) -> Vec4,
{
	pub fn new(into_frame: P, gl_position: G) -> Self {
		Self {
			into_frame,
			gl_position,
		}
	}
}

impl<P, G> FrameTransform for FrameFns<P, G>
where
	P: Fn(Vec3) -> Vec3,
	G: Fn(Vec3) -> Vec4,
{
	type Framed = Vec3;

	#[inline]
	fn position_point_into_frame(&self, point: Vec3) -> Vec3 {
		(self.into_frame)(point)
	}

	#[inline]
	fn get_gl_position(&self, framed: Vec3) -> Vec4 {
		(self.gl_position)(framed)
	}
}

/// Camera that can be bound as a uniform: `view` moves points into camera space, `perspective`
/// projects them.
#[derive(Copy, Clone, AnyBitPattern)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
#[repr(C)]
pub struct CameraFrame {
	pub perspective: Mat4,
	pub view: Affine3A,
}

impl CameraFrame {
	pub fn new(perspective: Mat4, view: Affine3A) -> Self {
		Self { perspective, view }
	}

	/// Points are already given in clip space and pass through with `w = 1`.
	pub fn fixed_in_frame() -> Self {
		Self::new(Mat4::IDENTITY, Affine3A::IDENTITY)
	}

	pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fov_y_radians: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
		Self::new(
			Mat4::perspective_rh(fov_y_radians, aspect, z_near, z_far),
			Affine3A::look_at_rh(eye, target, up),
		)
	}
}

impl FrameTransform for CameraFrame {
	type Framed = Vec3;

	#[inline]
	fn position_point_into_frame(&self, point: Vec3) -> Vec3 {
		self.view.transform_point3(point)
	}

	#[inline]
	fn get_gl_position(&self, framed: Vec3) -> Vec4 {
		self.perspective * Vec4::from((framed, 1.))
	}
}
