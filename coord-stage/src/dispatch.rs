use crate::error::Result;
use coord_stage_shader::{FrameTransform, NormalizeUniforms, VertexOutput, vertex_stage};
use glam::Vec3;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runs the coordinate stage for every point, one independent invocation each.
///
/// `uniforms` and `frame` stay borrowed until every invocation finished. The outputs are in the
/// same order as `points`.
#[profiling::function]
pub fn run_vertex_stage<F>(uniforms: &NormalizeUniforms, frame: &F, points: &[Vec3]) -> Vec<VertexOutput>
where
	F: FrameTransform + Sync,
{
	log::debug!("running coordinate stage on {} vertices", points.len());
	points
		.par_iter()
		.map(|&point| vertex_stage(uniforms, frame, point))
		.collect()
}

/// `None` or `Some(0)` lets rayon pick the amount of threads.
pub fn build_thread_pool(threads: Option<usize>) -> Result<ThreadPool> {
	Ok(ThreadPoolBuilder::new()
		.num_threads(threads.unwrap_or(0))
		.thread_name(|id| format!("Rayon-{}", id))
		.build()?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use coord_stage_shader::{CameraFrame, FrameFns};
	use glam::{Vec4, Vec4Swizzles};

	fn grid(n: usize) -> Vec<Vec3> {
		(0..n * n * n)
			.map(|i| Vec3::new((i % n) as f32, ((i / n) % n) as f32, (i / (n * n)) as f32) - 0.5 * n as f32)
			.collect()
	}

	#[test]
	fn parallel_matches_sequential() {
		let uniforms = NormalizeUniforms::new(Vec3::new(0.5, -2., 3.), 1.5);
		let camera = CameraFrame::look_at(Vec3::new(3., 4., 20.), Vec3::ZERO, Vec3::Y, 1., 1.5, 0.1, 100.);
		let points = grid(12);
		let sequential = points
			.iter()
			.map(|&p| vertex_stage(&uniforms, &camera, p))
			.collect::<Vec<_>>();
		assert_eq!(run_vertex_stage(&uniforms, &camera, &points), sequential);
	}

	#[test]
	fn keeps_input_order() {
		let uniforms = NormalizeUniforms::new(Vec3::ZERO, 1.);
		let frame = FrameFns::new(|p: Vec3| p, |p: Vec3| Vec4::from((p, 1.)));
		let points = grid(8);
		let outputs = run_vertex_stage(&uniforms, &frame, &points);
		assert_eq!(outputs.len(), points.len());
		for (point, out) in points.iter().zip(&outputs) {
			assert_eq!(out.xyz_coords, *point);
		}
	}

	#[test]
	fn camera_clip_space() {
		let uniforms = NormalizeUniforms::new(Vec3::new(1., 2., 3.), 0.5);
		let camera = CameraFrame::look_at(Vec3::new(0., 0., 10.), Vec3::ZERO, Vec3::Y, 1., 1., 0.1, 100.);
		let points = [Vec3::ZERO, Vec3::new(0., 0., -5.), Vec3::new(0., 0., 5.)];
		let outputs = run_vertex_stage(&uniforms, &camera, &points);

		for (point, out) in points.iter().zip(&outputs) {
			// points on the view axis project to the center of the screen
			assert_relative_eq!(out.clip_space.w, 10. - point.z, epsilon = 1e-5);
			let ndc = out.clip_space.xyz() / out.clip_space.w;
			assert_relative_eq!(ndc.x, 0., epsilon = 1e-6);
			assert_relative_eq!(ndc.y, 0., epsilon = 1e-6);
			assert_eq!(out.xyz_coords, (*point - uniforms.offset) * 2.);
			assert!((0. ..=1.).contains(&ndc.z));
		}
	}

	#[test]
	fn empty_draw() {
		let uniforms = NormalizeUniforms::new(Vec3::ZERO, 1.);
		assert!(run_vertex_stage(&uniforms, &CameraFrame::fixed_in_frame(), &[]).is_empty());
	}

	#[test]
	fn dedicated_pool() -> anyhow::Result<()> {
		let pool = build_thread_pool(Some(2))?;
		assert_eq!(pool.current_num_threads(), 2);

		let uniforms = NormalizeUniforms::new(Vec3::ONE, 2.);
		let camera = CameraFrame::fixed_in_frame();
		let points = grid(6);
		let outputs = pool.install(|| run_vertex_stage(&uniforms, &camera, &points));
		assert_eq!(outputs, run_vertex_stage(&uniforms, &camera, &points));
		Ok(())
	}
}
