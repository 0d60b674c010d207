use crate::dispatch::run_vertex_stage;
use crate::error::{Error, Result};
use coord_stage_shader::{FrameTransform, NormalizeUniforms, VertexOutput};
use glam::Vec3;

/// Vertex positions of a draw with an optional index list.
///
/// Batches drawn with the same uniforms can be merged into one draw with [`Self::append`] or
/// [`Self::combine`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBatch {
	points: Vec<Vec3>,
	indices: Option<Vec<u32>>,
}

impl VertexBatch {
	pub fn new(points: Vec<Vec3>) -> Self {
		Self { points, indices: None }
	}

	pub fn indexed(points: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
		if let Some(&index) = indices.iter().find(|&&i| i as usize >= points.len()) {
			return Err(Error::IndexOutOfRange {
				index,
				len: points.len(),
			});
		}
		Ok(Self {
			points,
			indices: Some(indices),
		})
	}

	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn indices(&self) -> Option<&[u32]> {
		self.indices.as_deref()
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Appends the vertices of `other`, rebasing its indices to point past the current vertices.
	/// Both batches must either be indexed or not, and rebased indices must fit into a `u32`. On
	/// error nothing is appended.
	pub fn append(&mut self, other: &VertexBatch) -> Result<()> {
		let base = self.points.len();
		match (&mut self.indices, &other.indices) {
			(Some(indices), Some(other_indices)) => indices.extend(rebase_indices(base, other_indices)?),
			(None, None) => (),
			_ => return Err(Error::MixedIndexing),
		}
		self.points.extend_from_slice(&other.points);
		Ok(())
	}

	pub fn combine<'a>(batches: impl IntoIterator<Item = &'a VertexBatch>) -> Result<Self> {
		let mut batches = batches.into_iter();
		let Some(first) = batches.next() else {
			return Ok(Self::default());
		};
		let mut combined = first.clone();
		for batch in batches {
			combined.append(batch)?;
		}
		Ok(combined)
	}

	/// Runs the coordinate stage on every vertex of this batch.
	pub fn draw<F>(&self, uniforms: &NormalizeUniforms, frame: &F) -> Vec<VertexOutput>
	where
		F: FrameTransform + Sync,
	{
		run_vertex_stage(uniforms, frame, &self.points)
	}
}

/// Shifts `indices` by `base` vertices, failing if a result does not fit into a `u32`.
fn rebase_indices(base: usize, indices: &[u32]) -> Result<Vec<u32>> {
	let Ok(offset) = u32::try_from(base) else {
		return Err(Error::IndexOverflow { base });
	};
	indices
		.iter()
		.map(|&i| offset.checked_add(i).ok_or(Error::IndexOverflow { base }))
		.collect()
}
