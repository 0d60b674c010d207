use crate::error::{Error, Result};
use coord_stage_shader::NormalizeUniforms;
use glam::Vec3;
use std::str::FromStr;

pub const SCALE_FACTOR: &str = "scale_factor";
pub const OFFSET: &str = "offset";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UniformValue {
	Float(f32),
	Vec3(Vec3),
}

impl FromStr for UniformValue {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		if s.contains(',') {
			Ok(Self::Vec3(parse_vec3(s)?))
		} else {
			Ok(Self::Float(parse_float(s)?))
		}
	}
}

/// Uniforms the host has bound for the next draw.
///
/// Neither uniform has a default, [`Self::build`] fails until both `scale_factor` and `offset` were
/// set. The resulting [`NormalizeUniforms`] is immutable and is what a draw borrows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UniformBindings {
	scale_factor: Option<f32>,
	offset: Option<Vec3>,
}

impl UniformBindings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
		self.scale_factor = Some(scale_factor);
		self
	}

	pub fn with_offset(mut self, offset: Vec3) -> Self {
		self.offset = Some(offset);
		self
	}

	pub fn set(&mut self, name: &str, value: UniformValue) -> Result<()> {
		match (name, value) {
			(SCALE_FACTOR, UniformValue::Float(v)) => self.scale_factor = Some(v),
			(SCALE_FACTOR, _) => {
				return Err(Error::UniformType {
					name: SCALE_FACTOR,
					expected: "a float",
				});
			}
			(OFFSET, UniformValue::Vec3(v)) => self.offset = Some(v),
			(OFFSET, _) => {
				return Err(Error::UniformType {
					name: OFFSET,
					expected: "a vector of 3 floats",
				});
			}
			_ => return Err(Error::UnknownUniform(String::from(name))),
		}
		Ok(())
	}

	/// Binds a `name=value` assignment such as `scale_factor=2` or `offset=1,1,1`.
	pub fn assign(&mut self, assignment: &str) -> Result<()> {
		let (name, value) = assignment
			.split_once('=')
			.ok_or_else(|| Error::InvalidAssignment(String::from(assignment)))?;
		self.set(name.trim(), value.trim().parse()?)
	}

	pub fn build(&self) -> Result<NormalizeUniforms> {
		let scale_factor = self.scale_factor.ok_or(Error::MissingUniform(SCALE_FACTOR))?;
		let offset = self.offset.ok_or(Error::MissingUniform(OFFSET))?;
		Ok(NormalizeUniforms::new(offset, scale_factor))
	}
}

pub fn parse_float(text: &str) -> Result<f32> {
	text.trim()
		.parse()
		.map_err(|_| Error::InvalidFloat(String::from(text)))
}

pub fn parse_vec3(text: &str) -> Result<Vec3> {
	let mut parts = text.split(',').map(|s| s.trim().parse::<f32>());
	match (parts.next(), parts.next(), parts.next(), parts.next()) {
		(Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Vec3::new(x, y, z)),
		_ => Err(Error::InvalidVec3(String::from(text))),
	}
}
