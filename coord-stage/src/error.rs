use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("uniform `{0}` must be set before drawing")]
	MissingUniform(&'static str),
	#[error("unknown uniform `{0}`, expected `scale_factor` or `offset`")]
	UnknownUniform(String),
	#[error("uniform `{name}` expects {expected}")]
	UniformType { name: &'static str, expected: &'static str },
	#[error("`{0}` is not a float")]
	InvalidFloat(String),
	#[error("`{0}` is not a vector of 3 comma separated floats")]
	InvalidVec3(String),
	#[error("`{0}` is not a `name=value` assignment")]
	InvalidAssignment(String),
	#[error("index {index} is out of range for {len} vertices")]
	IndexOutOfRange { index: u32, len: usize },
	#[error("cannot combine indexed and non-indexed vertex batches")]
	MixedIndexing,
	#[error("cannot rebase indices past {base} vertices, u32 indices overflow")]
	IndexOverflow { base: usize },
	#[error(transparent)]
	ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = core::result::Result<T, Error>;
