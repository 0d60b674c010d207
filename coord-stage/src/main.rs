use anyhow::Context;
use clap::Parser;
use coord_stage::batch::VertexBatch;
use coord_stage::dispatch::build_thread_pool;
use coord_stage::logging::{LoggingConfig, init_logging};
use coord_stage::uniforms::{UniformBindings, parse_vec3};
use coord_stage_shader::CameraFrame;
use glam::Vec3;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
	/// Uniform assignment, `scale_factor=<float>` or `offset=<x,y,z>`. Both are required.
	#[arg(short, long = "uniform", value_name = "NAME=VALUE")]
	uniforms: Vec<String>,

	/// Object space position of a vertex, may be repeated
	#[arg(short, long = "point", value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
	points: Vec<Vec3>,

	/// Treat points as already being in clip space instead of viewing them through the camera
	#[arg(long)]
	fixed_in_frame: bool,

	#[arg(long, default_value = "0,0,5", value_parser = parse_vec3, allow_hyphen_values = true)]
	eye: Vec3,

	#[arg(long, default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
	target: Vec3,

	/// Vertical field of view in degrees
	#[arg(long, default_value_t = 45.)]
	fov_y: f32,

	#[arg(long, default_value_t = 16. / 9.)]
	aspect: f32,

	#[arg(long, default_value_t = 0.1)]
	near: f32,

	#[arg(long, default_value_t = 100.)]
	far: f32,

	/// The amount of threads to use
	#[arg(long, short = 'j')]
	threads: Option<usize>,

	/// Log filter in `env_logger` syntax, overrides `RUST_LOG`
	#[arg(long)]
	log: Option<String>,
}

fn main() -> anyhow::Result<()> {
	#[cfg(feature = "profile-with-puffin")]
	let _puffin_server = {
		profiling::puffin::set_scopes_on(true);
		let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
		puffin_http::Server::new(&server_addr)?
	};

	let result = inner_main(Args::parse());
	profiling::finish_frame!();
	result
}

#[profiling::function]
fn inner_main(args: Args) -> anyhow::Result<()> {
	init_logging(LoggingConfig {
		env_filter: args.log,
		..LoggingConfig::default()
	});

	let mut bindings = UniformBindings::new();
	for assignment in &args.uniforms {
		bindings
			.assign(assignment)
			.with_context(|| format!("binding `{assignment}`"))?;
	}
	let uniforms = bindings.build()?;
	log::debug!("uniforms: {:?}", uniforms);

	let camera = if args.fixed_in_frame {
		CameraFrame::fixed_in_frame()
	} else {
		CameraFrame::look_at(
			args.eye,
			args.target,
			Vec3::Y,
			args.fov_y.to_radians(),
			args.aspect,
			args.near,
			args.far,
		)
	};

	let batch = VertexBatch::new(args.points);
	let pool = build_thread_pool(args.threads)?;
	let outputs = pool.install(|| batch.draw(&uniforms, &camera));
	for (point, out) in batch.points().iter().zip(&outputs) {
		println!("{point} -> xyz_coords {} clip {}", out.xyz_coords, out.clip_space);
	}
	Ok(())
}
