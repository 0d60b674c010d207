use std::sync::Once;

/// How the `coord-stage` binary and tests report what the host side is doing.
///
/// `env_filter` takes an `env_logger` directive such as `"debug"` or `"coord_stage::dispatch=debug"`
/// and takes precedence over `RUST_LOG`. When neither is given only `info` and above is shown.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	pub env_filter: Option<String>,
	pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			env_filter: None,
			write_style: env_logger::WriteStyle::Auto,
		}
	}
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend before uniforms are bound and draws are dispatched.
///
/// Repeated calls are no-ops, and an already installed logger is left in place.
pub fn init_logging(config: LoggingConfig) {
	INIT.call_once(|| {
		let mut builder = env_logger::Builder::new();
		match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
			Some(filter) => builder.parse_filters(&filter),
			None => builder.filter_level(log::LevelFilter::Info),
		};
		builder.write_style(config.write_style);
		if builder.try_init().is_ok() {
			log::debug!("logger installed");
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_twice() {
		init_logging(LoggingConfig {
			env_filter: Some(String::from("coord_stage=debug")),
			..LoggingConfig::default()
		});
		init_logging(LoggingConfig::default());
		log::debug!("still logging after a second init");
	}
}
