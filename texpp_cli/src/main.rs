use std::process;

use clap::Parser;
use texpp_cli::LOG_ENV;
use texpp_cli::TexppCli;
use texpp_core::Document;
use texpp_core::TexppConfig;
use texpp_core::TexppResult;
use texpp_core::weave_file;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn main() {
	let args = TexppCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logging(&args, use_color);

	match run(&args) {
		Ok(woven) => print!("{woven}"),
		Err(error) => {
			let report: miette::Report = error.into();
			eprintln!("{report:?}");
			process::exit(2);
		}
	}
}

/// Log to stderr so the woven document on stdout stays clean.
fn init_logging(args: &TexppCli, use_color: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));
	let layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.compact();

	tracing_subscriber::registry()
		.with(filter)
		.with(layer)
		.try_init()
		.ok();
}

fn run(args: &TexppCli) -> TexppResult<String> {
	tracing::debug!(
		output = %args.output.display(),
		"output path is not used; writing to stdout"
	);

	let config = load_config(args)?;
	weave_file(&args.input, &config)
}

fn load_config(args: &TexppCli) -> TexppResult<TexppConfig> {
	if let Some(path) = &args.config {
		return TexppConfig::load_file(path);
	}

	let document = Document::new(&args.input)?;
	let config = TexppConfig::load(&document.directory())?;
	if config.is_none() {
		tracing::debug!(dir = %document.directory().display(), "no config file found; using defaults");
	}

	Ok(config.unwrap_or_default())
}

