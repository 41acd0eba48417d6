use std::path::PathBuf;

use clap::Parser;

/// Environment variable holding the log filter, e.g. `TEXPP_LOG=texpp_core=debug`.
pub const LOG_ENV: &str = "TEXPP_LOG";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Weave VHDL interfaces, usage examples and notes into LaTeX documents.",
	long_about = "texpp reads a LaTeX document, executes every \\begin{texpp} ... \\end{texpp} \
	              block it contains and replaces the block with the VHDL fragments it \
	              requests.\n\nThe woven document is written to standard output. Extraction \
	              failures are rendered inline as \\textbf{error} lines and do not stop the \
	              run.\n\nExample block:\n  \\begin{texpp}\n  splice(kind=interface, \
	              path=rtl/adder.vhd, name=adder)\n  \\end{texpp}"
)]
pub struct TexppCli {
	/// LaTeX document to weave.
	pub input: PathBuf,

	/// Destination path. Required but unused: the woven document is always
	/// written to standard output.
	pub output: PathBuf,

	/// Config file to use instead of discovering `texpp.toml` next to the
	/// input document.
	#[arg(long, short)]
	pub config: Option<PathBuf>,

	/// Enable debug logging on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl TexppCli {
	/// Log filter used when `TEXPP_LOG` is not set.
	pub fn default_log_filter(&self) -> &'static str {
		if self.verbose { "debug" } else { "warn" }
	}
}
