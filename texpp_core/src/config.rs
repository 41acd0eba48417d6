use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::TexppError;
use crate::TexppResult;

/// Default maximum host document size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Supported config file locations in discovery order (highest precedence
/// first), relative to the host document's directory.
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["texpp.toml", ".texpp.toml", ".config/texpp.toml"];

/// Default LaTeX environment delimiting directive blocks.
pub const DEFAULT_BLOCK_ENVIRONMENT: &str = "texpp";

/// Configuration loaded from a `texpp.toml` file.
///
/// ```toml
/// block_environment = "texpp"
/// max_file_size = 10485760
///
/// [render]
/// heading = "subsection"
/// code_environment = "vhdl"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TexppConfig {
	/// Name of the environment whose `\begin{..}` / `\end{..}` lines delimit
	/// directive blocks.
	#[serde(default = "default_block_environment")]
	pub block_environment: String,
	/// Host documents larger than this are rejected.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	#[serde(default)]
	pub render: RenderConfig,
}

impl Default for TexppConfig {
	fn default() -> Self {
		Self {
			block_environment: default_block_environment(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			render: RenderConfig::default(),
		}
	}
}

/// Names used when rendering fragments.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
	/// Sectioning command for interface and example headings, without the
	/// backslash.
	#[serde(default = "default_heading")]
	pub heading: String,
	/// Environment wrapping extracted source text.
	#[serde(default = "default_code_environment")]
	pub code_environment: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			heading: default_heading(),
			code_environment: default_code_environment(),
		}
	}
}

fn default_block_environment() -> String {
	DEFAULT_BLOCK_ENVIRONMENT.to_string()
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

fn default_heading() -> String {
	String::from("subsection")
}

fn default_code_environment() -> String {
	String::from("vhdl")
}

impl TexppConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if there is none.
	pub fn load(root: &Path) -> TexppResult<Option<TexppConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load the config from an explicit file.
	pub fn load_file(path: &Path) -> TexppResult<TexppConfig> {
		let content = std::fs::read_to_string(path)?;
		toml::from_str(&content).map_err(|e| {
			TexppError::ConfigParse {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})
	}
}
