use std::fmt::Display;
use std::path::Path;

/// Host document languages that can carry directive blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentLanguage {
	Latex,
}

impl DocumentLanguage {
	/// Detect the language from the file extension. Matching is case sensitive.
	pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
		match extension(path.as_ref())? {
			"tex" => Some(Self::Latex),
			_ => None,
		}
	}
}

/// Languages regions can be extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceLanguage {
	Vhdl,
}

impl SourceLanguage {
	/// Detect the language from the file extension (`.vhd` or `.vhdl`).
	pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
		match extension(path.as_ref())? {
			"vhd" | "vhdl" => Some(Self::Vhdl),
			_ => None,
		}
	}
}

impl Display for SourceLanguage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Vhdl => write!(f, "vhdl"),
		}
	}
}

fn extension(path: &Path) -> Option<&str> {
	path.extension().and_then(|ext| ext.to_str())
}
