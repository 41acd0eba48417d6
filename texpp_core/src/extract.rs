use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ExtractError;
use crate::SourceLanguage;
use crate::scanner::ExampleScanner;
use crate::scanner::InterfaceScanner;
use crate::scanner::Region;
use crate::scanner::RegionScanner;
use crate::scanner::TaggedScanner;
use crate::scanner::scan;

/// Symbolic end tags. Only [`Sentinel::EndOfBlock`] has a scanning rule; the
/// others are recognized in directives and rejected with
/// [`ExtractError::InvalidTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
	/// The comment block that starts at the start tag (`EOB`).
	EndOfBlock,
	/// `EOL`
	EndOfLine,
	/// `EOF`
	EndOfFile,
}

impl Sentinel {
	/// Parse the directive spelling of a sentinel.
	pub fn from_keyword(keyword: &str) -> Option<Self> {
		match keyword {
			"EOB" => Some(Self::EndOfBlock),
			"EOL" => Some(Self::EndOfLine),
			"EOF" => Some(Self::EndOfFile),
			_ => None,
		}
	}
}

impl Display for Sentinel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::EndOfBlock => write!(f, "EOB"),
			Self::EndOfLine => write!(f, "EOL"),
			Self::EndOfFile => write!(f, "EOF"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEnd {
	Pattern(String),
	Sentinel(Sentinel),
}

/// Start and end tags of a tagged region. Patterns are regular expressions
/// matched after the comment prefix (`--`) of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
	pub start: String,
	pub end: TagEnd,
}

impl TagPair {
	pub fn new(start: impl Into<String>, end: TagEnd) -> Self {
		Self {
			start: start.into(),
			end,
		}
	}
}

/// The region a request looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	Tagged(TagPair),
	Interface(String),
	Example(String),
}

/// How an extraction is rendered into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
	Interface,
	Example,
	Note,
}

impl FromStr for FragmentKind {
	type Err = ExtractError;

	fn from_str(kind: &str) -> Result<Self, Self::Err> {
		match kind {
			"interface" => Ok(Self::Interface),
			"example" => Ok(Self::Example),
			"note" => Ok(Self::Note),
			_ => Err(ExtractError::UnsupportedKind(kind.to_string())),
		}
	}
}

/// A single extraction request. `path` is relative to the host document.
///
/// `kind` is kept as written in the directive. It is only checked once the
/// source file is known to exist, so a bad path is reported before a bad kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
	pub path: PathBuf,
	pub kind: String,
	pub name: Option<String>,
	pub tags: Option<TagPair>,
}

impl ExtractionRequest {
	pub fn interface(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			kind: String::from("interface"),
			name: Some(name.into()),
			tags: None,
		}
	}

	pub fn example(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			kind: String::from("example"),
			name: Some(name.into()),
			tags: None,
		}
	}

	pub fn tagged(path: impl Into<PathBuf>, tags: TagPair) -> Self {
		Self {
			path: path.into(),
			kind: String::from("note"),
			name: None,
			tags: Some(tags),
		}
	}

	/// The fragment kind and the region to scan for.
	pub fn target(&self) -> Result<(FragmentKind, Target), ExtractError> {
		let kind: FragmentKind = self.kind.parse()?;
		let target = match (kind, &self.name, &self.tags) {
			(FragmentKind::Interface, Some(name), None) => Target::Interface(name.clone()),
			(FragmentKind::Example, Some(name), None) => Target::Example(name.clone()),
			(FragmentKind::Note, _, Some(tags)) => Target::Tagged(tags.clone()),
			_ => return Err(ExtractError::UnsupportedKind(self.kind.clone())),
		};

		Ok((kind, target))
	}
}

/// A successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
	pub kind: FragmentKind,
	pub language: SourceLanguage,
	/// Enclosing package; only set for interfaces.
	pub namespace: Option<String>,
	/// Requested component or instance label; not set for tagged regions.
	pub name: Option<String>,
	/// The resolved path that was read.
	pub source_file: PathBuf,
	/// Zero-based index of the line that terminated the region.
	pub line_index: usize,
	pub text: String,
}

pub type ExtractionResult = Result<Extraction, ExtractError>;

/// Resolves request paths against the host document directory and runs the
/// matching region scanner.
#[derive(Debug, Clone)]
pub struct Extractor {
	base_dir: PathBuf,
}

impl Extractor {
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}

	/// Checks run in order: extension, file presence, kind, then the scan.
	#[tracing::instrument(level = "debug", skip_all, fields(path = %request.path.display()))]
	pub fn extract(&self, request: &ExtractionRequest) -> ExtractionResult {
		let Some(language) = SourceLanguage::from_path(&request.path) else {
			return Err(ExtractError::UnsupportedExtension(
				request.path.display().to_string(),
			));
		};

		let source_file = self.base_dir.join(&request.path);
		let display = source_file.display().to_string();
		let file = open_source(&source_file).map_err(|error| {
			tracing::debug!(%error, "cannot open source file");
			ExtractError::FileNotFound(display.clone())
		})?;
		let reader = BufReader::new(file);

		let (kind, target) = request.target()?;
		let scanned = match &target {
			Target::Interface(name) => scan(reader, InterfaceScanner::new(name.as_str())),
			Target::Example(name) => scan(reader, ExampleScanner::new(name.as_str())),
			Target::Tagged(tags) => scan(reader, TaggedScanner::new(tags)?),
		};

		let region = scanned.map_err(|error| {
			ExtractError::Unreadable {
				path: display,
				reason: error.to_string(),
			}
		})??;

		tracing::debug!(line_index = region.line_index, "region found");

		Ok(Extraction {
			kind,
			language,
			namespace: region.namespace,
			name: region.name,
			source_file,
			line_index: region.line_index,
			text: region.text,
		})
	}
}

/// Open a regular file. Directories and other non-files count as missing.
fn open_source(path: &Path) -> io::Result<File> {
	let file = File::open(path)?;
	if file.metadata()?.is_file() {
		Ok(file)
	} else {
		Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"))
	}
}

/// Run a scanner over in-memory source text.
pub fn scan_str<S: RegionScanner>(content: &str, scanner: S) -> Result<Region, ExtractError> {
	match scan(content.as_bytes(), scanner) {
		Ok(result) => result,
		Err(error) => {
			Err(ExtractError::Unreadable {
				path: String::from("<memory>"),
				reason: error.to_string(),
			})
		}
	}
}
