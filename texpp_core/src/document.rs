use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::DocumentLanguage;
use crate::ExtractionRequest;
use crate::ExtractionResult;
use crate::Extractor;
use crate::Output;
use crate::Renderer;
use crate::TexppConfig;
use crate::TexppError;
use crate::TexppResult;
use crate::executor::Primitives;
use crate::executor::execute;

/// A host document on disk.
#[derive(Debug, Clone)]
pub struct Document {
	path: PathBuf,
	language: DocumentLanguage,
}

impl Document {
	/// Fails with [`TexppError::UnsupportedDocument`] unless the path names a
	/// LaTeX file.
	pub fn new(path: impl Into<PathBuf>) -> TexppResult<Self> {
		let path = path.into();
		let language = DocumentLanguage::from_path(&path).ok_or_else(|| {
			TexppError::UnsupportedDocument {
				path: path.display().to_string(),
			}
		})?;

		Ok(Self { path, language })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn language(&self) -> DocumentLanguage {
		self.language
	}

	/// Directory source paths are resolved against; `.` for a bare file name.
	pub fn directory(&self) -> PathBuf {
		match self.path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
			_ => PathBuf::from("."),
		}
	}
}

/// Lines delimiting a directive block, e.g. `\begin{texpp}` and
/// `\end{texpp}`. Surrounding whitespace is ignored when matching.
#[derive(Debug, Clone)]
pub struct BlockMarkers {
	begin: String,
	end: String,
}

impl BlockMarkers {
	pub fn new(environment: &str) -> Self {
		Self {
			begin: format!("\\begin{{{environment}}}"),
			end: format!("\\end{{{environment}}}"),
		}
	}

	pub fn is_begin(&self, line: &str) -> bool {
		line.trim() == self.begin
	}

	pub fn is_end(&self, line: &str) -> bool {
		line.trim() == self.end
	}
}

/// Everything one weaving run needs: where sources live, how fragments are
/// rendered and the output collected so far.
#[derive(Debug)]
pub struct RunContext {
	extractor: Extractor,
	renderer: Renderer,
	output: Output,
}

impl RunContext {
	pub fn new(document_dir: impl Into<PathBuf>, config: &TexppConfig) -> Self {
		Self {
			extractor: Extractor::new(document_dir),
			renderer: Renderer::new(&config.render),
			output: Output::new(),
		}
	}

	/// Append document text verbatim.
	pub fn emit(&mut self, text: &str) {
		self.output.push_str(text);
	}

	/// Run the directive text of a completed block. Directive errors are
	/// rendered in place of the block's remaining output.
	pub fn execute_block(&mut self, directives: &str) {
		if let Err(error) = execute(directives, self) {
			tracing::warn!(%error, "directive block failed");
			self.output.push_str(&Renderer::render_error(&error.to_string()));
		}
	}

	pub fn finish(self) -> String {
		tracing::debug!(bytes = self.output.len(), "document woven");
		self.output.finish()
	}
}

impl Primitives for RunContext {
	fn query(&mut self, request: &ExtractionRequest) -> ExtractionResult {
		self.extractor.extract(request)
	}

	fn splice(&mut self, request: &ExtractionRequest) {
		let result = self.extractor.extract(request);
		let fragment = self.renderer.render(&result);
		self.output.push_str(&fragment);
	}
}

#[derive(Debug)]
enum ScanState {
	Outside,
	InsideBlock { opened_at: usize, directives: String },
}

/// Splits a host document into plain text, which is copied to the output, and
/// directive blocks, which are executed.
#[derive(Debug)]
pub struct DocumentScanner {
	markers: BlockMarkers,
	state: ScanState,
	line_index: usize,
}

impl DocumentScanner {
	pub fn new(markers: BlockMarkers) -> Self {
		Self {
			markers,
			state: ScanState::Outside,
			line_index: 0,
		}
	}

	pub fn feed(&mut self, line: &str, ctx: &mut RunContext) {
		let state = std::mem::replace(&mut self.state, ScanState::Outside);

		self.state = match state {
			ScanState::Outside if self.markers.is_begin(line) => {
				ScanState::InsideBlock {
					opened_at: self.line_index,
					directives: String::new(),
				}
			}
			ScanState::Outside => {
				ctx.emit(line);
				ScanState::Outside
			}
			ScanState::InsideBlock {
				opened_at,
				directives,
			} if self.markers.is_end(line) => {
				tracing::debug!(line = opened_at + 1, "executing block");
				ctx.execute_block(&directives);
				ScanState::Outside
			}
			ScanState::InsideBlock {
				opened_at,
				mut directives,
			} => {
				directives.push_str(line);
				ScanState::InsideBlock {
					opened_at,
					directives,
				}
			}
		};

		self.line_index += 1;
	}

	/// The document ended. A block that is still open is dropped without being
	/// executed.
	pub fn finish(self) {
		if let ScanState::InsideBlock { opened_at, .. } = self.state {
			tracing::warn!(
				line = opened_at + 1,
				"block is never closed; its directives and the rest of the document are dropped"
			);
		}
	}
}

/// Weave a host document read from `reader`, resolving source paths against
/// `document_dir`.
pub fn weave(
	mut reader: impl BufRead,
	document_dir: impl Into<PathBuf>,
	config: &TexppConfig,
) -> TexppResult<String> {
	let mut ctx = RunContext::new(document_dir, config);
	let mut scanner = DocumentScanner::new(BlockMarkers::new(&config.block_environment));
	let mut line = String::new();

	while reader.read_line(&mut line)? != 0 {
		scanner.feed(&line, &mut ctx);
		line.clear();
	}

	scanner.finish();
	Ok(ctx.finish())
}

/// Weave in-memory document text.
pub fn weave_str(
	content: &str,
	document_dir: impl Into<PathBuf>,
	config: &TexppConfig,
) -> TexppResult<String> {
	weave(content.as_bytes(), document_dir, config)
}

/// Weave the document at `path`. Sources are resolved against its directory.
pub fn weave_file(path: impl Into<PathBuf>, config: &TexppConfig) -> TexppResult<String> {
	let document = Document::new(path)?;
	let file = File::open(document.path())?;
	let size = file.metadata()?.len();

	if size > config.max_file_size {
		return Err(TexppError::FileTooLarge {
			path: document.path().display().to_string(),
			size,
			limit: config.max_file_size,
		});
	}

	tracing::debug!(path = %document.path().display(), "weaving document");
	weave(BufReader::new(file), document.directory(), config)
}
