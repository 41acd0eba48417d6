use crate::Extraction;
use crate::ExtractionResult;
use crate::FragmentKind;
use crate::config::RenderConfig;

/// Escape text for LaTeX: `_`, tab, backspace and newline become `\_`, `\t`,
/// `\b` and `\\` followed by a newline. All other characters pass through.
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());

	for ch in text.chars() {
		match ch {
			'_' => escaped.push_str("\\_"),
			'\t' => escaped.push_str("\\t"),
			'\u{8}' => escaped.push_str("\\b"),
			'\n' => escaped.push_str("\\\\\n"),
			_ => escaped.push(ch),
		}
	}

	escaped
}

/// Renders extraction results into LaTeX fragments.
#[derive(Debug, Clone)]
pub struct Renderer {
	heading: String,
	code_environment: String,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new(&RenderConfig::default())
	}
}

impl Renderer {
	pub fn new(config: &RenderConfig) -> Self {
		Self {
			heading: config.heading.clone(),
			code_environment: config.code_environment.clone(),
		}
	}

	/// Render `result` as a fragment of its kind. Errors always render as an
	/// error fragment.
	pub fn render(&self, result: &ExtractionResult) -> String {
		let extraction = match result {
			Ok(extraction) => extraction,
			Err(error) => return Self::render_error(&error.to_string()),
		};

		match extraction.kind {
			FragmentKind::Interface => {
				let title = format!(
					"{}.{}",
					extraction.namespace.as_deref().unwrap_or_default(),
					extraction.name.as_deref().unwrap_or_default()
				);
				let mut fragment = self.heading(&title);
				fragment.push_str(&self.body("Interface", extraction));
				fragment
			}
			FragmentKind::Example => {
				let mut fragment = self.heading(extraction.name.as_deref().unwrap_or_default());
				fragment.push_str(&self.body("Example", extraction));
				fragment
			}
			FragmentKind::Note => self.body("Note", extraction),
		}
	}

	/// `\textbf{error}: <message>` as its own LaTeX line.
	pub fn render_error(message: &str) -> String {
		format!("\\textbf{{error}}: {}\\\\\n", escape(message))
	}

	fn heading(&self, title: &str) -> String {
		let mut heading = escape(&format!("\\{}{{{title}}}", self.heading));
		heading.push('\n');
		heading
	}

	/// Provenance line, code region and a trailing blank line.
	fn body(&self, label: &str, extraction: &Extraction) -> String {
		let mut body = escape(&format!(
			"{label} from file {} at line {}",
			extraction.source_file.display(),
			extraction.line_index
		));
		body.push('\n');
		body.push_str(&self.code(&extraction.text));
		body.push('\n');
		body
	}

	fn code(&self, text: &str) -> String {
		let environment = &self.code_environment;
		let mut code = format!("\\begin{{{environment}}}\n{text}");
		if !text.is_empty() && !text.ends_with('\n') {
			code.push('\n');
		}
		code.push_str(&format!("\\end{{{environment}}}\n"));
		code
	}
}
