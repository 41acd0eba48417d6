use miette::Diagnostic;
use thiserror::Error;

/// Failures that abort a whole run. Everything that can go wrong inside a single
/// directive is reported inline instead (see [`ExtractError`] and
/// [`DirectiveError`]).
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TexppError {
	#[error(transparent)]
	#[diagnostic(code(texpp::io_error))]
	Io(#[from] std::io::Error),

	#[error("unsupported document: `{path}`")]
	#[diagnostic(
		code(texpp::unsupported_document),
		help("only LaTeX documents (`*.tex`) can carry texpp blocks")
	)]
	UnsupportedDocument { path: String },

	#[error("failed to parse config file `{path}`: {reason}")]
	#[diagnostic(
		code(texpp::config_parse),
		help("check that texpp.toml is valid TOML with an optional [render] section")
	)]
	ConfigParse { path: String, reason: String },

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(texpp::file_too_large),
		help("raise `max_file_size` in texpp.toml")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },
}

/// Why an extraction produced no region. The `Display` output is the message
/// rendered inline in the woven document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExtractError {
	#[error("file not found: {0}")]
	FileNotFound(String),

	#[error("invalid file extension: {0}")]
	UnsupportedExtension(String),

	#[error("not found (invalid syntax ...)")]
	NotFound,

	#[error("invalid tag: {0}")]
	InvalidTag(String),

	#[error("invalid kind: {0}")]
	UnsupportedKind(String),

	#[error("failed to read {path}: {reason}")]
	Unreadable { path: String, reason: String },
}

/// Problems with the directive text of a block.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
#[non_exhaustive]
pub enum DirectiveError {
	#[error("unexpected character `{found}` at offset {offset}")]
	#[diagnostic(code(texpp::directive::unexpected_character))]
	UnexpectedCharacter { found: String, offset: usize },

	#[error("invalid string literal at offset {offset}")]
	#[diagnostic(code(texpp::directive::invalid_string))]
	InvalidString { offset: usize },

	#[error("expected {expected}, found `{found}`")]
	#[diagnostic(code(texpp::directive::unexpected_token))]
	UnexpectedToken { expected: String, found: String },

	#[error("expected {expected}, found end of block")]
	#[diagnostic(code(texpp::directive::unexpected_end))]
	UnexpectedEnd { expected: String },

	#[error("unknown argument `{0}`")]
	#[diagnostic(
		code(texpp::directive::unknown_argument),
		help("available arguments: kind, path, name, tags")
	)]
	UnknownArgument(String),

	#[error("duplicate argument `{0}`")]
	#[diagnostic(code(texpp::directive::duplicate_argument))]
	DuplicateArgument(String),

	#[error("missing argument `{0}`")]
	#[diagnostic(code(texpp::directive::missing_argument))]
	MissingArgument(String),

	#[error("argument `{name}` expects {expected}")]
	#[diagnostic(code(texpp::directive::invalid_argument))]
	InvalidArgument { name: String, expected: String },

	#[error("unknown binding `{0}`")]
	#[diagnostic(
		code(texpp::directive::unknown_binding),
		help("bind a result first with `let {0} = query(...)`")
	)]
	UnknownBinding(String),
}

pub type TexppResult<T> = Result<T, TexppError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
