//! Line-oriented region scanners.
//!
//! Each extraction kind is a small state machine that is fed one source line at
//! a time together with its zero-based index. A scanner moves from searching to
//! collecting a region and finally to done; [`RegionScanner::finish`] turns the
//! final state into a [`Region`] or [`ExtractError::NotFound`].

use std::io::BufRead;

use regex::Regex;

use crate::ExtractError;
use crate::Sentinel;
use crate::TagEnd;
use crate::TagPair;
use crate::source_lexer::SourceLine;

/// Whether a scanner wants more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Continue,
	Done,
}

/// A region located inside a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
	/// Enclosing package, for interfaces.
	pub namespace: Option<String>,
	/// The component or instance label that was searched for.
	pub name: Option<String>,
	/// Zero-based index of the line that terminated the region.
	pub line_index: usize,
	/// Collected source lines, line endings included.
	pub text: String,
}

pub trait RegionScanner {
	/// Feed the line at `index`. Lines keep their line terminator.
	fn feed(&mut self, index: usize, line: &str) -> Step;

	/// Consume the scanner once input is exhausted or it reported
	/// [`Step::Done`].
	fn finish(self) -> Result<Region, ExtractError>;
}

/// Drive `scanner` over every line of `reader` until it is done or the input
/// ends. Invalid UTF-8 is replaced rather than rejected.
pub fn scan<S: RegionScanner>(
	mut reader: impl BufRead,
	mut scanner: S,
) -> std::io::Result<Result<Region, ExtractError>> {
	let mut buffer = Vec::new();
	let mut index = 0;

	loop {
		buffer.clear();
		if reader.read_until(b'\n', &mut buffer)? == 0 {
			break;
		}

		let line = String::from_utf8_lossy(&buffer);
		if scanner.feed(index, &line) == Step::Done {
			break;
		}

		index += 1;
	}

	Ok(scanner.finish())
}

#[derive(Debug)]
enum InterfaceState {
	SeekingPackage,
	SeekingComponent { namespace: String },
	InComponent { namespace: String, text: String },
	Done(Region),
}

/// Finds `component <name>` inside a package and collects it up to and
/// including `end component;`.
#[derive(Debug)]
pub struct InterfaceScanner {
	name: String,
	state: InterfaceState,
}

impl InterfaceScanner {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			state: InterfaceState::SeekingPackage,
		}
	}
}

impl RegionScanner for InterfaceScanner {
	fn feed(&mut self, index: usize, line: &str) -> Step {
		let state = std::mem::replace(&mut self.state, InterfaceState::SeekingPackage);

		self.state = match state {
			InterfaceState::SeekingPackage => {
				match SourceLine::lex(line).package_name() {
					Some(namespace) => {
						InterfaceState::SeekingComponent {
							namespace: namespace.to_string(),
						}
					}
					None => InterfaceState::SeekingPackage,
				}
			}
			InterfaceState::SeekingComponent { namespace } => {
				if SourceLine::lex(line).component_name() == Some(self.name.as_str()) {
					InterfaceState::InComponent {
						namespace,
						text: line.to_string(),
					}
				} else {
					InterfaceState::SeekingComponent { namespace }
				}
			}
			InterfaceState::InComponent {
				namespace,
				mut text,
			} => {
				text.push_str(line);
				if SourceLine::lex(line).is_component_end() {
					InterfaceState::Done(Region {
						namespace: Some(namespace),
						name: Some(self.name.clone()),
						line_index: index,
						text,
					})
				} else {
					InterfaceState::InComponent { namespace, text }
				}
			}
			done @ InterfaceState::Done(_) => done,
		};

		if matches!(self.state, InterfaceState::Done(_)) {
			Step::Done
		} else {
			Step::Continue
		}
	}

	fn finish(self) -> Result<Region, ExtractError> {
		match self.state {
			InterfaceState::Done(region) => Ok(region),
			_ => Err(ExtractError::NotFound),
		}
	}
}

#[derive(Debug)]
enum ExampleState {
	Seeking,
	InInstance { text: String },
	Done(Region),
}

/// Finds the instantiation labelled `<name>` and collects it up to the closing
/// `);` line.
#[derive(Debug)]
pub struct ExampleScanner {
	name: String,
	state: ExampleState,
}

impl ExampleScanner {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			state: ExampleState::Seeking,
		}
	}
}

impl RegionScanner for ExampleScanner {
	fn feed(&mut self, index: usize, line: &str) -> Step {
		let state = std::mem::replace(&mut self.state, ExampleState::Seeking);

		self.state = match state {
			ExampleState::Seeking => {
				if SourceLine::lex(line).instance_label() == Some(self.name.as_str()) {
					ExampleState::InInstance {
						text: line.to_string(),
					}
				} else {
					ExampleState::Seeking
				}
			}
			ExampleState::InInstance { mut text } => {
				text.push_str(line);
				if SourceLine::lex(line).is_instance_end() {
					ExampleState::Done(Region {
						namespace: None,
						name: Some(self.name.clone()),
						line_index: index,
						text,
					})
				} else {
					ExampleState::InInstance { text }
				}
			}
			done @ ExampleState::Done(_) => done,
		};

		if matches!(self.state, ExampleState::Done(_)) {
			Step::Done
		} else {
			Step::Continue
		}
	}

	fn finish(self) -> Result<Region, ExtractError> {
		match self.state {
			ExampleState::Done(region) => Ok(region),
			_ => Err(ExtractError::NotFound),
		}
	}
}

#[derive(Debug)]
enum EndMatcher {
	Pattern(Regex),
	EndOfBlock,
}

#[derive(Debug)]
enum TaggedState {
	Seeking,
	InRegion { text: String },
	Done(Region),
}

/// Collects the lines between two tag comments, or the comment block that
/// follows a start tag.
#[derive(Debug)]
pub struct TaggedScanner {
	start: Regex,
	end: EndMatcher,
	state: TaggedState,
}

impl TaggedScanner {
	/// Compile the tag pair. Fails for sentinels without a scanning rule and for
	/// patterns that are not valid regular expressions.
	pub fn new(tags: &TagPair) -> Result<Self, ExtractError> {
		let start = comment_pattern(&tags.start)?;
		let end = match &tags.end {
			TagEnd::Pattern(pattern) => EndMatcher::Pattern(comment_pattern(pattern)?),
			TagEnd::Sentinel(Sentinel::EndOfBlock) => EndMatcher::EndOfBlock,
			TagEnd::Sentinel(sentinel) => {
				return Err(ExtractError::InvalidTag(format!(
					"{sentinel} is not a supported end tag"
				)));
			}
		};

		Ok(Self {
			start,
			end,
			state: TaggedState::Seeking,
		})
	}
}

fn comment_pattern(pattern: &str) -> Result<Regex, ExtractError> {
	Regex::new(&format!(r"^\s*--\s*(?:{pattern})"))
		.map_err(|_| ExtractError::InvalidTag(format!("`{pattern}` is not a valid pattern")))
}

impl RegionScanner for TaggedScanner {
	fn feed(&mut self, index: usize, line: &str) -> Step {
		let state = std::mem::replace(&mut self.state, TaggedState::Seeking);

		self.state = match state {
			TaggedState::Seeking => {
				if self.start.is_match(line) {
					TaggedState::InRegion {
						text: String::new(),
					}
				} else {
					TaggedState::Seeking
				}
			}
			TaggedState::InRegion { mut text } => {
				let terminated = match &self.end {
					EndMatcher::Pattern(end) => end.is_match(line),
					EndMatcher::EndOfBlock => !SourceLine::lex(line).is_comment(),
				};

				if terminated {
					TaggedState::Done(Region {
						namespace: None,
						name: None,
						line_index: index,
						text,
					})
				} else {
					text.push_str(line);
					TaggedState::InRegion { text }
				}
			}
			done @ TaggedState::Done(_) => done,
		};

		if matches!(self.state, TaggedState::Done(_)) {
			Step::Done
		} else {
			Step::Continue
		}
	}

	fn finish(self) -> Result<Region, ExtractError> {
		match self.state {
			TaggedState::Done(region) => Ok(region),
			_ => Err(ExtractError::NotFound),
		}
	}
}
