use std::path::PathBuf;

use crate::DirectiveError;
use crate::ExtractionRequest;
use crate::Sentinel;
use crate::TagEnd;
use crate::TagPair;
use crate::lexer::tokenize;
use crate::tokens::Token;

/// The parsed directive text of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// `splice(...)`
	Splice(ExtractionRequest),
	/// `query(...)` whose result is not kept.
	Query(ExtractionRequest),
	/// `let name = query(...)`
	Let { name: String, request: ExtractionRequest },
	/// `if [!]cond { ... } [else { ... }]`
	If {
		negated: bool,
		condition: Condition,
		then: Vec<Statement>,
		otherwise: Vec<Statement>,
	},
}

/// Holds when the underlying extraction succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
	Binding(String),
	Query(ExtractionRequest),
}

/// Parse the directive text of one block.
pub fn parse(source: &str) -> Result<Program, DirectiveError> {
	let tokens = tokenize(source)?;
	let mut parser = Parser { tokens, cursor: 0 };
	let statements = parser.statements(false)?;

	Ok(Program { statements })
}

struct Parser {
	tokens: Vec<Token>,
	cursor: usize,
}

impl Parser {
	fn peek(&self) -> Option<&Token> {
		self.tokens.get(self.cursor)
	}

	fn next_token(&mut self, expected: &str) -> Result<Token, DirectiveError> {
		let token = self.tokens.get(self.cursor).cloned().ok_or_else(|| {
			DirectiveError::UnexpectedEnd {
				expected: expected.to_string(),
			}
		})?;
		self.cursor += 1;

		Ok(token)
	}

	/// Consume the next token if it equals `token`.
	fn eat(&mut self, token: &Token) -> bool {
		if self.peek() == Some(token) {
			self.cursor += 1;
			true
		} else {
			false
		}
	}

	fn expect(&mut self, token: &Token, expected: &str) -> Result<(), DirectiveError> {
		let found = self.next_token(expected)?;
		if &found == token {
			Ok(())
		} else {
			Err(unexpected(expected, &found))
		}
	}

	fn word(&mut self, expected: &str) -> Result<String, DirectiveError> {
		let token = self.next_token(expected)?;
		match token.as_word() {
			Some(word) => Ok(word.to_string()),
			None => Err(unexpected(expected, &token)),
		}
	}

	/// Statements up to the end of input, or up to the closing brace when
	/// `nested`.
	fn statements(&mut self, nested: bool) -> Result<Vec<Statement>, DirectiveError> {
		let mut statements = vec![];

		loop {
			match self.peek() {
				None if nested => {
					return Err(DirectiveError::UnexpectedEnd {
						expected: String::from("`}`"),
					});
				}
				None => return Ok(statements),
				Some(Token::CloseBrace) if nested => {
					self.cursor += 1;
					return Ok(statements);
				}
				Some(_) => statements.push(self.statement()?),
			}
		}
	}

	fn statement(&mut self) -> Result<Statement, DirectiveError> {
		let statement = match self.next_token("a statement")? {
			Token::Splice => Statement::Splice(self.call()?),
			Token::Query => Statement::Query(self.call()?),
			Token::Let => {
				let name = match self.next_token("a binding name")? {
					Token::Word(name) => name,
					token => return Err(unexpected("a binding name", &token)),
				};
				self.expect(&Token::Equals, "`=`")?;
				self.expect(&Token::Query, "`query`")?;
				Statement::Let {
					name,
					request: self.call()?,
				}
			}
			Token::If => return self.if_statement(),
			token => return Err(unexpected("a statement", &token)),
		};

		self.eat(&Token::Semicolon);
		Ok(statement)
	}

	/// Everything after the `if` keyword.
	fn if_statement(&mut self) -> Result<Statement, DirectiveError> {
		let negated = self.eat(&Token::Bang);
		let condition = match self.next_token("a condition")? {
			Token::Query => Condition::Query(self.call()?),
			Token::Word(name) => Condition::Binding(name),
			token => return Err(unexpected("a condition", &token)),
		};

		self.expect(&Token::OpenBrace, "`{`")?;
		let then = self.statements(true)?;

		let otherwise = if self.eat(&Token::Else) {
			if self.eat(&Token::If) {
				vec![self.if_statement()?]
			} else {
				self.expect(&Token::OpenBrace, "`{` or `if`")?;
				self.statements(true)?
			}
		} else {
			vec![]
		};

		Ok(Statement::If {
			negated,
			condition,
			then,
			otherwise,
		})
	}

	/// `( name = value, ... )`
	fn call(&mut self) -> Result<ExtractionRequest, DirectiveError> {
		self.expect(&Token::OpenParen, "`(`")?;
		let mut arguments = Arguments::default();

		while !self.eat(&Token::CloseParen) {
			let name = self.word("an argument name")?;
			self.expect(&Token::Equals, "`=`")?;

			match name.as_str() {
				"kind" => {
					let value = self.scalar("kind")?;
					set_once(&mut arguments.kind, value, &name)?;
				}
				"path" => {
					let value = self.scalar("path")?;
					set_once(&mut arguments.path, value, &name)?;
				}
				"name" => {
					let value = self.scalar("name")?;
					set_once(&mut arguments.name, value, &name)?;
				}
				"tags" => {
					let value = self.tags()?;
					set_once(&mut arguments.tags, value, &name)?;
				}
				_ => return Err(DirectiveError::UnknownArgument(name)),
			}

			if !self.eat(&Token::Comma) {
				self.expect(&Token::CloseParen, "`,` or `)`")?;
				break;
			}
		}

		arguments.into_request()
	}

	/// A string or bare word.
	fn scalar(&mut self, argument: &str) -> Result<String, DirectiveError> {
		let token = self.next_token("a value")?;
		if let Token::String(value) = token {
			return Ok(value);
		}

		token.as_word().map(str::to_string).ok_or_else(|| {
			DirectiveError::InvalidArgument {
				name: argument.to_string(),
				expected: String::from("a string or a word"),
			}
		})
	}

	/// `(start, end)` where an unquoted `EOB`, `EOL` or `EOF` end is a
	/// sentinel.
	fn tags(&mut self) -> Result<TagPair, DirectiveError> {
		let invalid = || {
			DirectiveError::InvalidArgument {
				name: String::from("tags"),
				expected: String::from("a `(start, end)` pair"),
			}
		};

		if !self.eat(&Token::OpenParen) {
			return Err(invalid());
		}
		let start = self.scalar("tags")?;
		if !self.eat(&Token::Comma) {
			return Err(invalid());
		}
		let end = match self.next_token("an end tag")? {
			Token::String(pattern) => TagEnd::Pattern(pattern),
			token => {
				let word = token.as_word().ok_or_else(invalid)?;
				Sentinel::from_keyword(word)
					.map_or_else(|| TagEnd::Pattern(word.to_string()), TagEnd::Sentinel)
			}
		};
		if !self.eat(&Token::CloseParen) {
			return Err(invalid());
		}

		Ok(TagPair::new(start, end))
	}
}

#[derive(Default)]
struct Arguments {
	kind: Option<String>,
	path: Option<String>,
	name: Option<String>,
	tags: Option<TagPair>,
}

impl Arguments {
	fn into_request(self) -> Result<ExtractionRequest, DirectiveError> {
		let path = self
			.path
			.ok_or_else(|| DirectiveError::MissingArgument(String::from("path")))?;
		let kind = match self.kind {
			Some(kind) => kind,
			None if self.tags.is_some() => String::from("note"),
			None => return Err(DirectiveError::MissingArgument(String::from("kind"))),
		};

		match kind.as_str() {
			"interface" | "example" if self.name.is_none() && self.tags.is_none() => {
				return Err(DirectiveError::MissingArgument(String::from("name")));
			}
			"interface" | "example" if self.tags.is_some() => {
				return Err(DirectiveError::InvalidArgument {
					name: String::from("tags"),
					expected: String::from("`kind=note`"),
				});
			}
			"note" if self.tags.is_none() => {
				return Err(DirectiveError::MissingArgument(String::from("tags")));
			}
			_ => {}
		}

		Ok(ExtractionRequest {
			kind,
			path: PathBuf::from(path),
			name: self.name,
			tags: self.tags,
		})
	}
}

fn set_once<T>(slot: &mut Option<T>, value: T, name: &str) -> Result<(), DirectiveError> {
	if slot.is_some() {
		return Err(DirectiveError::DuplicateArgument(name.to_string()));
	}
	*slot = Some(value);
	Ok(())
}

fn unexpected(expected: &str, found: &Token) -> DirectiveError {
	DirectiveError::UnexpectedToken {
		expected: expected.to_string(),
		found: found.to_string(),
	}
}
